use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs: HashMap<String, Vec<DeriveValue>> = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    pairs.entry(left.to_string()).or_default().push(DeriveValue {
                        tokens: assignment.right.to_token_stream(),
                    });
                }
                syn::Expr::Path(ref path) if path.path.get_ident().is_some() => {
                    if let Some(ident) = path.path.get_ident() {
                        singletons.insert(ident.to_string());
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Unparseable attribute: {}",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Merge every `#[cmdl(..)]` attribute of an item.
    pub(crate) fn load(attributes: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut out = IntermediateAttributes::default();

        for attribute in attributes {
            if attribute.path().is_ident("cmdl") {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                out.singletons.extend(singletons);

                for (key, values) in pairs {
                    out.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(out)
    }

    /// The first value of the pair `key`, if present.
    pub(crate) fn first(&self, key: &str) -> Option<DeriveValue> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .cloned()
    }
}
