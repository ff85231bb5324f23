use crate::load::incompatible_error;
use crate::model::{DeriveParameter, DeriveValue, IntermediateAttributes, ParameterType};
use proc_macro2::Literal;
use quote::ToTokens;

const KINDS: [&str; 7] = [
    "argument",
    "argument_list",
    "switch",
    "option",
    "collection",
    "tuple",
    "tuple_collection",
];

impl TryFrom<&syn::Field> for DeriveParameter {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = value.ident.clone().ok_or_else(|| {
            syn::Error::new_spanned(value, "Invalid - parameter fields must be named.")
        })?;
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        let short = attributes.first("short");
        let long = attributes.first("long");
        let help = attributes.first("help");
        let maximum = attributes.first("maximum");
        let named = short.is_some() || long.is_some();

        let explicit: Vec<&str> = KINDS
            .iter()
            .copied()
            .filter(|kind| attributes.singletons.contains(*kind))
            .collect();

        if explicit.len() > 1 {
            return Err(incompatible_error(
                &field_name,
                format!("#[cmdl({})]", explicit[0]),
                format!("#[cmdl({})]", explicit[1]),
            ));
        }

        let kind = match explicit.first() {
            Some(kind) => *kind,
            None => match type_name(&value.ty).as_deref() {
                Some("bool") => "switch",
                Some("Vec") if named => "collection",
                Some("Vec") => "argument_list",
                _ if named => "option",
                _ => "argument",
            },
        };

        let parameter_type = match kind {
            "argument" => ParameterType::Argument,
            "argument_list" => ParameterType::ArgumentList {
                maximum: maximum.clone().unwrap_or_else(|| DeriveValue {
                    tokens: Literal::usize_unsuffixed(0).into_token_stream(),
                }),
            },
            "switch" => ParameterType::Switch,
            "option" => ParameterType::Scalar,
            "collection" => ParameterType::Collection,
            "tuple" => ParameterType::Tuple,
            "tuple_collection" => ParameterType::TupleCollection,
            _ => unreachable!("internal error - unknown kind {kind}"),
        };

        if parameter_type.is_positional() && named {
            return Err(incompatible_error(
                &field_name,
                format!("#[cmdl({kind})]"),
                "#[cmdl(short = ..)]/#[cmdl(long = ..)]",
            ));
        }

        if maximum.is_some() && !matches!(parameter_type, ParameterType::ArgumentList { .. }) {
            return Err(incompatible_error(
                &field_name,
                format!("#[cmdl({kind})]"),
                "#[cmdl(maximum = ..)]",
            ));
        }

        // Options are named after their field, unless told otherwise.
        let long = if parameter_type.is_positional() || named {
            long
        } else {
            let name = format!("--{}", field_name.to_string().replace('_', "-"));
            Some(DeriveValue {
                tokens: Literal::string(&name).into_token_stream(),
            })
        };

        Ok(DeriveParameter {
            field_name,
            short,
            long,
            help,
            parameter_type,
        })
    }
}

// The outermost name of a type path (ex: `Vec` for `std::vec::Vec<u32>`).
fn type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::Span;
    use syn::parse_quote;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    fn string(value: &str) -> Option<DeriveValue> {
        Some(DeriveValue {
            tokens: Literal::string(value).into_token_stream(),
        })
    }

    fn zero() -> DeriveValue {
        DeriveValue {
            tokens: Literal::usize_unsuffixed(0).into_token_stream(),
        }
    }

    #[test]
    fn construct_argument() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[cmdl(help = "the count")]
            count: u32
        };

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("count"),
                short: None,
                long: None,
                help: string("the count"),
                parameter_type: ParameterType::Argument,
            }
        );
    }

    #[test]
    fn construct_inferred() {
        let cases: Vec<(syn::Field, ParameterType)> = vec![
            (parse_quote! { a: u32 }, ParameterType::Argument),
            (parse_quote! { a: Vec<u32> }, ParameterType::ArgumentList { maximum: zero() }),
            (parse_quote! { a: bool }, ParameterType::Switch),
            (parse_quote! { #[cmdl(short = "-a")] a: u32 }, ParameterType::Scalar),
            (parse_quote! { #[cmdl(long = "--a")] a: std::vec::Vec<u32> }, ParameterType::Collection),
        ];

        for (field, expected) in cases {
            let parameter = DeriveParameter::try_from(&field).unwrap();
            assert_eq!(parameter.parameter_type, expected);
        }
    }

    #[test]
    fn construct_explicit() {
        let cases: Vec<(syn::Field, ParameterType)> = vec![
            (parse_quote! { #[cmdl(argument)] a: Vec<u32> }, ParameterType::Argument),
            (
                parse_quote! { #[cmdl(argument_list, maximum = 2)] a: Vec<u32> },
                ParameterType::ArgumentList {
                    maximum: DeriveValue {
                        tokens: Literal::i32_unsuffixed(2).into_token_stream(),
                    },
                },
            ),
            (parse_quote! { #[cmdl(switch)] a: Flag }, ParameterType::Switch),
            (parse_quote! { #[cmdl(option)] a: u32 }, ParameterType::Scalar),
            (parse_quote! { #[cmdl(collection)] a: Vec<u32> }, ParameterType::Collection),
            (parse_quote! { #[cmdl(tuple)] a: (u32, u32) }, ParameterType::Tuple),
            (parse_quote! { #[cmdl(tuple_collection)] a: Vec<(u32, u32)> }, ParameterType::TupleCollection),
        ];

        for (field, expected) in cases {
            let parameter = DeriveParameter::try_from(&field).unwrap();
            assert_eq!(parameter.parameter_type, expected);
        }
    }

    #[test]
    fn construct_default_long() {
        // Setup
        let field: syn::Field = parse_quote! {
            #[cmdl(option)]
            max_depth: u32
        };

        // Execute
        let parameter = DeriveParameter::try_from(&field).unwrap();

        // Verify
        assert_eq!(parameter.short, None);
        assert_eq!(parameter.long, string("--max-depth"));
    }

    #[test]
    fn construct_named() {
        let field: syn::Field = parse_quote! {
            #[cmdl(short = "-v", long = "--verbose", help = "more")]
            verbose: bool
        };

        let parameter = DeriveParameter::try_from(&field).unwrap();

        assert_eq!(
            parameter,
            DeriveParameter {
                field_name: ident("verbose"),
                short: string("-v"),
                long: string("--verbose"),
                help: string("more"),
                parameter_type: ParameterType::Switch,
            }
        );
    }

    #[test]
    fn construct_incompatible_kinds() {
        let field: syn::Field = parse_quote! {
            #[cmdl(switch, option)]
            a: bool
        };

        let error = DeriveParameter::try_from(&field).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - field cannot be both `#[cmdl(switch)]` and `#[cmdl(option)]`."
        );
    }

    #[test]
    fn construct_named_positional() {
        let field: syn::Field = parse_quote! {
            #[cmdl(argument, short = "-a")]
            a: u32
        };

        assert!(DeriveParameter::try_from(&field).is_err());
    }

    #[test]
    fn construct_misplaced_maximum() {
        let field: syn::Field = parse_quote! {
            #[cmdl(maximum = 3)]
            a: u32
        };

        let error = DeriveParameter::try_from(&field).unwrap_err();

        assert_eq!(
            error.to_string(),
            "Invalid - field cannot be both `#[cmdl(argument)]` and `#[cmdl(maximum = ..)]`."
        );
    }
}
