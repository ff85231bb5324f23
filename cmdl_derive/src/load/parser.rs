use crate::model::{DeriveParameter, DeriveParser};

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        match &value.data {
            syn::Data::Struct(ds) => {
                let parameters = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        .map(DeriveParameter::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct {
                        fields: syn::Fields::Unit,
                        ..
                    } => Vec::default(),
                    syn::DataStruct { .. } => {
                        return Err(syn::Error::new(
                            value.ident.span(),
                            "Invalid - CmdlParser requires named fields.",
                        ));
                    }
                };

                Ok(DeriveParser {
                    struct_name: value.ident.clone(),
                    parameters,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - CmdlParser may only be derived for a struct.",
            )),
        }
    }
}
