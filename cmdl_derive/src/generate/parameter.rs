use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::{DeriveParameter, DeriveValue, ParameterType};

impl From<DeriveParameter> for TokenStream2 {
    fn from(value: DeriveParameter) -> Self {
        let DeriveParameter {
            field_name,
            short,
            long,
            help,
            parameter_type,
        } = value;

        let flag = match (short, long) {
            (Some(DeriveValue { tokens: s }), Some(DeriveValue { tokens: l })) => {
                quote! { (#s, #l) }
            }
            (Some(DeriveValue { tokens: s }), None) => quote! { ::cmdl::Flag::short(#s) },
            (None, Some(DeriveValue { tokens: l })) => quote! { ::cmdl::Flag::long(#l) },
            (None, None) => quote! {},
        };
        let help = match help {
            Some(DeriveValue { tokens }) => quote! { .help(#tokens) },
            None => quote! {},
        };

        match parameter_type {
            ParameterType::Argument => quote! {
                target.#field_name = cli.try_add(::cmdl::Argument::new(target.#field_name)#help)?.into_value();
            },
            ParameterType::ArgumentList {
                maximum: DeriveValue { tokens: maximum },
            } => quote! {
                target.#field_name = cli.try_add(::cmdl::ArgumentList::new(target.#field_name, #maximum)#help)?.into_value();
            },
            ParameterType::Switch => quote! {
                target.#field_name = cli.try_add(::cmdl::Switch::new(#flag, target.#field_name)#help)?.into_value();
            },
            ParameterType::Scalar => quote! {
                target.#field_name = cli.try_add(::cmdl::Scalar::new(#flag, target.#field_name)#help)?.into_value();
            },
            ParameterType::Tuple => quote! {
                target.#field_name = cli.try_add(::cmdl::Tuple::new(#flag, target.#field_name)#help)?.into_value();
            },
            // The field keeps its own default unless the flag occurs.
            ParameterType::Collection => quote! {
                let parsed = cli.try_add(::cmdl::Collection::new(#flag, ::std::default::Default::default())#help)?;
                if parsed.is_found() {
                    target.#field_name = parsed.into_value();
                }
            },
            ParameterType::TupleCollection => quote! {
                let parsed = cli.try_add(::cmdl::TupleCollection::new(#flag, ::std::default::Default::default())#help)?;
                if parsed.is_found() {
                    target.#field_name = parsed.into_value();
                }
            },
        }
    }
}
