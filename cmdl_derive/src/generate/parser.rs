use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            parameters,
        } = value;

        // Options first, so that positionals never take a flag or its values.
        let (positionals, options): (Vec<_>, Vec<_>) = parameters
            .into_iter()
            .partition(|p| p.parameter_type.is_positional());
        let fields: Vec<TokenStream2> = options
            .into_iter()
            .chain(positionals)
            .map(TokenStream2::from)
            .collect();

        quote! {
            impl #struct_name {
                #[doc = "Bind the fields against the command line."]
                pub fn cmdl_bind(cli: &mut ::cmdl::CommandLine) -> ::std::result::Result<Self, ::cmdl::Error> {
                    #[allow(unused_mut)]
                    let mut target = <Self as ::std::default::Default>::default();
                    #( #fields )*
                    ::std::result::Result::Ok(target)
                }

                #[doc = "Parse the process arguments, reporting and exiting on failure."]
                pub fn cmdl_parse() -> Self {
                    let mut cli = ::cmdl::CommandLine::from_env();
                    match Self::cmdl_bind(&mut cli) {
                        ::std::result::Result::Ok(target) => target,
                        ::std::result::Result::Err(error) => {
                            cli.report(&error);
                            ::std::process::exit(1);
                        }
                    }
                }
            }
        }
    }
}
