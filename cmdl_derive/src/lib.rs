extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive `cmdl_bind` and `cmdl_parse` for a struct of parameters.
///
/// See the `cmdl::derive` module for details.
#[proc_macro_derive(CmdlParser, attributes(cmdl))]
pub fn cmdl_parser(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(parser) => TokenStream2::from(parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
