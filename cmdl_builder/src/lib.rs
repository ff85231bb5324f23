//! Builder module for `cmdl`.
//! See the documentation root of the `cmdl` crate for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use constant::TERMINAL;
pub use model::*;
pub use parser::{
    ConfigError, Error, Metadata, ParseError, Position, Record, RecordId, Registry, Scan, Token,
    TokenStream,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
