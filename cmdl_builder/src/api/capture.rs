use std::str::FromStr;
use thiserror::Error;

use crate::model::Parsed;
use crate::parser::{Metadata, ParseError, TokenStream};
use crate::prelude::TupleValue;

/// Behaviour of a declarable parameter: describe itself, then consume its tokens from the command line.
///
/// The descriptor kinds of this crate ([`Argument`](crate::Argument), [`Scalar`](crate::Scalar), etc) implement this trait.
/// Implementations must leave the stream unmodified when returning an error.
pub trait Descriptor {
    /// The type of the bound value.
    type Value;

    /// The help metadata of this parameter.
    fn metadata(&self) -> Metadata;

    /// Consume the matching tokens from `stream`, producing the bound value.
    fn consume(self, stream: &mut TokenStream) -> Result<Parsed<Self::Value>, ParseError>;
}

/// A failure to convert token text into a typed value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// The text does not convert to the type.
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        /// The text which failed to convert.
        token: String,
        /// The target type.
        type_name: &'static str,
    },

    /// The text does not split into the tuple's number of fields.
    #[error("cannot split '{text}' into {expected} fields (found {found}).")]
    FieldCount {
        /// The joined text.
        text: String,
        /// The tuple arity.
        expected: usize,
        /// The number of fields found.
        found: usize,
    },
}

impl InvalidCapture {
    pub(crate) fn token(&self) -> &str {
        match self {
            InvalidCapture::InvalidConversion { token, .. } => token,
            InvalidCapture::FieldCount { text, .. } => text,
        }
    }
}

/// Convert the whole of `token` into a `T`.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// assert_eq!(cmdl::capture::<f64>("1.5"), Ok(1.5));
/// assert!(cmdl::capture::<u32>("-1").is_err());
/// assert!(cmdl::capture::<u32>("12abc").is_err());
/// ```
pub fn capture<T: FromStr>(token: &str) -> Result<T, InvalidCapture> {
    T::from_str(token).map_err(|_| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}

/// Convert `tokens` into the fields of a `T`, atomically.
///
/// The tokens are joined with a space and re-split on whitespace; this must produce precisely `T::ARITY` fields.
/// Each field is then converted in declaration order, left to right.
/// Either every field converts, or no value is produced.
///
/// ### Example
/// ```
/// # use cmdl_builder as cmdl;
/// let value: (f64, i32, String) = cmdl::capture_tuple(&["4.4", "4", "str"]).unwrap();
/// assert_eq!(value, (4.4, 4, "str".to_string()));
///
/// assert!(cmdl::capture_tuple::<(f64, i32)>(&["4.4", "str"]).is_err());
/// ```
pub fn capture_tuple<T: TupleValue>(tokens: &[&str]) -> Result<T, InvalidCapture> {
    let text = tokens.join(" ");
    let fields: Vec<&str> = text.split_whitespace().collect();

    if fields.len() != T::ARITY {
        let found = fields.len();
        return Err(InvalidCapture::FieldCount {
            text,
            expected: T::ARITY,
            found,
        });
    }

    T::from_fields(&fields)
}
