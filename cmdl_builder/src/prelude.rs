//! Traits which, typically, may be imported without concern: `use cmdl::prelude::*`.

use crate::api::InvalidCapture;

/// Behaviour for a fixed number of typed fields to be converted together, atomically.
///
/// `cmdl` implements this for tuples of 1 to 8 [`std::str::FromStr`] fields, as well as arrays `[T; N]`.
// Needs to be imported in order to implement a custom `TupleValue`.
pub trait TupleValue: Sized {
    /// The number of fields (and so tokens) making up one value.
    const ARITY: usize;

    /// Convert precisely `ARITY` fields, in declaration order.
    fn from_fields(fields: &[&str]) -> Result<Self, InvalidCapture>;
}
