use std::str::FromStr;

use crate::api::capture::{capture, InvalidCapture};
use crate::prelude::TupleValue;

fn check_arity(fields: &[&str], arity: usize) -> Result<(), InvalidCapture> {
    if fields.len() == arity {
        Ok(())
    } else {
        Err(InvalidCapture::FieldCount {
            text: fields.join(" "),
            expected: arity,
            found: fields.len(),
        })
    }
}

// The fields are converted left to right; the first failure aborts the whole tuple.
macro_rules! tuple_value {
    ($arity:expr; $($index:tt => $field:ident),+) => {
        impl<$($field),+> TupleValue for ($($field,)+)
        where
            $($field: FromStr,)+
        {
            const ARITY: usize = $arity;

            fn from_fields(fields: &[&str]) -> Result<Self, InvalidCapture> {
                check_arity(fields, Self::ARITY)?;
                Ok(($(capture::<$field>(fields[$index])?,)+))
            }
        }
    };
}

tuple_value!(1; 0 => A);
tuple_value!(2; 0 => A, 1 => B);
tuple_value!(3; 0 => A, 1 => B, 2 => C);
tuple_value!(4; 0 => A, 1 => B, 2 => C, 3 => D);
tuple_value!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
tuple_value!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
tuple_value!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
tuple_value!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);

impl<T: FromStr, const N: usize> TupleValue for [T; N] {
    const ARITY: usize = N;

    fn from_fields(fields: &[&str]) -> Result<Self, InvalidCapture> {
        check_arity(fields, N)?;
        let values = fields
            .iter()
            .map(|field| capture::<T>(field))
            .collect::<Result<Vec<T>, InvalidCapture>>()?;

        match values.try_into() {
            Ok(array) => Ok(array),
            Err(_) => unreachable!("internal error - arity was checked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn arity() {
        assert_eq!(<(u8,)>::ARITY, 1);
        assert_eq!(<(u8, String)>::ARITY, 2);
        assert_eq!(<(f64, i32, String, f64, i32, String)>::ARITY, 6);
        assert_eq!(<(u8, u8, u8, u8, u8, u8, u8, u8)>::ARITY, 8);
        assert_eq!(<[u8; 4]>::ARITY, 4);
    }

    #[test]
    fn tuple_from_fields() {
        let value = <(f64,)>::from_fields(&["3.3"]).unwrap();
        assert_eq!(value, (3.3,));

        let value =
            <(f64, i32, String, f64, i32, String)>::from_fields(&["0.5", "1", "a", "1.5", "2", "b"])
                .unwrap();
        assert_eq!(value, (0.5, 1, "a".to_string(), 1.5, 2, "b".to_string()));
    }

    #[rstest]
    #[case(vec!["x", "1", "a"], "x")]
    #[case(vec!["1.0", "x", "a"], "x")]
    #[case(vec!["1.0", "1.0", "a"], "1.0")]
    fn tuple_from_fields_invalid(#[case] fields: Vec<&str>, #[case] token: &str) {
        let error = <(f64, i32, String)>::from_fields(&fields).unwrap_err();
        assert_eq!(error.token(), token);
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec!["1"])]
    #[case(vec!["1", "2", "3"])]
    fn tuple_from_fields_arity(#[case] fields: Vec<&str>) {
        assert_matches!(
            <(u32, u32)>::from_fields(&fields),
            Err(InvalidCapture::FieldCount { expected: 2, .. })
        );
    }

    #[test]
    fn array_from_fields() {
        assert_eq!(<[u32; 3]>::from_fields(&["1", "2", "3"]), Ok([1, 2, 3]));
        assert_matches!(
            <[u32; 3]>::from_fields(&["1", "b", "3"]),
            Err(InvalidCapture::InvalidConversion { .. })
        );
        assert_matches!(
            <[u32; 3]>::from_fields(&["1", "2"]),
            Err(InvalidCapture::FieldCount { expected: 3, found: 2, .. })
        );
    }
}
