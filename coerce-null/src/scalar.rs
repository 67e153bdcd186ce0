use alloc::{format, string::String};

use coerce::DecodeError;

/// A scalar that can sit inside a [`Null`](crate::Null) and be decoded from
/// text.
pub trait NullScalar: Default {
    /// Decodes `text`, returning `None` when it denotes an absent value.
    fn decode_scalar(text: &str) -> Result<Option<Self>, DecodeError>;
}

fn is_null_literal(text: &str) -> bool {
    text.is_empty() || text == "null"
}

macro_rules! impl_null_scalar_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NullScalar for $ty {
                fn decode_scalar(text: &str) -> Result<Option<Self>, DecodeError> {
                    if is_null_literal(text) {
                        return Ok(None);
                    }
                    text.parse::<$ty>().map(Some).map_err(|err| {
                        DecodeError::with_source(
                            format!("invalid {} {text:?}", stringify!($ty)),
                            err,
                        )
                    })
                }
            }
        )*
    };
}

impl_null_scalar_from_str!(isize, i8, i16, i32, i64, usize, u8, u16, u32, u64, f32, f64);

impl NullScalar for bool {
    fn decode_scalar(text: &str) -> Result<Option<Self>, DecodeError> {
        match text {
            "" | "null" => Ok(None),
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(DecodeError::new(format!("invalid bool {text:?}"))),
        }
    }
}

impl NullScalar for String {
    fn decode_scalar(text: &str) -> Result<Option<Self>, DecodeError> {
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from(text)))
    }
}
