use crate::{Category, ParseCause, SetError, SourceValue};

/// Converts `value` to a boolean.
///
/// Integers convert only from 0 and 1; anything else is
/// [`SetError::OutOfRange`] rather than a parse failure.
pub(crate) fn bool_value(value: &SourceValue) -> Result<bool, SetError> {
    match value {
        SourceValue::Bool(b) => Ok(*b),
        SourceValue::String(text) => parse_bool(text),
        other => match other.as_integer() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            Some(value) => Err(SetError::OutOfRange { value }),
            None => Err(SetError::unsupported(Category::Bool, other.type_name())),
        },
    }
}

pub(crate) fn set_bool(dst: &mut bool, value: &SourceValue) -> Result<(), SetError> {
    *dst = bool_value(value)?;
    Ok(())
}

/// Strict boolean literal parser.
fn parse_bool(text: &str) -> Result<bool, SetError> {
    match text {
        "1" | "t" | "T" => Ok(true),
        "0" | "f" | "F" => Ok(false),
        _ if text.eq_ignore_ascii_case("true") => Ok(true),
        _ if text.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(SetError::parse(Category::Bool, text, ParseCause::Syntax)),
    }
}
