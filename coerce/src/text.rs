use alloc::string::{String, ToString};

use crate::{Category, SetError, SourceValue};

/// Renders `value` as text, failing with `category` for unconvertible sources.
///
/// Integers render in base 10, booleans as `true`/`false`, and floats with
/// the shortest representation that round-trips through `f64`. An `f32`
/// source is widened first, so `123.2_f32` renders as `123.19999694824219`.
/// Non-finite floats render as `+Inf`, `-Inf` and `NaN`.
pub(crate) fn to_text(value: &SourceValue, category: Category) -> Result<String, SetError> {
    let text = match value {
        SourceValue::String(s) => s.clone(),
        SourceValue::Bool(b) => b.to_string(),
        SourceValue::F32(v) => render_float(*v as f64),
        SourceValue::F64(v) => render_float(*v),
        other => match other.as_integer() {
            Some(n) => n.to_string(),
            None => return Err(SetError::unsupported(category, other.type_name())),
        },
    };
    Ok(text)
}

fn render_float(v: f64) -> String {
    if v.is_nan() {
        String::from("NaN")
    } else if v.is_infinite() {
        String::from(if v > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        v.to_string()
    }
}

pub(crate) fn set_string(dst: &mut String, value: &SourceValue) -> Result<(), SetError> {
    *dst = to_text(value, Category::String)?;
    Ok(())
}
