//! Signed, unsigned and floating-point converters.
//!
//! Integer sources and text are folded into a 64-bit accumulator first; the
//! accumulator is then stored with a truncating cast, so narrowing wraps the
//! way `1000_i64 as i8` does. Only text is range-checked, against the
//! destination's declared width.

use core::num::IntErrorKind;

use crate::slot::{FloatSlot, IntSlot, UintSlot};
use crate::{Category, FloatWidth, ParseCause, SetError, SourceValue, trace};

/// Folds `value` into a signed accumulator, parsing text within `bits`.
pub(crate) fn int_value(value: &SourceValue, bits: u32) -> Result<i64, SetError> {
    if let Some(v) = value.as_signed() {
        return Ok(v);
    }
    if let Some(v) = value.as_unsigned() {
        return Ok(v as i64);
    }
    match value {
        SourceValue::String(text) => parse_int(text, bits),
        other => Err(SetError::unsupported(Category::Int, other.type_name())),
    }
}

/// Folds `value` into an unsigned accumulator, parsing text within `bits`.
pub(crate) fn uint_value(value: &SourceValue, bits: u32) -> Result<u64, SetError> {
    if let Some(v) = value.as_unsigned() {
        return Ok(v);
    }
    if let Some(v) = value.as_signed() {
        return Ok(v as u64);
    }
    match value {
        SourceValue::String(text) => parse_uint(text, bits),
        other => Err(SetError::unsupported(Category::Uint, other.type_name())),
    }
}

/// Converts `value` to a float.
///
/// Text and `f64` sources are rounded to `width` here; integer sources are
/// not, so the slot's own narrowing is the only rounding after `i64 as f64`.
pub(crate) fn float_value(value: &SourceValue, width: FloatWidth) -> Result<f64, SetError> {
    match value {
        SourceValue::F32(v) => return Ok(*v as f64),
        SourceValue::F64(v) => return Ok(round_to(width, *v)),
        SourceValue::String(text) => return parse_float(text, width),
        _ => {}
    }

    // Integers always pass through f64; an f32 slot narrows on store.
    if let Some(v) = value.as_signed() {
        return Ok(v as f64);
    }
    if let Some(v) = value.as_unsigned() {
        return Ok(v as f64);
    }
    Err(SetError::unsupported(Category::Float, value.type_name()))
}

pub(crate) fn set_int(dst: IntSlot<'_>, value: &SourceValue) -> Result<(), SetError> {
    let bits = dst.width().parse_bits();
    let accumulator = int_value(value, bits)?;
    trace!("storing {accumulator} into {bits}-bit signed slot");
    dst.store(accumulator);
    Ok(())
}

pub(crate) fn set_uint(dst: UintSlot<'_>, value: &SourceValue) -> Result<(), SetError> {
    let bits = dst.width().parse_bits();
    let accumulator = uint_value(value, bits)?;
    trace!("storing {accumulator} into {bits}-bit unsigned slot");
    dst.store(accumulator);
    Ok(())
}

pub(crate) fn set_float(dst: FloatSlot<'_>, value: &SourceValue) -> Result<(), SetError> {
    let converted = float_value(value, dst.width())?;
    dst.store(converted);
    Ok(())
}

fn parse_int(text: &str, bits: u32) -> Result<i64, SetError> {
    if text.is_empty() {
        return Ok(0);
    }

    let range = || SetError::parse(Category::Int, text, ParseCause::Range { bits });
    let parsed = text.parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => range(),
        _ => SetError::parse(Category::Int, text, ParseCause::Syntax),
    })?;

    if bits < 64 {
        let max = (1_i64 << (bits - 1)) - 1;
        let min = -(1_i64 << (bits - 1));
        if parsed < min || parsed > max {
            return Err(range());
        }
    }
    Ok(parsed)
}

fn parse_uint(text: &str, bits: u32) -> Result<u64, SetError> {
    if text.is_empty() {
        return Ok(0);
    }

    let syntax = || SetError::parse(Category::Uint, text, ParseCause::Syntax);
    let range = || SetError::parse(Category::Uint, text, ParseCause::Range { bits });

    // Unsigned text carries no sign, not even a redundant `+`.
    if text.starts_with('+') {
        return Err(syntax());
    }
    let parsed = text.parse::<u64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow => range(),
        _ => syntax(),
    })?;

    if bits < 64 && parsed > (1_u64 << bits) - 1 {
        return Err(range());
    }
    Ok(parsed)
}

fn parse_float(text: &str, width: FloatWidth) -> Result<f64, SetError> {
    if text.is_empty() {
        return Ok(0.0);
    }

    let parsed = match width {
        FloatWidth::F32 => text.parse::<f32>().map(f64::from),
        FloatWidth::F64 => text.parse::<f64>(),
    }
    .map_err(|_| SetError::parse(Category::Float, text, ParseCause::Syntax))?;

    if parsed.is_infinite() && !names_infinity(text) {
        return Err(SetError::parse(
            Category::Float,
            text,
            ParseCause::Range { bits: width.bits() },
        ));
    }
    Ok(parsed)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn round_to(width: FloatWidth, value: f64) -> f64 {
    match width {
        FloatWidth::F32 => value as f32 as f64,
        FloatWidth::F64 => value,
    }
}
