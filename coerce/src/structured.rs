//! Structured destinations and the text-decoding capability.

use crate::text::to_text;
use crate::{Category, DecodeError, SetError, SourceValue, debug};

/// Capability of a type to reinitialize itself from UTF-8 text.
///
/// A decoder must leave `self` in a usable state on success; on failure the
/// engine discards the instance, so partial writes never reach a destination.
pub trait TextDecodable {
    /// Decodes `text` into `self`.
    fn decode_text(&mut self, text: &[u8]) -> Result<(), DecodeError>;
}

/// A structured destination type.
///
/// Types that can parse themselves opt into text decoding by overriding
/// [`Structured::text_decodable`]:
///
/// ```
/// use coerce::{DecodeError, Settable, Slot, SourceValue, Structured, TextDecodable, set};
///
/// #[derive(Default, Debug, PartialEq)]
/// struct Celsius(f64);
///
/// impl TextDecodable for Celsius {
///     fn decode_text(&mut self, text: &[u8]) -> Result<(), DecodeError> {
///         let text = core::str::from_utf8(text).map_err(|e| DecodeError::with_source("not utf-8", e))?;
///         let degrees = text.trim_end_matches("C").parse::<f64>().map_err(|e| DecodeError::with_source("not a temperature", e))?;
///         self.0 = degrees;
///         Ok(())
///     }
/// }
///
/// impl Structured for Celsius {
///     fn text_decodable(&mut self) -> Option<&mut dyn TextDecodable> {
///         Some(self)
///     }
/// }
///
/// impl Settable for Celsius {
///     fn slot(&mut self) -> Slot<'_> {
///         Slot::Struct(self)
///     }
/// }
///
/// let mut reading = Celsius::default();
/// set(&mut reading, &SourceValue::from("21.5C")).unwrap();
/// assert_eq!(reading, Celsius(21.5));
///
/// set(&mut reading, &SourceValue::from(30)).unwrap();
/// assert_eq!(reading, Celsius(30.0));
/// ```
///
/// Types that keep the default get reset to `Default::default()` whenever
/// they are set, whatever the source value.
pub trait Structured: Default {
    /// Capability query: returns `self` as a decoder when the type has one.
    fn text_decodable(&mut self) -> Option<&mut dyn TextDecodable> {
        None
    }
}

/// Object-safe view of a [`Structured`] destination, used by [`Slot::Struct`](crate::Slot::Struct).
pub trait StructSlot {
    /// Name of the destination type.
    fn type_name(&self) -> &'static str;

    /// Decodes `text` into a fresh instance and, on success, replaces `self`
    /// with it.
    ///
    /// Returns `None` without touching `self` when the type cannot decode text.
    fn decode_fresh(&mut self, text: &[u8]) -> Option<Result<(), DecodeError>>;

    /// Resets `self` to a freshly constructed zero value.
    fn reset(&mut self);
}

impl<T: Structured> StructSlot for T {
    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    fn decode_fresh(&mut self, text: &[u8]) -> Option<Result<(), DecodeError>> {
        let mut fresh = T::default();
        let outcome = match fresh.text_decodable() {
            Some(decoder) => decoder.decode_text(text),
            None => return None,
        };
        if outcome.is_ok() {
            *self = fresh;
        }
        Some(outcome)
    }

    fn reset(&mut self) {
        *self = T::default();
    }
}

/// Stringifies `value` and hands it to the destination's decoder, or resets
/// the destination when it has none.
pub(crate) fn set_struct(dst: &mut dyn StructSlot, value: &SourceValue) -> Result<(), SetError> {
    let text = to_text(value, Category::Struct)?;
    match dst.decode_fresh(text.as_bytes()) {
        Some(Ok(())) => Ok(()),
        Some(Err(source)) => Err(SetError::DecodeFailure {
            type_name: dst.type_name(),
            text,
            source,
        }),
        None => {
            debug!("{} cannot decode text, resetting it", dst.type_name());
            dst.reset();
            Ok(())
        }
    }
}
