#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use core::fmt;

use coerce::{DecodeError, Settable, Slot, Structured, TextDecodable};

mod scalar;
pub use scalar::NullScalar;

#[cfg(feature = "serde")]
mod serde_impls;

/// A scalar that may be absent.
///
/// An invalid (null) value always holds the scalar's zero value, so
/// `value` can be read without checking `valid` when zero is an acceptable
/// stand-in.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Null<T> {
    /// The scalar; zero when `valid` is false.
    pub value: T,
    /// Whether `value` was actually provided.
    pub valid: bool,
}

/// Nullable `i64`.
pub type NullInt = Null<i64>;
/// Nullable `i8`.
pub type NullInt8 = Null<i8>;
/// Nullable `i16`.
pub type NullInt16 = Null<i16>;
/// Nullable `i32`.
pub type NullInt32 = Null<i32>;
/// Nullable `i64`.
pub type NullInt64 = Null<i64>;
/// Nullable `u64`.
pub type NullUint = Null<u64>;
/// Nullable `u8`.
pub type NullUint8 = Null<u8>;
/// Nullable `u16`.
pub type NullUint16 = Null<u16>;
/// Nullable `u32`.
pub type NullUint32 = Null<u32>;
/// Nullable `u64`.
pub type NullUint64 = Null<u64>;
/// Nullable `f32`.
pub type NullFloat32 = Null<f32>;
/// Nullable `f64`.
pub type NullFloat64 = Null<f64>;
/// Nullable `bool`.
pub type NullBool = Null<bool>;
/// Nullable `String`.
pub type NullString = Null<alloc::string::String>;

impl<T> Null<T> {
    /// A valid value.
    pub const fn new(value: T) -> Self {
        Null { value, valid: true }
    }

    /// Whether a value is present.
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Borrows the value if present.
    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Takes the value if present.
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }

    /// Takes the value if present, `fallback` otherwise.
    pub fn value_or(self, fallback: T) -> T {
        if self.valid { self.value } else { fallback }
    }
}

impl<T: Default> Null<T> {
    /// An absent value.
    pub fn null() -> Self {
        Null::default()
    }
}

impl<T> From<T> for Null<T> {
    fn from(value: T) -> Self {
        Null::new(value)
    }
}

impl<T: Default> From<Option<T>> for Null<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Null::new(value),
            None => Null::null(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Null<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            self.value.fmt(f)
        } else {
            f.write_str("null")
        }
    }
}

impl<T: NullScalar> TextDecodable for Null<T> {
    fn decode_text(&mut self, text: &[u8]) -> Result<(), DecodeError> {
        let text = core::str::from_utf8(text)
            .map_err(|err| DecodeError::with_source("text is not valid UTF-8", err))?;
        *self = T::decode_scalar(text)?.into();
        Ok(())
    }
}

impl<T: NullScalar> Structured for Null<T> {
    fn text_decodable(&mut self) -> Option<&mut dyn TextDecodable> {
        Some(self)
    }
}

impl<T: NullScalar> Settable for Null<T> {
    fn slot(&mut self) -> Slot<'_> {
        Slot::Struct(self)
    }
}
