//! Dynamically-typed source values.

use alloc::string::String;
use core::fmt;

/// A loosely-typed input value to be coerced into a destination slot.
///
/// The value knows nothing about where it is going; only the dispatcher
/// decides how to interpret it for a given destination kind.
#[derive(Clone, PartialEq, Debug)]
pub enum SourceValue {
    /// `isize`.
    Isize(isize),
    /// `i8`.
    I8(i8),
    /// `i16`.
    I16(i16),
    /// `i32`.
    I32(i32),
    /// `i64`.
    I64(i64),
    /// `usize`.
    Usize(usize),
    /// `u8`.
    U8(u8),
    /// `u16`.
    U16(u16),
    /// `u32`.
    U32(u32),
    /// `u64`.
    U64(u64),
    /// `bool`.
    Bool(bool),
    /// `f32`.
    F32(f32),
    /// `f64`.
    F64(f64),
    /// Text.
    String(String),
    /// A value of a type no converter understands, identified by its type name.
    Unrecognized(&'static str),
}

impl SourceValue {
    /// Builds an [`SourceValue::Unrecognized`] naming `T`.
    pub fn unrecognized<T: ?Sized>() -> Self {
        SourceValue::Unrecognized(core::any::type_name::<T>())
    }

    /// The name of the value's dynamic type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceValue::Isize(_) => "isize",
            SourceValue::I8(_) => "i8",
            SourceValue::I16(_) => "i16",
            SourceValue::I32(_) => "i32",
            SourceValue::I64(_) => "i64",
            SourceValue::Usize(_) => "usize",
            SourceValue::U8(_) => "u8",
            SourceValue::U16(_) => "u16",
            SourceValue::U32(_) => "u32",
            SourceValue::U64(_) => "u64",
            SourceValue::Bool(_) => "bool",
            SourceValue::F32(_) => "f32",
            SourceValue::F64(_) => "f64",
            SourceValue::String(_) => "String",
            SourceValue::Unrecognized(name) => name,
        }
    }

    /// Sign-extends a signed source into the 64-bit accumulator.
    pub(crate) fn as_signed(&self) -> Option<i64> {
        match *self {
            SourceValue::Isize(v) => Some(v as i64),
            SourceValue::I8(v) => Some(v as i64),
            SourceValue::I16(v) => Some(v as i64),
            SourceValue::I32(v) => Some(v as i64),
            SourceValue::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Zero-extends an unsigned source into the 64-bit accumulator.
    pub(crate) fn as_unsigned(&self) -> Option<u64> {
        match *self {
            SourceValue::Usize(v) => Some(v as u64),
            SourceValue::U8(v) => Some(v as u64),
            SourceValue::U16(v) => Some(v as u64),
            SourceValue::U32(v) => Some(v as u64),
            SourceValue::U64(v) => Some(v),
            _ => None,
        }
    }

    /// Any integer source, signed or not, without loss.
    pub(crate) fn as_integer(&self) -> Option<i128> {
        self.as_signed()
            .map(i128::from)
            .or_else(|| self.as_unsigned().map(i128::from))
    }
}

impl fmt::Display for SourceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceValue::Isize(v) => write!(f, "{v}"),
            SourceValue::I8(v) => write!(f, "{v}"),
            SourceValue::I16(v) => write!(f, "{v}"),
            SourceValue::I32(v) => write!(f, "{v}"),
            SourceValue::I64(v) => write!(f, "{v}"),
            SourceValue::Usize(v) => write!(f, "{v}"),
            SourceValue::U8(v) => write!(f, "{v}"),
            SourceValue::U16(v) => write!(f, "{v}"),
            SourceValue::U32(v) => write!(f, "{v}"),
            SourceValue::U64(v) => write!(f, "{v}"),
            SourceValue::Bool(v) => write!(f, "{v}"),
            SourceValue::F32(v) => write!(f, "{v}"),
            SourceValue::F64(v) => write!(f, "{v}"),
            SourceValue::String(v) => write!(f, "{v:?}"),
            SourceValue::Unrecognized(name) => write!(f, "<{name}>"),
        }
    }
}

macro_rules! impl_from_native {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for SourceValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    SourceValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_native! {
    isize => Isize,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Usize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    bool => Bool,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl From<&str> for SourceValue {
    #[inline]
    fn from(value: &str) -> Self {
        SourceValue::String(value.into())
    }
}

impl From<&String> for SourceValue {
    #[inline]
    fn from(value: &String) -> Self {
        SourceValue::String(value.clone())
    }
}
