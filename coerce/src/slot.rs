//! Destination slots: typed, mutable views of the location being written.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{DestinationKind, FloatWidth, IntWidth, PointerSlot, StructSlot};

/// A mutable reference to a destination of a fixed static type.
///
/// The slot's type never changes during a conversion; only the value behind
/// the reference does.
pub enum Slot<'a> {
    /// A signed integer.
    Int(IntSlot<'a>),
    /// An unsigned integer.
    Uint(UintSlot<'a>),
    /// A boolean.
    Bool(&'a mut bool),
    /// A float.
    Float(FloatSlot<'a>),
    /// A string.
    String(&'a mut String),
    /// An owning pointer whose pointee is allocated on every set.
    Pointer(&'a mut dyn PointerSlot),
    /// A structured type.
    Struct(&'a mut dyn StructSlot),
    /// A type the engine has no converter for, named for diagnostics.
    ///
    /// Setting such a slot succeeds without touching it. This is a permissive
    /// default, not a validation step: callers that need to reject unknown
    /// destinations should check [`Slot::kind`] themselves.
    Unsupported(&'static str),
}

impl Slot<'_> {
    /// The static kind of the destination.
    pub fn kind(&self) -> DestinationKind {
        match self {
            Slot::Int(slot) => DestinationKind::Int(slot.width()),
            Slot::Uint(slot) => DestinationKind::Uint(slot.width()),
            Slot::Bool(_) => DestinationKind::Bool,
            Slot::Float(slot) => DestinationKind::Float(slot.width()),
            Slot::String(_) => DestinationKind::String,
            Slot::Pointer(_) => DestinationKind::Pointer,
            Slot::Struct(_) => DestinationKind::Struct,
            Slot::Unsupported(_) => DestinationKind::Unsupported,
        }
    }
}

impl core::fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Slot::Pointer(ptr) => write!(f, "Slot::Pointer(-> {})", ptr.pointee_type_name()),
            Slot::Struct(st) => write!(f, "Slot::Struct({})", st.type_name()),
            Slot::Unsupported(name) => write!(f, "Slot::Unsupported({name})"),
            other => write!(f, "Slot::{}", other.kind()),
        }
    }
}

/// A signed integer destination.
pub enum IntSlot<'a> {
    /// `isize`.
    Isize(&'a mut isize),
    /// `i8`.
    I8(&'a mut i8),
    /// `i16`.
    I16(&'a mut i16),
    /// `i32`.
    I32(&'a mut i32),
    /// `i64`.
    I64(&'a mut i64),
}

impl IntSlot<'_> {
    /// The declared width of the destination.
    pub fn width(&self) -> IntWidth {
        match self {
            IntSlot::Isize(_) => IntWidth::Platform,
            IntSlot::I8(_) => IntWidth::W8,
            IntSlot::I16(_) => IntWidth::W16,
            IntSlot::I32(_) => IntWidth::W32,
            IntSlot::I64(_) => IntWidth::W64,
        }
    }

    /// Writes the accumulator, truncating to the destination width.
    pub(crate) fn store(self, value: i64) {
        match self {
            IntSlot::Isize(dst) => *dst = value as isize,
            IntSlot::I8(dst) => *dst = value as i8,
            IntSlot::I16(dst) => *dst = value as i16,
            IntSlot::I32(dst) => *dst = value as i32,
            IntSlot::I64(dst) => *dst = value,
        }
    }
}

/// An unsigned integer destination.
pub enum UintSlot<'a> {
    /// `usize`.
    Usize(&'a mut usize),
    /// `u8`.
    U8(&'a mut u8),
    /// `u16`.
    U16(&'a mut u16),
    /// `u32`.
    U32(&'a mut u32),
    /// `u64`.
    U64(&'a mut u64),
}

impl UintSlot<'_> {
    /// The declared width of the destination.
    pub fn width(&self) -> IntWidth {
        match self {
            UintSlot::Usize(_) => IntWidth::Platform,
            UintSlot::U8(_) => IntWidth::W8,
            UintSlot::U16(_) => IntWidth::W16,
            UintSlot::U32(_) => IntWidth::W32,
            UintSlot::U64(_) => IntWidth::W64,
        }
    }

    /// Writes the accumulator, truncating to the destination width.
    pub(crate) fn store(self, value: u64) {
        match self {
            UintSlot::Usize(dst) => *dst = value as usize,
            UintSlot::U8(dst) => *dst = value as u8,
            UintSlot::U16(dst) => *dst = value as u16,
            UintSlot::U32(dst) => *dst = value as u32,
            UintSlot::U64(dst) => *dst = value,
        }
    }
}

/// A float destination.
pub enum FloatSlot<'a> {
    /// `f32`.
    F32(&'a mut f32),
    /// `f64`.
    F64(&'a mut f64),
}

impl FloatSlot<'_> {
    /// The declared precision of the destination.
    pub fn width(&self) -> FloatWidth {
        match self {
            FloatSlot::F32(_) => FloatWidth::F32,
            FloatSlot::F64(_) => FloatWidth::F64,
        }
    }

    pub(crate) fn store(self, value: f64) {
        match self {
            FloatSlot::F32(dst) => *dst = value as f32,
            FloatSlot::F64(dst) => *dst = value,
        }
    }
}

/// Types that can hand out a [`Slot`] pointing at themselves.
///
/// Every type that can be passed to [`set`](crate::set) implements this.
/// Structured types implement it by returning [`Slot::Struct`]:
///
/// ```
/// use coerce::{Settable, Slot, Structured};
///
/// #[derive(Default)]
/// struct Opaque;
///
/// impl Structured for Opaque {}
///
/// impl Settable for Opaque {
///     fn slot(&mut self) -> Slot<'_> {
///         Slot::Struct(self)
///     }
/// }
/// ```
pub trait Settable {
    /// Borrows `self` as a destination slot.
    fn slot(&mut self) -> Slot<'_>;
}

macro_rules! impl_settable {
    ($($ty:ty => $kind:ident($inner:ident::$variant:ident)),* $(,)?) => {
        $(
            impl Settable for $ty {
                #[inline]
                fn slot(&mut self) -> Slot<'_> {
                    Slot::$kind($inner::$variant(self))
                }
            }
        )*
    };
}

impl_settable! {
    isize => Int(IntSlot::Isize),
    i8 => Int(IntSlot::I8),
    i16 => Int(IntSlot::I16),
    i32 => Int(IntSlot::I32),
    i64 => Int(IntSlot::I64),
    usize => Uint(UintSlot::Usize),
    u8 => Uint(UintSlot::U8),
    u16 => Uint(UintSlot::U16),
    u32 => Uint(UintSlot::U32),
    u64 => Uint(UintSlot::U64),
    f32 => Float(FloatSlot::F32),
    f64 => Float(FloatSlot::F64),
}

impl Settable for bool {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Bool(self)
    }
}

impl Settable for String {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::String(self)
    }
}

macro_rules! impl_settable_unsupported {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Settable for $ty {
                #[inline]
                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported(core::any::type_name::<$ty>())
                }
            }
        )*
    };
}

impl_settable_unsupported!(char, (), i128, u128);

impl<T> Settable for Vec<T> {
    #[inline]
    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported(core::any::type_name::<Vec<T>>())
    }
}
