//! Static type categories of destination slots.

use core::fmt;

/// Declared bit width of an integer destination.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum IntWidth {
    /// `isize` / `usize`.
    Platform,
    /// `i8` / `u8`.
    W8,
    /// `i16` / `u16`.
    W16,
    /// `i32` / `u32`.
    W32,
    /// `i64` / `u64`.
    W64,
}

impl IntWidth {
    /// The declared width in bits, with `0` standing for the platform width.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            IntWidth::Platform => 0,
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    /// The width used as a range constraint when parsing text.
    ///
    /// The platform width parses as 64 bits; the store into the slot
    /// truncates afterwards like any other narrowing.
    #[inline]
    pub const fn parse_bits(self) -> u32 {
        match self {
            IntWidth::Platform => 64,
            other => other.bits(),
        }
    }
}

/// Declared precision of a float destination.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum FloatWidth {
    /// `f32`.
    F32,
    /// `f64`.
    F64,
}

impl FloatWidth {
    /// The precision in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            FloatWidth::F32 => 32,
            FloatWidth::F64 => 64,
        }
    }
}

/// The static kind of a destination slot.
///
/// The dispatcher routes on this and nothing else.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DestinationKind {
    /// Signed integer of the given width.
    Int(IntWidth),
    /// Unsigned integer of the given width.
    Uint(IntWidth),
    /// `bool`.
    Bool,
    /// Float of the given precision.
    Float(FloatWidth),
    /// `String`.
    String,
    /// An owning pointer to another settable type.
    Pointer,
    /// A structured type, possibly able to decode itself from text.
    Struct,
    /// Anything else. Setting it is a silent no-op.
    Unsupported,
}

impl DestinationKind {
    /// The converter category this kind is routed to, if any.
    pub const fn category(self) -> Option<Category> {
        match self {
            DestinationKind::Int(_) => Some(Category::Int),
            DestinationKind::Uint(_) => Some(Category::Uint),
            DestinationKind::Bool => Some(Category::Bool),
            DestinationKind::Float(_) => Some(Category::Float),
            DestinationKind::String => Some(Category::String),
            DestinationKind::Struct => Some(Category::Struct),
            DestinationKind::Pointer | DestinationKind::Unsupported => None,
        }
    }
}

impl fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestinationKind::Int(IntWidth::Platform) => write!(f, "isize"),
            DestinationKind::Int(width) => write!(f, "i{}", width.bits()),
            DestinationKind::Uint(IntWidth::Platform) => write!(f, "usize"),
            DestinationKind::Uint(width) => write!(f, "u{}", width.bits()),
            DestinationKind::Bool => write!(f, "bool"),
            DestinationKind::Float(width) => write!(f, "f{}", width.bits()),
            DestinationKind::String => write!(f, "string"),
            DestinationKind::Pointer => write!(f, "pointer"),
            DestinationKind::Struct => write!(f, "struct"),
            DestinationKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Destination category named in conversion errors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Category {
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// Booleans.
    Bool,
    /// Floats.
    Float,
    /// Strings.
    String,
    /// Structured types.
    Struct,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Int => "int",
            Category::Uint => "uint",
            Category::Bool => "bool",
            Category::Float => "float",
            Category::String => "string",
            Category::Struct => "struct",
        };
        f.write_str(name)
    }
}
