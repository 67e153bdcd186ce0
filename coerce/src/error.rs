use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Category;

/// Errors that can occur when coercing a value into a destination slot.
#[derive(Debug)]
#[non_exhaustive]
pub enum SetError {
    /// The source value's type has no conversion rule for the destination category.
    UnsupportedSourceType {
        /// The destination category that was requested.
        category: Category,
        /// The dynamic type of the rejected source value.
        source_type: &'static str,
    },

    /// A string source did not parse as the destination's numeric or boolean type.
    ParseFailure {
        /// The destination category that was requested.
        category: Category,
        /// The text that failed to parse.
        input: String,
        /// Why parsing failed.
        cause: ParseCause,
    },

    /// An integer used for boolean coercion was neither 0 nor 1.
    OutOfRange {
        /// The offending integer.
        value: i128,
    },

    /// The destination type's own text decoder rejected the textual representation.
    DecodeFailure {
        /// The destination type.
        type_name: &'static str,
        /// The text handed to the decoder.
        text: String,
        /// The decoder's error.
        source: DecodeError,
    },
}

/// Why a string source failed to parse.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseCause {
    /// The text is not a number (or boolean literal) at all.
    Syntax,
    /// The number does not fit in the destination's declared width.
    Range {
        /// The declared width the value had to fit in.
        bits: u32,
    },
}

impl SetError {
    pub(crate) fn unsupported(category: Category, source_type: &'static str) -> Self {
        SetError::UnsupportedSourceType {
            category,
            source_type,
        }
    }

    pub(crate) fn parse(category: Category, input: &str, cause: ParseCause) -> Self {
        SetError::ParseFailure {
            category,
            input: input.into(),
            cause,
        }
    }

    /// The destination category the failed conversion targeted, when known.
    pub fn category(&self) -> Option<Category> {
        match self {
            SetError::UnsupportedSourceType { category, .. }
            | SetError::ParseFailure { category, .. } => Some(*category),
            SetError::OutOfRange { .. } => Some(Category::Bool),
            SetError::DecodeFailure { .. } => Some(Category::Struct),
        }
    }
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetError::UnsupportedSourceType {
                category,
                source_type,
            } => {
                write!(f, "conversion from {source_type} to {category} is not supported")
            }
            SetError::ParseFailure {
                category,
                input,
                cause: ParseCause::Syntax,
            } => write!(f, "cannot parse {input:?} as {category}"),
            SetError::ParseFailure {
                category,
                input,
                cause: ParseCause::Range { bits },
            } => write!(
                f,
                "cannot parse {input:?} as {category}: out of range for {bits} bits"
            ),
            SetError::OutOfRange { value } => {
                write!(f, "integer {value} is out of range for bool (expected 0 or 1)")
            }
            SetError::DecodeFailure {
                type_name, text, ..
            } => write!(f, "{type_name} failed to decode {text:?}"),
        }
    }
}

impl core::error::Error for SetError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            SetError::DecodeFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(feature = "miette")]
impl miette::Diagnostic for SetError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self {
            SetError::UnsupportedSourceType { .. } => "coerce::unsupported_source",
            SetError::ParseFailure { .. } => "coerce::parse",
            SetError::OutOfRange { .. } => "coerce::out_of_range",
            SetError::DecodeFailure { .. } => "coerce::decode",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            SetError::UnsupportedSourceType { .. } => Some(Box::new(
                "convert the value to a string, number or boolean first",
            )),
            SetError::ParseFailure {
                cause: ParseCause::Range { bits },
                ..
            } => Some(Box::new(alloc::format!(
                "the destination holds {bits}-bit values"
            ))),
            SetError::ParseFailure { .. } => None,
            SetError::OutOfRange { .. } => Some(Box::new(
                "only 0 and 1 convert to booleans; use a string such as \"true\" otherwise",
            )),
            SetError::DecodeFailure { source, .. } => Some(Box::new(source)),
        }
    }
}

/// Error returned by [`TextDecodable::decode_text`](crate::TextDecodable::decode_text).
#[derive(Debug)]
pub struct DecodeError {
    message: String,
    source: Option<Box<dyn core::error::Error + Send + Sync + 'static>>,
}

impl DecodeError {
    /// Creates an error with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping the error that caused it.
    pub fn with_source(
        message: impl Into<String>,
        source: impl core::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The message passed at construction.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}
