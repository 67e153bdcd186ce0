#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod error;
pub use error::*;

mod kind;
pub use kind::*;

mod value;
pub use value::*;

mod slot;
pub use slot::*;

mod numeric;
mod boolean;
mod text;

mod pointer;
pub use pointer::PointerSlot;

mod structured;
pub use structured::{StructSlot, Structured, TextDecodable};

mod dispatch;
pub use dispatch::{set, set_slot};

#[cfg(feature = "serde_json")]
mod json;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[macro_export]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
