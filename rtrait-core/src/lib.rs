#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod macros;

mod typeid;
pub use typeid::*;

mod error;
pub use error::*;

mod interface;
pub use interface::*;

mod implementation;
pub use implementation::*;

mod reference;
pub use reference::*;

mod owned;
pub use owned::*;

mod dispatch;
pub use dispatch::*;

mod resolve;

pub mod predicate;

mod layout;

#[cfg(feature = "tracing")]
#[allow(unused_imports)]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::trace when the tracing feature is enabled
macro_rules! trace {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
/// Forwards to tracing::debug when the tracing feature is enabled
macro_rules! debug {
    ($($tt:tt)*) => {};
}
#[cfg(not(feature = "tracing"))]
#[allow(unused_imports)]
pub(crate) use {debug, trace};

/// Items used by the expansions of this crate's macros. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::boxed::Box;
    pub use impls;
}
