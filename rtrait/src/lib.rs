#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![doc = include_str!("../README.md")]

pub use rtrait_core::*;

pub mod compile_errors;

pub use static_assertions;

/// Everything needed to declare, register and use interfaces.
pub mod prelude {
    pub use rtrait_core::predicate::{Bool, False, Holds, Predicate, True};
    pub use rtrait_core::{
        CastError, Erased, Impl, Implements, Interface, InterfaceRef, Owned, Resolvable, Upcast,
        bind, call, interface, make, own, resolves, to_interface,
    };
}
