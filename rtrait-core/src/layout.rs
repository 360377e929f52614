//! Layout and auto-trait guarantees of the handle types, checked at compile time.

use core::fmt::Debug;

use static_assertions::{assert_eq_align, assert_eq_size, assert_impl_all, assert_not_impl_any};

use crate::{Impl, InterfaceRef, Owned, SelfType};

// An implementation object is exactly the borrowed reference.
assert_eq_size!(Impl<'static, u64, dyn Debug>, &'static u64);
assert_eq_align!(Impl<'static, u64, dyn Debug>, &'static u64);
assert_eq_size!(Impl<'static, str, dyn Debug>, &'static str);
assert_impl_all!(Impl<'static, u64, dyn Debug>: Copy);

// Trait-object reference plus origin (address and self type).
assert_eq_size!(SelfType, usize);
assert_eq_size!(InterfaceRef<'static, dyn Debug>, [usize; 4]);
assert_impl_all!(InterfaceRef<'static, dyn Debug>: Copy);
assert_impl_all!(InterfaceRef<'static, dyn Debug + Send + Sync>: Send, Sync);
assert_not_impl_any!(InterfaceRef<'static, dyn Debug>: Send, Sync);

// One heap block, uniquely owned.
assert_eq_size!(Owned<dyn Debug>, [usize; 3]);
assert_not_impl_any!(Owned<dyn Debug>: Clone, Copy);
assert_impl_all!(Owned<dyn Debug + Send>: Send);
