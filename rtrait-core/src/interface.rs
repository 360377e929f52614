//! The registry seams: what an interface is, how a self type resolves to it, and how
//! interfaces relate to each other.

use alloc::boxed::Box;
use core::ptr::NonNull;

use crate::SelfType;

/// A trait-object type declared through [`interface!`](crate::interface).
///
/// Implemented for `dyn Name + '_`, never for concrete types.
pub trait Interface {
    /// The name the interface was declared with.
    const NAME: &'static str;
}

/// The registry entry for `(S, Self)`: how a value of type `S` is viewed as the
/// interface `Self`.
///
/// [`interface!`](crate::interface) implements this for every `S` that implements the
/// declared trait, so the matched implementation is whatever `impl` rustc selects for
/// `S`. Coherence guarantees there is at most one.
///
/// # Safety
///
/// Both methods must return the value they were given, unsized in place: the returned
/// pointer has the same address, and the returned box owns the same allocation. Owning
/// handles rely on this to downcast and to free the block with `S`'s layout.
#[diagnostic::on_unimplemented(
    message = "the interface `{Self}` is not implemented for `{S}`",
    label = "no registration of `{Self}` matches `{S}`",
    note = "register one with an `impl` block, or a derived registration over an interface `{S}` already implements"
)]
pub unsafe trait Resolve<S: ?Sized> {
    /// Erase a borrowed value to the interface.
    fn resolve(value: &S) -> &Self;

    /// Erase an owned, boxed value to the interface, reusing its allocation.
    fn resolve_boxed(value: Box<S>) -> Box<Self>;
}

/// `Self` resolves to the interface `I`.
///
/// This is the bound-position spelling of [`Resolve`]: `S: Implements<I>` holds exactly
/// when `I: Resolve<S>` does. Generic code bounded by it reaches the interface through
/// [`as_interface`](Implements::as_interface).
#[diagnostic::on_unimplemented(
    message = "the interface `{I}` is not implemented for `{Self}`",
    label = "`{Self}` does not resolve `{I}`"
)]
pub trait Implements<I: ?Sized> {
    /// View `self` through the interface.
    fn as_interface(&self) -> &I;
}

impl<S: ?Sized, I: ?Sized + Resolve<S>> Implements<I> for S {
    #[inline]
    fn as_interface(&self) -> &I {
        I::resolve(self)
    }
}

/// `Self` is an interface that extends `J`, so any view of `Self` is also a view of `J`.
///
/// Every interface extends itself. [`interface!`](crate::interface) adds one
/// implementation per declared supertrait, using trait-object upcasting: no resolution
/// happens when upcasting.
///
/// # Safety
///
/// Both methods must return `self` unchanged apart from its metadata: same address, and
/// for the boxed form the same allocation.
#[diagnostic::on_unimplemented(
    message = "the interface `{Self}` does not extend `{J}`",
    label = "`{J}` is not a supertrait of `{Self}`"
)]
pub unsafe trait Upcast<J: ?Sized> {
    /// View a borrowed interface as the more general one.
    fn upcast(&self) -> &J;

    /// Convert an owned interface into the more general one.
    fn upcast_boxed(self: Box<Self>) -> Box<J>;
}

// SAFETY: the identity conversion.
unsafe impl<I: ?Sized> Upcast<I> for I {
    #[inline]
    fn upcast(&self) -> &I {
        self
    }

    #[inline]
    fn upcast_boxed(self: Box<Self>) -> Box<I> {
        self
    }
}

/// Static type equality, used by [`Impl::cast`](crate::Impl::cast).
#[diagnostic::on_unimplemented(
    message = "cannot cast to `{T}`: the implementation object is bound to `{Self}`",
    label = "type mismatch"
)]
pub trait Same<T: ?Sized> {
    /// The identity conversion.
    fn same(&self) -> &T;
}

impl<T: ?Sized> Same<T> for T {
    #[inline]
    fn same(&self) -> &T {
        self
    }
}

/// Where an erased value came from: its address and its recorded self type.
#[derive(Clone, Copy, Debug)]
pub struct Origin {
    data: NonNull<()>,
    self_type: SelfType,
}

// SAFETY: `Origin` never dereferences `data` on its own. The handles that do
// (`InterfaceRef`) also hold `&I`, and are only `Send`/`Sync` when that reference is.
unsafe impl Send for Origin {}
// SAFETY: see above.
unsafe impl Sync for Origin {}

impl Origin {
    pub(crate) fn of<S: 'static>(value: &S) -> Self {
        Self {
            data: NonNull::from(value).cast(),
            self_type: SelfType::of::<S>(),
        }
    }

    pub(crate) fn from_parts(data: NonNull<()>, self_type: SelfType) -> Self {
        Self { data, self_type }
    }

    /// The recorded self type.
    #[inline]
    pub fn self_type(self) -> SelfType {
        self.self_type
    }

    /// The address of the original value.
    #[inline]
    pub fn address(self) -> *const () {
        self.data.as_ptr()
    }

    /// # Safety
    ///
    /// The value behind `data` must be alive and unaliased by `&mut` for `'a`.
    #[inline]
    pub(crate) unsafe fn get<'a, T: 'static>(self) -> Option<&'a T> {
        if self.self_type.is::<T>() {
            // SAFETY: the recorded type is `T`, liveness is the caller's contract.
            Some(unsafe { self.data.cast::<T>().as_ref() })
        } else {
            None
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type-erased handle that remembers the value it was erased from.
///
/// Interface references built from an erased handle keep the handle's origin, so a
/// downcast still reaches the original concrete value.
pub trait Erased: sealed::Sealed {
    /// The original value's address and self type.
    fn origin(&self) -> Origin;
}

impl<I: ?Sized> sealed::Sealed for crate::InterfaceRef<'_, I> {}
impl<I: ?Sized> sealed::Sealed for crate::Owned<I> {}
