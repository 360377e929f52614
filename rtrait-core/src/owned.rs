//! Owning handles: the concrete value lives in one heap block, exposed only as `I`.

use alloc::boxed::Box;
use core::fmt;
use core::ops::{Deref, DerefMut};
use core::ptr::NonNull;

use crate::{
    CastError, Erased, Impl, Interface, InterfaceRef, Origin, Resolve, SelfType, Upcast, debug,
    trace,
};

/// An owned value of some type that implements `I`.
///
/// The value and its erasure share a single allocation. Dropping the handle drops the
/// value exactly once and frees the block; moving it moves ownership. There is no empty
/// state and no `Clone`.
pub struct Owned<I: ?Sized> {
    interface: Box<I>,
    self_type: SelfType,
}

impl<I: ?Sized> Owned<I> {
    /// Take ownership of `value` and erase it down to `I`.
    pub fn new<S: 'static>(value: S) -> Self
    where
        I: Resolve<S>,
    {
        trace!(
            "Owned::new: {} as {}",
            core::any::type_name::<S>(),
            core::any::type_name::<I>()
        );
        Self::from_box(Box::new(value))
    }

    /// Construct an `S` from `args`, calling its constructor exactly once, and erase it
    /// down to `I`.
    pub fn construct<S: 'static, A>(args: A) -> Self
    where
        S: From<A>,
        I: Resolve<S>,
    {
        trace!(
            "Owned::construct: {} from {}",
            core::any::type_name::<S>(),
            core::any::type_name::<A>()
        );
        Self::from_box(Box::new(S::from(args)))
    }

    /// Re-wrap an existing owning handle, keeping its allocation and deallocator for the
    /// concrete part.
    pub fn from_box<S: 'static>(boxed: Box<S>) -> Self
    where
        I: Resolve<S>,
    {
        Self {
            interface: I::resolve_boxed(boxed),
            self_type: SelfType::of::<S>(),
        }
    }

    /// Convert into a handle for a more general interface. Never re-runs resolution.
    pub fn upcast<J>(self) -> Owned<J>
    where
        I: Upcast<J>,
        J: ?Sized,
    {
        trace!(
            "Owned::upcast: {} from {} to {}",
            self.self_type,
            core::any::type_name::<I>(),
            core::any::type_name::<J>()
        );
        Owned {
            interface: self.interface.upcast_boxed(),
            self_type: self.self_type,
        }
    }

    /// Borrow the owned value as an [`InterfaceRef`] that still downcasts to it.
    #[inline]
    pub fn reference(&self) -> InterfaceRef<'_, I> {
        InterfaceRef::from_parts(&self.interface, self.origin())
    }

    /// Re-resolve this handle against `J` and bind the result to it.
    ///
    /// Resolution runs on the handle, so `J` must be an interface `I` implements (by
    /// forwarding) or one derived from those. The result is bound to the handle, so its
    /// [`this`](Impl::this) is the `Owned`; downcast through
    /// [`downcast_ref`](Self::downcast_ref) or [`InterfaceRef::from_erased`].
    #[inline]
    pub fn recast<J>(&self) -> Impl<'_, Self, J>
    where
        J: ?Sized + Resolve<Self>,
    {
        Impl::new(self)
    }

    /// Returns true if the owned value is a `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.self_type.is::<T>()
    }

    /// The type of the owned value.
    #[inline]
    pub fn self_type(&self) -> SelfType {
        self.self_type
    }

    /// Borrow the owned value as a `T`.
    pub fn downcast_ref<T: 'static>(&self) -> Result<&T, CastError> {
        if self.is::<T>() {
            let data = NonNull::from(&*self.interface).cast::<T>();
            // SAFETY: the box came from a `Box<T>` through `Resolve`/`Upcast`, which keep the
            // allocation, and `&self` keeps it alive and shared.
            Ok(unsafe { data.as_ref() })
        } else {
            Err(self.mismatch::<T>())
        }
    }

    /// Mutably borrow the owned value as a `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Result<&mut T, CastError> {
        if self.is::<T>() {
            let mut data = NonNull::from(&mut *self.interface).cast::<T>();
            // SAFETY: as in `downcast_ref`, and `&mut self` makes this borrow unique.
            Ok(unsafe { data.as_mut() })
        } else {
            Err(self.mismatch::<T>())
        }
    }

    /// Take the owned value back out as a `Box<T>`, or return the handle unchanged.
    pub fn downcast<T: 'static>(self) -> Result<Box<T>, Self> {
        if self.is::<T>() {
            let raw = Box::into_raw(self.interface);
            // SAFETY: `Resolve`/`Upcast` kept the `Box<T>` allocation, so it has `T`'s layout
            // and value.
            Ok(unsafe { Box::from_raw(raw.cast::<T>()) })
        } else {
            debug!("Owned::downcast: {}", self.mismatch::<T>());
            Err(self)
        }
    }

    /// Give up the erasure and keep only the boxed interface.
    #[inline]
    pub fn into_box(self) -> Box<I> {
        self.interface
    }

    fn mismatch<T: 'static>(&self) -> CastError {
        CastError::new(SelfType::of::<T>(), self.self_type)
    }
}

impl<I: ?Sized> Deref for Owned<I> {
    type Target = I;

    #[inline]
    fn deref(&self) -> &I {
        &self.interface
    }
}

impl<I: ?Sized> DerefMut for Owned<I> {
    #[inline]
    fn deref_mut(&mut self) -> &mut I {
        &mut self.interface
    }
}

impl<I: ?Sized> Erased for Owned<I> {
    #[inline]
    fn origin(&self) -> Origin {
        Origin::from_parts(NonNull::from(&*self.interface).cast(), self.self_type)
    }
}

impl<I: ?Sized + Resolve<S>, S: 'static> From<Box<S>> for Owned<I> {
    #[inline]
    fn from(boxed: Box<S>) -> Self {
        Self::from_box(boxed)
    }
}

impl<I: ?Sized + Interface> fmt::Debug for Owned<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Owned<{}>({})", I::NAME, self.self_type)
    }
}

/// Take ownership of `value` behind the interface `I`.
#[inline]
pub fn own<I, S>(value: S) -> Owned<I>
where
    I: ?Sized + Resolve<S>,
    S: 'static,
{
    Owned::new(value)
}

/// Construct an `S` from `args` behind the interface `I`.
#[inline]
pub fn make<I, S, A>(args: A) -> Owned<I>
where
    I: ?Sized + Resolve<S>,
    S: From<A> + 'static,
{
    Owned::construct::<S, A>(args)
}
