//! Borrowed, type-erased interface references.

use core::fmt;
use core::ops::Deref;

use crate::{CastError, Erased, Impl, Interface, Origin, Resolve, SelfType, Upcast, debug, trace};

/// A borrowed view of some value that implements `I`.
///
/// Four words: the trait-object reference (data pointer and vtable) plus the
/// [`Origin`] of the value it was erased from. It is `Copy`, never owns the value, and
/// cannot exist without a resolved implementation behind it.
///
/// An `InterfaceRef` itself implements every non-derived interface `I` implements, so it
/// can be handed to anything expecting an implementor, or re-resolved against derived
/// interfaces with [`InterfaceRef::recast`] and [`InterfaceRef::from_erased`].
pub struct InterfaceRef<'a, I: ?Sized + 'a> {
    interface: &'a I,
    origin: Origin,
}

impl<'a, I: ?Sized + 'a> InterfaceRef<'a, I> {
    /// Erase `value` down to `I`.
    #[inline]
    pub fn new<S: 'static>(value: &'a S) -> Self
    where
        I: Resolve<S>,
    {
        Self {
            interface: I::resolve(value),
            origin: Origin::of(value),
        }
    }

    /// Re-resolve an erased handle against `I`.
    ///
    /// The new reference borrows `carrier`; its origin stays the one `carrier` recorded,
    /// so [`downcast`](Self::downcast) still reaches the original value. This is how an
    /// interface derived from `carrier`'s interface is reached:
    /// `InterfaceRef::<dyn B>::from_erased(&a_ref)`.
    #[inline]
    pub fn from_erased<C>(carrier: &'a C) -> Self
    where
        C: Erased,
        I: Resolve<C>,
    {
        let origin = carrier.origin();
        trace!(
            "InterfaceRef::from_erased: {} via {}",
            origin.self_type(),
            core::any::type_name::<C>()
        );
        Self {
            interface: I::resolve(carrier),
            origin,
        }
    }

    pub(crate) fn from_parts(interface: &'a I, origin: Origin) -> Self {
        Self { interface, origin }
    }

    /// View this reference as a more general interface. Never re-runs resolution.
    #[inline]
    pub fn upcast<J>(self) -> InterfaceRef<'a, J>
    where
        I: Upcast<J>,
        J: ?Sized + 'a,
    {
        InterfaceRef {
            interface: self.interface.upcast(),
            origin: self.origin,
        }
    }

    /// The interface, for the whole borrow.
    #[inline]
    pub fn get(&self) -> &'a I {
        self.interface
    }

    /// Re-resolve this reference against `J` and bind the result to it.
    ///
    /// Resolution runs on the erased reference itself, so `J` must be implemented for
    /// `InterfaceRef<'a, I>`: any interface `I` implements (by forwarding), or one derived
    /// from those.
    ///
    /// The returned object is bound to this reference, not to the concrete value, so its
    /// [`this`](Impl::this) and [`cast`](Impl::cast) yield the `InterfaceRef`. To reach
    /// the concrete value, use [`downcast`](Self::downcast), or
    /// [`InterfaceRef::from_erased`] to get a `J` reference that still downcasts.
    #[inline]
    pub fn recast<'r, J>(&'r self) -> Impl<'r, Self, J>
    where
        J: ?Sized + Resolve<Self> + 'r,
    {
        Impl::new(self)
    }

    /// Recover the original value, if it is a `T`.
    pub fn downcast<T: 'static>(&self) -> Result<&'a T, CastError> {
        // SAFETY: the origin was recorded from a value borrowed for at least `'a`.
        match unsafe { self.origin.get::<T>() } {
            Some(value) => Ok(value),
            None => {
                debug!(
                    "InterfaceRef::downcast: asked for {}, holds {}",
                    core::any::type_name::<T>(),
                    self.origin.self_type()
                );
                Err(CastError::new(SelfType::of::<T>(), self.origin.self_type()))
            }
        }
    }

    /// Returns true if the original value is a `T`.
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.origin.self_type().is::<T>()
    }

    /// The type this reference was erased from.
    #[inline]
    pub fn self_type(&self) -> SelfType {
        self.origin.self_type()
    }
}

impl<'a, I: ?Sized + 'a> Clone for InterfaceRef<'a, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, I: ?Sized + 'a> Copy for InterfaceRef<'a, I> {}

impl<'a, I: ?Sized + 'a> Deref for InterfaceRef<'a, I> {
    type Target = I;

    #[inline]
    fn deref(&self) -> &I {
        self.interface
    }
}

impl<'a, I: ?Sized + 'a> Erased for InterfaceRef<'a, I> {
    #[inline]
    fn origin(&self) -> Origin {
        self.origin
    }
}

impl<'a, I: ?Sized + Resolve<S> + 'a, S: 'static> From<&'a S> for InterfaceRef<'a, I> {
    #[inline]
    fn from(value: &'a S) -> Self {
        Self::new(value)
    }
}

impl<'a, S: 'static, I: ?Sized + Resolve<S> + 'a> From<Impl<'a, S, I>> for InterfaceRef<'a, I> {
    #[inline]
    fn from(implementation: Impl<'a, S, I>) -> Self {
        implementation.erase()
    }
}

impl<I: ?Sized + Interface> fmt::Debug for InterfaceRef<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InterfaceRef<{}>({} @ {:p})",
            I::NAME,
            self.origin.self_type(),
            self.origin.address()
        )
    }
}
