//! Implementation objects: a borrowed self value viewed through one interface.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Deref;

use crate::{Interface, InterfaceRef, Resolve, Same};

/// The implementation of `I` for `S`, bound to one borrowed value.
///
/// Holds nothing but `&'a S`: it is `Copy`, has no destructor, and is exactly as large as
/// the reference (see the `layout` module). It dereferences to `I` and forwards every
/// non-derived operation of `I`, so it can be passed wherever an implementor of `I` is
/// expected.
pub struct Impl<'a, S: ?Sized, I: ?Sized + 'a> {
    this: &'a S,
    interface: PhantomData<fn() -> &'a I>,
}

impl<'a, S: ?Sized, I: ?Sized + Resolve<S> + 'a> Impl<'a, S, I> {
    /// Bind the implementation of `I` for `S` to `this`.
    #[inline]
    pub fn new(this: &'a S) -> Self {
        Self {
            this,
            interface: PhantomData,
        }
    }

    /// The bound value, viewed as the interface.
    #[inline]
    pub fn interface(&self) -> &'a I {
        I::resolve(self.this)
    }

    /// Re-resolve the same value against another interface.
    ///
    /// The new implementation object is bound to the same storage; nothing is copied.
    #[inline]
    pub fn recast<J>(&self) -> Impl<'a, S, J>
    where
        J: ?Sized + Resolve<S> + 'a,
    {
        Impl::new(self.this)
    }

    /// Turn this implementation object into an [`InterfaceRef`], recording `S` as the
    /// self type.
    #[inline]
    pub fn erase(self) -> InterfaceRef<'a, I>
    where
        S: Sized + 'static,
    {
        InterfaceRef::new(self.this)
    }
}

impl<'a, S: ?Sized, I: ?Sized + 'a> Impl<'a, S, I> {
    /// The bound value.
    #[inline]
    pub fn this(&self) -> &'a S {
        self.this
    }

    /// Recover the bound value as `T`.
    ///
    /// `T` must be the self type this object was resolved for; anything else does not
    /// compile.
    #[inline]
    pub fn cast<T: ?Sized>(&self) -> &'a T
    where
        S: Same<T>,
    {
        self.this.same()
    }
}

impl<S: ?Sized, I: ?Sized> Clone for Impl<'_, S, I> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, I: ?Sized> Copy for Impl<'_, S, I> {}

impl<'a, S: ?Sized, I: ?Sized + Resolve<S> + 'a> Deref for Impl<'a, S, I> {
    type Target = I;

    #[inline]
    fn deref(&self) -> &I {
        self.interface()
    }
}

impl<S: ?Sized, I: ?Sized + Interface> fmt::Debug for Impl<'_, S, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Impl<{}>({} @ {:p})",
            I::NAME,
            core::any::type_name::<S>(),
            self.this
        )
    }
}

/// Resolve the implementation of `I` for `value`'s type and bind it to `value`.
///
/// ```
/// use rtrait_core::{interface, to_interface};
///
/// interface! {
///     pub trait Speaker {
///         fn speak(&self) -> String;
///     }
/// }
///
/// struct Dog;
///
/// impl Speaker for Dog {
///     fn speak(&self) -> String {
///         "woof".into()
///     }
/// }
///
/// assert_eq!(to_interface::<dyn Speaker, _>(&Dog).speak(), "woof");
/// ```
#[inline]
pub fn to_interface<'a, I, S>(value: &'a S) -> Impl<'a, S, I>
where
    I: ?Sized + Resolve<S> + 'a,
    S: ?Sized,
{
    Impl::new(value)
}

/// Method-call spelling of [`to_interface`], available on every type.
pub trait Resolvable {
    /// Resolve the implementation of `I` for `Self` and bind it to `self`.
    #[inline]
    fn to_interface<'a, I>(&'a self) -> Impl<'a, Self, I>
    where
        I: ?Sized + Resolve<Self> + 'a,
    {
        Impl::new(self)
    }
}

impl<S: ?Sized> Resolvable for S {}
