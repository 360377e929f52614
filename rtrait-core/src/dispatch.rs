//! One-call dispatch: resolve a value's implementation and invoke an operation on it.

use crate::{Impl, Resolve};

/// Something that can be invoked on an interface `I` with the arguments `Args`.
///
/// Implemented for every `Fn(&I, A0, …, An) -> R` with up to six extra arguments, passed
/// as a tuple. Trait methods named through the interface type qualify directly:
/// `<dyn Speaker as Speaker>::speak`.
pub trait Operation<I: ?Sized, Args> {
    /// What the operation returns.
    type Output;

    /// Run the operation on `target`.
    fn invoke(&self, target: &I, args: Args) -> Self::Output;
}

macro_rules! impl_operation {
    ($($arg:ident),*) => {
        impl<I: ?Sized, F, R, $($arg),*> Operation<I, ($($arg,)*)> for F
        where
            F: Fn(&I, $($arg),*) -> R,
        {
            type Output = R;

            #[inline]
            #[allow(non_snake_case)]
            fn invoke(&self, target: &I, ($($arg,)*): ($($arg,)*)) -> R {
                self(target, $($arg),*)
            }
        }
    };
}

impl_operation!();
impl_operation!(A0);
impl_operation!(A0, A1);
impl_operation!(A0, A1, A2);
impl_operation!(A0, A1, A2, A3);
impl_operation!(A0, A1, A2, A3, A4);
impl_operation!(A0, A1, A2, A3, A4, A5);

/// An operation bound to a value, ready to be called through the value's implementation
/// of `I`.
pub struct Bound<'a, S: ?Sized, I: ?Sized + 'a, F> {
    implementation: Impl<'a, S, I>,
    op: F,
}

impl<'a, S: ?Sized, I: ?Sized + Resolve<S> + 'a, F> Bound<'a, S, I, F> {
    /// Invoke the bound operation. Can be called any number of times.
    #[inline]
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Operation<I, Args>,
    {
        self.op.invoke(self.implementation.interface(), args)
    }

    /// The implementation object the operation runs on.
    #[inline]
    pub fn implementation(&self) -> Impl<'a, S, I> {
        self.implementation
    }
}

impl<'a, S: ?Sized, I: ?Sized + Resolve<S> + 'a> Impl<'a, S, I> {
    /// Invoke `op` on this implementation.
    #[inline]
    pub fn apply<Args, F>(&self, op: F, args: Args) -> F::Output
    where
        F: Operation<I, Args>,
    {
        op.invoke(self.interface(), args)
    }
}

/// Bind `op` to `value` through its implementation of `I`.
///
/// ```
/// use rtrait_core::{bind, interface};
///
/// interface! {
///     pub trait Scale {
///         fn scale(&self, by: u32) -> u32;
///     }
/// }
///
/// struct Meters(u32);
///
/// impl Scale for Meters {
///     fn scale(&self, by: u32) -> u32 {
///         self.0 * by
///     }
/// }
///
/// let bound = bind::<dyn Scale, _, _>(&Meters(3), <dyn Scale as Scale>::scale);
/// assert_eq!(bound.call((2,)), 6);
/// assert_eq!(bound.call((5,)), 15);
/// ```
#[inline]
pub fn bind<'a, I, S, F>(value: &'a S, op: F) -> Bound<'a, S, I, F>
where
    I: ?Sized + Resolve<S> + 'a,
    S: ?Sized,
{
    Bound {
        implementation: Impl::new(value),
        op,
    }
}

/// Resolve `value`'s implementation of the interface `op` is written against, and invoke
/// `op` on it once.
#[inline]
pub fn call<S, I, F, Args>(value: &S, op: F, args: Args) -> F::Output
where
    S: ?Sized,
    I: ?Sized + Resolve<S>,
    F: Operation<I, Args>,
{
    op.invoke(I::resolve(value), args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Resolvable, interface};

    interface! {
        trait Mixer {
            fn mix(&self, left: u32, right: u32) -> u32;
            fn level(&self) -> u32;
        }
    }

    struct Desk(u32);

    impl Mixer for Desk {
        fn mix(&self, left: u32, right: u32) -> u32 {
            self.0 * (left + right)
        }

        fn level(&self) -> u32 {
            self.0
        }
    }

    #[test]
    fn call_infers_the_interface_from_the_operation() {
        rtrait_testhelpers::setup();

        let desk = Desk(2);
        assert_eq!(call(&desk, <dyn Mixer as Mixer>::level, ()), 2);
        assert_eq!(call(&desk, <dyn Mixer as Mixer>::mix, (3, 4)), 14);
    }

    #[test]
    fn bound_operations_are_reusable() {
        fn doubled(mixer: &(dyn Mixer + '_), a: u32) -> u32 {
            mixer.mix(a, a)
        }

        let desk = Desk(10);
        let bound = bind::<dyn Mixer, _, _>(&desk, doubled);
        assert_eq!(bound.call((1,)), 20);
        assert_eq!(bound.call((2,)), 40);
        assert!(core::ptr::eq(bound.implementation().this(), &desk));
    }

    #[test]
    fn operations_take_up_to_six_arguments() {
        fn sum(mixer: &(dyn Mixer + '_), a: u32, b: u32, c: u32, d: u32, e: u32, f: u32) -> u32 {
            mixer.mix(a + b + c, d + e + f)
        }

        let desk = Desk(1);
        let implementation = desk.to_interface::<dyn Mixer>();
        assert_eq!(implementation.apply(sum, (1, 2, 3, 4, 5, 6)), 21);
    }
}
