/// Declares an interface: a trait with `&self` operations, plus the glue that plugs it
/// into resolution and erasure.
///
/// ```
/// use rtrait_core::{InterfaceRef, interface};
///
/// interface! {
///     /// Something that makes a noise.
///     pub trait Speaker {
///         fn speak(&self) -> String;
///     }
/// }
///
/// interface! {
///     pub trait Pet: Speaker {
///         fn name(&self) -> &str;
///
///         fn introduce(&self) -> String {
///             format!("{} says {}", self.name(), self.speak())
///         }
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
/// impl Pet for Dog {
///     fn name(&self) -> &str {
///         "rex"
///     }
/// }
///
/// let pet = InterfaceRef::<dyn Pet>::new(&Dog);
/// assert_eq!(pet.introduce(), "rex says woof");
///
/// let speaker: InterfaceRef<'_, dyn Speaker> = pet.upcast();
/// assert_eq!(speaker.speak(), "woof");
/// ```
///
/// Besides the trait itself, the macro emits:
///
/// - [`Interface`](crate::Interface) and [`Resolve<S>`](crate::Resolve) for `dyn Name`,
///   for every `S: Name`;
/// - [`Upcast`](crate::Upcast) from `dyn Name` to each listed supertrait;
/// - implementations of `Name` for [`InterfaceRef`](crate::InterfaceRef),
///   [`Owned`](crate::Owned) and [`Impl`](crate::Impl) that forward to the value they
///   erase, so erased handles are accepted wherever an implementor is.
///
/// Prefix the declaration with `derived` for an interface whose registrations are
/// blanket implementations over other interfaces (`impl<T: ?Sized + A> B for T`). Derived
/// interfaces get no forwarding implementations: the blanket already covers erased
/// handles of `A`, and forwarding would overlap with it.
///
/// ```
/// use rtrait_core::{InterfaceRef, interface};
///
/// interface! {
///     pub trait Count {
///         fn count(&self) -> usize;
///     }
/// }
///
/// interface! {
///     derived pub trait Empty {
///         fn is_empty(&self) -> bool;
///     }
/// }
///
/// impl<T: ?Sized + Count> Empty for T {
///     fn is_empty(&self) -> bool {
///         self.count() == 0
///     }
/// }
///
/// impl Count for Vec<u8> {
///     fn count(&self) -> usize {
///         self.len()
///     }
/// }
///
/// let bytes = vec![1u8, 2];
/// let count = InterfaceRef::<dyn Count>::new(&bytes);
/// let empty = InterfaceRef::<dyn Empty>::from_erased(&count);
/// assert!(!empty.is_empty());
/// assert_eq!(empty.downcast::<Vec<u8>>(), Ok(&bytes));
/// ```
///
/// Operations must take `&self` followed by `name: Type` arguments, with or without a
/// default body. Supertraits must be other interfaces, named by a bare identifier, and
/// generic parameters must be plain type parameters.
#[macro_export]
macro_rules! interface {
    (
        $(#[$meta:meta])*
        derived $vis:vis trait $name:ident $(<$($param:ident),+>)? $(: $fsup:ident $(+ $rsup:ident)*)? {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name $(<$($param),+>)? $(: $fsup $(+ $rsup)*)? {
            $($body)*
        }

        $crate::__interface_glue! { $name [$($($param),+)?] [$($fsup $(, $rsup)*)?] }
    };
    (
        $(#[$meta:meta])*
        $vis:vis trait $name:ident $(<$($param:ident),+>)? $(: $fsup:ident $(+ $rsup:ident)*)? {
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        $vis trait $name $(<$($param),+>)? $(: $fsup $(+ $rsup)*)? {
            $($body)*
        }

        $crate::__interface_glue! { $name [$($($param),+)?] [$($fsup $(, $rsup)*)?] }
        $crate::__interface_forward! {
            @munch [$name<$($($param),+)?>] [$($($param),+)?] []
            $($body)*
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __interface_glue {
    ($name:ident $params:tt [$($sup:ident),*]) => {
        $crate::__interface_resolve! { $name $params }
        $($crate::__interface_upcast! { $name $params $sup })*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __interface_resolve {
    ($name:ident [$($param:ident),*]) => {
        impl<'__i, $($param),*> $crate::Interface for dyn $name<$($param),*> + '__i {
            const NAME: &'static str = ::core::stringify!($name);
        }

        // SAFETY: both conversions are unsizing coercions of the same pointer.
        unsafe impl<'__i, $($param,)* __S: $name<$($param),*> + '__i> $crate::Resolve<__S>
            for dyn $name<$($param),*> + '__i
        {
            #[inline]
            fn resolve(value: &__S) -> &Self {
                value
            }

            #[inline]
            fn resolve_boxed(value: $crate::__private::Box<__S>) -> $crate::__private::Box<Self> {
                value
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __interface_upcast {
    ($name:ident [$($param:ident),*] $sup:ident) => {
        // SAFETY: both conversions are trait-object upcasts of the same pointer.
        unsafe impl<'__i, $($param),*> $crate::Upcast<dyn $sup + '__i>
            for dyn $name<$($param),*> + '__i
        {
            #[inline]
            fn upcast(&self) -> &(dyn $sup + '__i) {
                self
            }

            #[inline]
            fn upcast_boxed(
                self: $crate::__private::Box<Self>,
            ) -> $crate::__private::Box<dyn $sup + '__i> {
                self
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __interface_forward {
    (@munch $tr:tt $params:tt [$($done:tt)*]) => {
        $crate::__interface_forward! { @emit $tr $params [$($done)*] }
    };
    (@munch $tr:tt $params:tt [$($done:tt)*]
        $(#[$fmeta:meta])*
        fn $f:ident(&self $(, $a:ident : $at:ty)*) $(-> $r:ty)?;
        $($rest:tt)*
    ) => {
        $crate::__interface_forward! {
            @munch $tr $params [$($done)* { $f ($($a : $at),*) ($($r)?) }]
            $($rest)*
        }
    };
    (@munch $tr:tt $params:tt [$($done:tt)*]
        $(#[$fmeta:meta])*
        fn $f:ident(&self $(, $a:ident : $at:ty)*) $(-> $r:ty)? $default:block
        $($rest:tt)*
    ) => {
        $crate::__interface_forward! {
            @munch $tr $params [$($done)* { $f ($($a : $at),*) ($($r)?) }]
            $($rest)*
        }
    };
    (@munch $tr:tt $params:tt [$($done:tt)*] $($unsupported:tt)+) => {
        ::core::compile_error!(
            "interface operations must be written `fn name(&self, arg: Type, ..) -> Ret`"
        );
    };
    (@emit [$tr:path] [$($param:ident),*] [$({ $f:ident ($($a:ident : $at:ty),*) ($($r:ty)?) })*]) => {
        impl<'__a, $($param,)* __X: ?Sized + $tr + '__a> $tr for $crate::InterfaceRef<'__a, __X> {
            $(
                #[inline]
                fn $f(&self $(, $a: $at)*) $(-> $r)? {
                    <__X as $tr>::$f($crate::InterfaceRef::get(self) $(, $a)*)
                }
            )*
        }

        impl<$($param,)* __X: ?Sized + $tr> $tr for $crate::Owned<__X> {
            $(
                #[inline]
                fn $f(&self $(, $a: $at)*) $(-> $r)? {
                    <__X as $tr>::$f(&**self $(, $a)*)
                }
            )*
        }

        impl<'__r, $($param,)* __S: ?Sized, __I: ?Sized + $crate::Resolve<__S> + $tr + '__r> $tr
            for $crate::Impl<'__r, __S, __I>
        {
            $(
                #[inline]
                fn $f(&self $(, $a: $at)*) $(-> $r)? {
                    <__I as $tr>::$f($crate::Impl::interface(self) $(, $a)*)
                }
            )*
        }
    };
}
