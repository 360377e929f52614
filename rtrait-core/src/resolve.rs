//! Compile-time resolution queries over concrete types.

/// Returns whether a concrete type resolves every listed interface, as a `const bool`.
///
/// Interfaces are checked left to right and the conjunction stops at the first one that
/// does not resolve. Unregistered pairs evaluate to `false` instead of failing to
/// compile; in generic code, use an [`Implements`](crate::Implements) bound.
///
/// ```
/// use rtrait_core::{interface, resolves};
///
/// interface! {
///     pub trait Speaker {
///         fn speak(&self) -> String;
///     }
/// }
///
/// struct Dog;
/// struct Rock;
///
/// impl Speaker for Dog {
///     fn speak(&self) -> String {
///         "woof".into()
///     }
/// }
///
/// const DOG_SPEAKS: bool = resolves!(Dog: dyn Speaker);
/// assert!(DOG_SPEAKS);
/// assert!(!resolves!(Rock: dyn Speaker));
/// assert!(!resolves!(Dog: dyn Speaker, dyn core::fmt::Debug));
/// ```
#[macro_export]
macro_rules! resolves {
    ($ty:ty : $($iface:ty),+ $(,)?) => {{
        true $(&& $crate::__private::impls::impls!($iface: $crate::Resolve<$ty>))+
    }};
}
