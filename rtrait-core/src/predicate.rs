//! Type-level booleans for guarding registrations.
//!
//! A conditional registration that cannot be written as a plain bound is expressed as a
//! [`Predicate`] computing a [`Bool`], then either required to [`Holds`] or dispatched on:
//!
//! ```
//! use rtrait_core::predicate::{Bool, False, Holds, Predicate, True};
//! use rtrait_core::{interface, resolves};
//!
//! interface! {
//!     pub trait Heavy {
//!         fn tons(&self) -> u32;
//!     }
//! }
//!
//! struct Truck;
//! struct Bike;
//!
//! impl Predicate for Truck {
//!     type Outcome = True;
//! }
//!
//! impl Predicate for Bike {
//!     type Outcome = False;
//! }
//!
//! impl Heavy for Truck
//! where
//!     <Truck as Predicate>::Outcome: Holds,
//! {
//!     fn tons(&self) -> u32 {
//!         12
//!     }
//! }
//!
//! assert!(resolves!(Truck: dyn Heavy));
//! assert!(!resolves!(Bike: dyn Heavy));
//! assert!(!<Bike as Predicate>::Outcome::VALUE);
//! ```

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::True {}
    impl Sealed for super::False {}
}

/// Type-level `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct True;

/// Type-level `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct False;

/// A type-level boolean: either [`True`] or [`False`].
pub trait Bool: sealed::Sealed + 'static {
    /// The value as a `bool`.
    const VALUE: bool;

    /// Negation.
    type Not: Bool;

    /// Conjunction.
    type And<B: Bool>: Bool;

    /// Disjunction.
    type Or<B: Bool>: Bool;

    /// `Then` when true, `Else` when false.
    type If<Then, Else>;
}

impl Bool for True {
    const VALUE: bool = true;
    type Not = False;
    type And<B: Bool> = B;
    type Or<B: Bool> = True;
    type If<Then, Else> = Then;
}

impl Bool for False {
    const VALUE: bool = false;
    type Not = True;
    type And<B: Bool> = False;
    type Or<B: Bool> = B;
    type If<Then, Else> = Else;
}

/// Implemented only by [`True`]: the bound `<P as Predicate>::Outcome: Holds` guards a
/// registration on `P`.
#[diagnostic::on_unimplemented(
    message = "the predicate does not hold",
    label = "this evaluates to `{Self}`"
)]
pub trait Holds: Bool {}

impl Holds for True {}

/// A property of `Self` computed at the type level.
pub trait Predicate {
    /// Whether the property holds.
    type Outcome: Bool;
}

/// `!A`
pub type Not<A> = <A as Bool>::Not;

/// `A && B`
pub type And<A, B> = <A as Bool>::And<B>;

/// `A || B`
pub type Or<A, B> = <A as Bool>::Or<B>;

/// `Then` if `C`, otherwise `Else`.
pub type If<C, Then, Else> = <C as Bool>::If<Then, Else>;

/// The outcome of `P`.
pub type Outcome<P> = <P as Predicate>::Outcome;
