//! What rtrait rejects at compile time.
//!
//! Every failure below is a compile error rather than a runtime one. The only runtime
//! failure is [`CastError`](crate::CastError), returned by downcasts on erased handles.
//!
//! # An unregistered pair
//!
//! Asking for an interface a type was never registered for does not compile. The error
//! names both the interface and the type.
//!
//! ```compile_fail,E0277
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! struct Rock;
//!
//! let rock = Rock;
//! let _ = rock.to_interface::<dyn Speaker>();
//! ```
//!
//! The same holds for erasure and ownership:
//!
//! ```compile_fail,E0277
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! let _ = own::<dyn Speaker, _>(42u8);
//! ```
//!
//! [`resolves!`](crate::resolves) is the non-failing form of the query:
//!
//! ```
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! assert!(!resolves!(u8: dyn Speaker));
//! ```
//!
//! Generic code states the requirement as an [`Implements`](crate::Implements) bound,
//! which fails at the call site with the same message:
//!
//! ```compile_fail,E0277
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! fn speak_twice<S: Implements<dyn Speaker>>(value: &S) -> String {
//!     let speaker: &dyn Speaker = value.as_interface();
//!     speaker.speak() + &speaker.speak()
//! }
//!
//! let _ = speak_twice(&42u8);
//! ```
//!
//! # Hand-written registry entries
//!
//! Owning handles trust [`Resolve`](crate::Resolve) and [`Upcast`](crate::Upcast) to
//! hand back the value they were given, so both are `unsafe` to implement.
//! [`interface!`](crate::interface) writes the only implementations most code needs.
//!
//! ```compile_fail,E0200
//! use rtrait::Resolve;
//!
//! struct Small(u8);
//!
//! impl Resolve<Small> for [u64] {
//!     fn resolve(_: &Small) -> &Self {
//!         &[]
//!     }
//!
//!     fn resolve_boxed(_: Box<Small>) -> Box<Self> {
//!         vec![0u64; 4].into_boxed_slice()
//!     }
//! }
//! ```
//!
//! # Ambiguous registrations
//!
//! Two registrations that can apply to the same pair are rejected where they are
//! written, even if no type currently satisfies both.
//!
//! ```compile_fail,E0119
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Walk {
//!         fn walk(&self);
//!     }
//! }
//!
//! interface! {
//!     pub trait Swim {
//!         fn swim(&self);
//!     }
//! }
//!
//! interface! {
//!     derived pub trait Move {
//!         fn travel(&self);
//!     }
//! }
//!
//! impl<T: ?Sized + Walk> Move for T {
//!     fn travel(&self) {
//!         self.walk()
//!     }
//! }
//!
//! impl<T: ?Sized + Swim> Move for T {
//!     fn travel(&self) {
//!         self.swim()
//!     }
//! }
//! ```
//!
//! Exclusive conditions are written as disjoint impls instead, for example by dispatching
//! on a [`Bool`](crate::predicate::Bool) parameter.
//!
//! # Casting an implementation object to the wrong type
//!
//! An implementation object knows its self type statically, so a mismatched
//! [`Impl::cast`](crate::Impl::cast) does not compile.
//!
//! ```compile_fail,E0277
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! struct Dog;
//!
//! impl Speaker for Dog {
//!     fn speak(&self) -> String {
//!         "woof".into()
//!     }
//! }
//!
//! let dog = Dog;
//! let _: &String = dog.to_interface::<dyn Speaker>().cast::<String>();
//! ```
//!
//! # Upcasting to an interface that is not a supertrait
//!
//! ```compile_fail,E0277
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! interface! {
//!     pub trait Runner {
//!         fn run(&self);
//!     }
//! }
//!
//! struct Dog;
//!
//! impl Speaker for Dog {
//!     fn speak(&self) -> String {
//!         "woof".into()
//!     }
//! }
//!
//! impl Runner for Dog {
//!     fn run(&self) {}
//! }
//!
//! let dog = Dog;
//! let speaker = InterfaceRef::<dyn Speaker>::new(&dog);
//! let _: InterfaceRef<'_, dyn Runner> = speaker.upcast();
//! ```
//!
//! # Outliving the value
//!
//! Interface references and implementation objects borrow the value they were made from.
//! Keeping one past the value's lifetime is a borrow error, and a downcast never hands
//! out a longer borrow than the reference had.
//!
//! ```compile_fail,E0597
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! struct Dog;
//!
//! impl Speaker for Dog {
//!     fn speak(&self) -> String {
//!         "woof".into()
//!     }
//! }
//!
//! let escaped: &Dog;
//! {
//!     let dog = Dog;
//!     let speaker = InterfaceRef::<dyn Speaker>::new(&dog);
//!     escaped = speaker.downcast::<Dog>().unwrap();
//! }
//! let _ = escaped;
//! ```
//!
//! # Erasing a borrowed type
//!
//! Only `'static` types can be recorded for a later downcast, because lifetimes are not
//! part of the recorded type.
//!
//! ```compile_fail,E0597
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Length {
//!         fn length(&self) -> usize;
//!     }
//! }
//!
//! struct View<'a>(&'a str);
//!
//! impl Length for View<'_> {
//!     fn length(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! let text = String::from("four");
//! let view = View(&text);
//! let _ = InterfaceRef::<dyn Length>::new(&view).length();
//! ```
//!
//! Borrowed types can still be resolved and called through an implementation object,
//! which records nothing:
//!
//! ```
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Length {
//!         fn length(&self) -> usize;
//!     }
//! }
//!
//! struct View<'a>(&'a str);
//!
//! impl Length for View<'_> {
//!     fn length(&self) -> usize {
//!         self.0.len()
//!     }
//! }
//!
//! fn length(text: &str) -> usize {
//!     View(text).to_interface::<dyn Length>().length()
//! }
//!
//! assert_eq!(length("four"), 4);
//! ```
//!
//! # Moving out of an owning handle twice
//!
//! [`Owned`](crate::Owned) is not `Clone`; using a handle after moving it does not
//! compile.
//!
//! ```compile_fail,E0382
//! use rtrait::prelude::*;
//!
//! interface! {
//!     pub trait Speaker {
//!         fn speak(&self) -> String;
//!     }
//! }
//!
//! struct Dog;
//!
//! impl Speaker for Dog {
//!     fn speak(&self) -> String {
//!         "woof".into()
//!     }
//! }
//!
//! let first = own::<dyn Speaker, _>(Dog);
//! let second = first;
//! let _ = (first.speak(), second.speak());
//! ```
