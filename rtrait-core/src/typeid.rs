//! Recorded self-types for erased handles.
//!
//! Same approach as dtolnay's `typeid`: the `TypeId` is produced lazily through a
//! function pointer so that a [`SelfType`] can be built in `const` contexts and copied
//! around as a single word.

use core::any::TypeId;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;

struct SelfTypeInfo {
    type_id_fn: fn() -> TypeId,
    type_name_fn: fn() -> &'static str,
}

struct Info<T: ?Sized>(PhantomData<T>);

impl<T: ?Sized + 'static> Info<T> {
    const INFO: &'static SelfTypeInfo = &SelfTypeInfo {
        type_id_fn: TypeId::of::<T>,
        type_name_fn: core::any::type_name::<T>,
    };
}

/// The concrete type a handle was erased from.
///
/// Only `'static` types can be recorded: two types that differ only by lifetimes share a
/// `TypeId`, and a downcast must never be able to lengthen a borrow.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct SelfType {
    info: &'static SelfTypeInfo,
}

impl SelfType {
    /// Record `T` as a self-type.
    #[must_use]
    pub const fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        SelfType {
            info: Info::<T>::INFO,
        }
    }

    /// Get the underlying [`TypeId`].
    #[inline]
    pub fn type_id(self) -> TypeId {
        (self.info.type_id_fn)()
    }

    /// The type name, as reported by [`core::any::type_name`].
    #[inline]
    pub fn name(self) -> &'static str {
        (self.info.type_name_fn)()
    }

    /// Returns true if this records exactly `T`.
    #[inline]
    pub fn is<T>(self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.type_id() == TypeId::of::<T>()
    }
}

impl Debug for SelfType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SelfType({})", self.name())
    }
}

impl Display for SelfType {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl PartialEq for SelfType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl PartialEq<TypeId> for SelfType {
    #[inline]
    fn eq(&self, other: &TypeId) -> bool {
        self.type_id() == *other
    }
}

impl Eq for SelfType {}

impl PartialOrd for SelfType {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}

impl Ord for SelfType {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        Ord::cmp(&self.type_id(), &other.type_id())
    }
}

impl Hash for SelfType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Function pointers may be duplicated across codegen units, so hash what `eq` compares.
        self.type_id().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dog;
    struct Cat;

    #[test]
    fn records_identity() {
        rtrait_testhelpers::setup();

        const DOG: SelfType = SelfType::of::<Dog>();
        assert!(DOG.is::<Dog>());
        assert!(!DOG.is::<Cat>());
        assert_eq!(DOG, SelfType::of::<Dog>());
        assert_ne!(DOG, SelfType::of::<Cat>());
        assert_eq!(DOG, TypeId::of::<Dog>());
    }

    #[test]
    fn names_the_type() {
        let ty = SelfType::of::<Cat>();
        assert!(ty.name().ends_with("Cat"), "{}", ty.name());
        assert_eq!(format!("{ty}"), ty.name());
        assert_eq!(format!("{ty:?}"), format!("SelfType({})", ty.name()));
    }

    #[test]
    fn unsized_types_are_recorded() {
        let ty = SelfType::of::<str>();
        assert!(ty.is::<str>());
        assert!(!ty.is::<String>());
    }
}
