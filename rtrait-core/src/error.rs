use core::fmt;

use crate::SelfType;

/// A downcast asked an erased handle for a type it was not erased from.
///
/// This is the only runtime error in the crate: everything else (unresolved pairs,
/// ambiguous registrations, statically checked casts) fails at compile time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastError {
    /// The type the caller asked for.
    pub expected: SelfType,
    /// The type the handle was erased from.
    pub actual: SelfType,
}

impl CastError {
    pub(crate) fn new(expected: SelfType, actual: SelfType) -> Self {
        Self { expected, actual }
    }
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot downcast to `{}`: value was erased from `{}`",
            self.expected, self.actual
        )
    }
}

impl fmt::Debug for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl core::error::Error for CastError {}
