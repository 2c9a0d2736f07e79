//! Miscellaneous generic utilities.

/// Did the last construction take its input as given, or replace it with a fallback.
///
/// Constructors in this crate never fail, invalid input is swapped for a fixed default instead.
/// This carries the value together with that fact so a caller can tell an explicit `01/01/2000`
/// apart from a coerced one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coerced<T> {
    /// Whether any part of the input was invalid and replaced by its default.
    pub did_fallback: bool,
    /// The constructed value.
    pub result: T,
}

impl<T> Coerced<T> {
    /// Create an instance with [`Self::did_fallback`] set to true.
    pub const fn fallback(result: T) -> Self {
        Self::new(true, result)
    }

    /// Create an instance with [`Self::did_fallback`] set to false.
    pub const fn accepted(result: T) -> Self {
        Self::new(false, result)
    }

    /// A shorthand for creation.
    //
    // did_fallback first so the flag can be computed from the result before it is moved in
    pub const fn new(did_fallback: bool, result: T) -> Self {
        Self {
            did_fallback,
            result,
        }
    }

    /// Drop the flag and keep the value.
    pub fn into_inner(self) -> T {
        self.result
    }

    /// Map the carried value, keeping the flag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Coerced<U> {
        Coerced::new(self.did_fallback, f(self.result))
    }
}

impl<T> From<Coerced<T>> for Option<T> {
    fn from(value: Coerced<T>) -> Self {
        match value.did_fallback {
            true => None,
            false => Some(value.result),
        }
    }
}

impl<T> PartialEq<T> for Coerced<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &T) -> bool {
        self.result.eq(other)
    }
}
