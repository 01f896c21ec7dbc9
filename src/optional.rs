//! Presence or absence of a value
//!
//! `Optional<T>` is a sum type with exactly two variants. Absence is not a
//! failure: there is no payload on the `Absent` side, only the fact that no
//! value exists. Every combinator consumes `self` and returns a new value.
//!
//! # Example
//!
//! ```
//! use fpcore::optional::{head, Optional};
//!
//! let bumped = head(vec![1, 2]).map(|n| n + 100);
//! assert_eq!(bumped, Optional::Present(101));
//!
//! let fallback = head(Vec::<i32>::new()).get_or_else(|| -1);
//! assert_eq!(fallback, -1);
//! ```

use serde::{Deserialize, Serialize};

/// A value of type `T` that may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(tag = "_tag", content = "value")]
pub enum Optional<T> {
    /// No value
    #[default]
    Absent,
    /// A value is present
    Present(T),
}

impl<T> Optional<T> {
    /// Wrap a value
    pub fn present(value: T) -> Self {
        Optional::Present(value)
    }

    /// The empty instance
    pub fn absent() -> Self {
        Optional::Absent
    }

    /// `Absent` when the value is missing, `Present` otherwise
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Optional::Absent,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Optional::Absent)
    }

    /// Borrow the contained value without consuming `self`
    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Transform the present value.
    ///
    /// The result is not flattened: a function returning an `Optional`
    /// produces `Optional<Optional<U>>`. Use [`chain`](Self::chain) to
    /// sequence such functions.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Optional::Present(value) => Optional::Present(f(value)),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Sequence a computation that may itself produce nothing.
    ///
    /// `Absent` short-circuits; `f` is never called on it.
    pub fn chain<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Optional::Present(value) => f(value),
            Optional::Absent => Optional::Absent,
        }
    }

    /// Extract the value, computing a fallback only when absent
    pub fn get_or_else<F>(self, on_absent: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Present(value) => value,
            Optional::Absent => on_absent(),
        }
    }

    /// Eliminate into `R`. Exactly one of the handlers runs.
    pub fn fold<R, A, P>(self, on_absent: A, on_present: P) -> R
    where
        A: FnOnce() -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Optional::Present(value) => on_present(value),
            Optional::Absent => on_absent(),
        }
    }

    /// Keep the value only if `predicate` holds for it
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Optional::Present(value) if predicate(&value) => Optional::Present(value),
            _ => Optional::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Optional<Optional<T>> {
    /// Remove one level of nesting. Same as `chain(|inner| inner)`.
    pub fn flatten(self) -> Optional<T> {
        self.chain(|inner| inner)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Absent => None,
        }
    }
}

/// First element of a sequence, `Absent` when the sequence is empty
pub fn head<I>(items: I) -> Optional<I::Item>
where
    I: IntoIterator,
{
    Optional::from_nullable(items.into_iter().next())
}

/// First element satisfying `predicate`, `Absent` when none does
pub fn find<I, P>(items: I, mut predicate: P) -> Optional<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    Optional::from_nullable(items.into_iter().find(|item| predicate(item)))
}
