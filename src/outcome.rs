//! Two-track computations: a success value or a typed error
//!
//! `Outcome<E, T>` carries either `Ok(T)` or `Err(E)`. The error type is a
//! generic parameter so call sites can pick plain messages, structured
//! records or richer error enums. `map` works on the success track and
//! `map_left` on the error track, so either side can be reshaped without
//! branching on the active variant.
//!
//! [`Outcome::try_catch`] is the boundary between fallible host operations
//! and this type. Panics are caught only here and in
//! `DeferredOutcome::try_catch`.
//!
//! `Outcome` short-circuits on the first error. For accumulating every
//! error, convert to and from stillwater's `Validation`.
//!
//! # Example
//!
//! ```
//! use fpcore::outcome::Outcome;
//!
//! fn validate_age(age: u32) -> Outcome<String, u32> {
//!     if age > 18 {
//!         Outcome::ok(age)
//!     } else {
//!         Outcome::err("Underage user!!!".to_string())
//!     }
//! }
//!
//! assert_eq!(validate_age(33).map(|age| age + 1), Outcome::Ok(34));
//! assert_eq!(validate_age(12).get_or_else(|_| 0), 0);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};
use stillwater::Validation;
use tracing::debug;

use crate::optional::Optional;

/// Either an error of type `E` or a success value of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "_tag", content = "value")]
pub enum Outcome<E, T> {
    /// Failure track
    Err(E),
    /// Success track
    Ok(T),
}

/// A failure captured by [`Outcome::try_catch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caught<X> {
    /// The thunk returned an error
    Raised(X),
    /// The thunk panicked; holds the panic message when it was a string
    Panicked(String),
}

impl<X: fmt::Display> fmt::Display for Caught<X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Caught::Raised(error) => write!(f, "{}", error),
            Caught::Panicked(message) => write!(f, "panicked: {}", message),
        }
    }
}

impl<X: fmt::Debug + fmt::Display> std::error::Error for Caught<X> {}

pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

impl<E, T> Outcome<E, T> {
    pub fn ok(value: T) -> Self {
        Outcome::Ok(value)
    }

    pub fn err(error: E) -> Self {
        Outcome::Err(error)
    }

    /// Run a fallible host operation and capture every failure it signals.
    ///
    /// A returned `Err(X)` becomes `Caught::Raised`, a panic becomes
    /// `Caught::Panicked`; both are converted by `on_throw` into the error
    /// track. Nothing propagates past this call.
    pub fn try_catch<F, X, H>(thunk: F, on_throw: H) -> Self
    where
        F: FnOnce() -> Result<T, X>,
        H: FnOnce(Caught<X>) -> E,
    {
        let caught = match panic::catch_unwind(AssertUnwindSafe(thunk)) {
            Ok(Ok(value)) => return Outcome::Ok(value),
            Ok(Err(error)) => Caught::Raised(error),
            Err(payload) => Caught::Panicked(panic_message(payload)),
        };
        debug!(
            panicked = matches!(caught, Caught::Panicked(_)),
            "try_catch captured a failure"
        );
        Outcome::Err(on_throw(caught))
    }

    /// Build from an optional value, computing the error when absent
    pub fn from_optional<F>(value: Optional<T>, on_absent: F) -> Self
    where
        F: FnOnce() -> E,
    {
        value.fold(|| Outcome::Err(on_absent()), Outcome::Ok)
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    pub fn as_ref(&self) -> Outcome<&E, &T> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the success value; an error passes through unchanged
    pub fn map<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transform the error; a success passes through unchanged
    pub fn map_left<G, F>(self, f: F) -> Outcome<G, T>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Transform whichever track is active
    pub fn bimap<G, U, L, R>(self, on_err: L, on_ok: R) -> Outcome<G, U>
    where
        L: FnOnce(E) -> G,
        R: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(on_ok(value)),
            Outcome::Err(error) => Outcome::Err(on_err(error)),
        }
    }

    /// Sequence a dependent computation. An existing error short-circuits
    /// and `f` is not called.
    pub fn chain<U, F>(self, f: F) -> Outcome<E, U>
    where
        F: FnOnce(T) -> Outcome<E, U>,
    {
        match self {
            Outcome::Ok(value) => f(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Extract the value or compute a fallback from the error
    pub fn get_or_else<F>(self, on_err: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => on_err(error),
        }
    }

    pub fn fold<R, L, P>(self, on_err: L, on_ok: P) -> R
    where
        L: FnOnce(E) -> R,
        P: FnOnce(T) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    /// Drop the error, keeping only whether a value exists
    pub fn to_optional(self) -> Optional<T> {
        self.fold(|_| Optional::Absent, Optional::Present)
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<E, T> From<Result<T, E>> for Outcome<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Result<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<E, T> From<Validation<T, E>> for Outcome<E, T> {
    fn from(validation: Validation<T, E>) -> Self {
        match validation {
            Validation::Success(value) => Outcome::Ok(value),
            Validation::Failure(errors) => Outcome::Err(errors),
        }
    }
}

impl<E, T> From<Outcome<E, T>> for Validation<T, E> {
    fn from(outcome: Outcome<E, T>) -> Self {
        match outcome {
            Outcome::Ok(value) => Validation::Success(value),
            Outcome::Err(error) => Validation::Failure(error),
        }
    }
}
