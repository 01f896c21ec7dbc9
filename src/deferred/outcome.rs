//! Asynchronous computations that can fail with a typed error
//!
//! [`DeferredOutcome<E, T>`] composes [`Deferred`] with [`Outcome`]: each
//! invocation resolves to an `Outcome<E, T>` and never rejects. Host-level
//! rejections enter the error track through [`DeferredOutcome::try_catch`].

use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::anyhow;
use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::debug;

use super::Deferred;
use crate::outcome::{panic_message, Outcome};

/// Handle for one invocation of a [`DeferredOutcome`]
pub type OutcomeFuture<E, T> = BoxFuture<'static, Outcome<E, T>>;

/// A repeatable asynchronous computation producing `Outcome<E, T>`
pub struct DeferredOutcome<E, T> {
    thunk: Arc<dyn Fn() -> OutcomeFuture<E, T> + Send + Sync>,
}

impl<E, T> Clone for DeferredOutcome<E, T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<E, T> fmt::Debug for DeferredOutcome<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredOutcome").finish_non_exhaustive()
    }
}

impl<E, T> DeferredOutcome<E, T>
where
    E: Send + 'static,
    T: Send + 'static,
{
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome<E, T>> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || f().boxed()),
        }
    }

    pub fn ok(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || {
            let value = value.clone();
            async move { Outcome::Ok(value) }
        })
    }

    pub fn err(error: E) -> Self
    where
        E: Clone + Sync,
    {
        Self::new(move || {
            let error = error.clone();
            async move { Outcome::Err(error) }
        })
    }

    pub fn from_outcome(outcome: Outcome<E, T>) -> Self
    where
        E: Clone + Sync,
        T: Clone + Sync,
    {
        Self::new(move || {
            let outcome = outcome.clone();
            async move { outcome }
        })
    }

    /// Run `deferred` and convert a rejection into the error track with
    /// `on_reject`. A panic while running `deferred` is captured as a
    /// rejection with the message `panicked: <payload>`.
    pub fn try_catch<H>(deferred: Deferred<T>, on_reject: H) -> Self
    where
        H: Fn(anyhow::Error) -> E + Send + Sync + 'static,
    {
        let on_reject = Arc::new(on_reject);
        Self::new(move || {
            let source = deferred.clone();
            let on_reject = Arc::clone(&on_reject);
            async move {
                let run = AssertUnwindSafe(async move { source.invoke().await });
                let error = match run.catch_unwind().await {
                    Ok(Ok(value)) => return Outcome::Ok(value),
                    Ok(Err(error)) => error,
                    Err(payload) => anyhow!("panicked: {}", panic_message(payload)),
                };
                debug!(%error, "deferred step rejected");
                Outcome::Err(on_reject(error))
            }
        })
    }

    /// Start a fresh execution and return its handle
    pub fn invoke(&self) -> OutcomeFuture<E, T> {
        (self.thunk)()
    }

    pub fn map<U, F>(self, f: F) -> DeferredOutcome<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredOutcome::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move { source.invoke().await.map(|value| f(value)) }
        })
    }

    pub fn map_left<G, F>(self, f: F) -> DeferredOutcome<G, T>
    where
        G: Send + 'static,
        F: Fn(E) -> G + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredOutcome::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move { source.invoke().await.map_left(|error| f(error)) }
        })
    }

    /// Sequence a dependent asynchronous step. An error short-circuits and
    /// `f` is not called.
    pub fn chain<U, F>(self, f: F) -> DeferredOutcome<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> DeferredOutcome<E, U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredOutcome::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move {
                match source.invoke().await {
                    Outcome::Ok(value) => f(value).invoke().await,
                    Outcome::Err(error) => Outcome::Err(error),
                }
            }
        })
    }

    /// Sequence a synchronous step that may fail
    pub fn chain_outcome<U, F>(self, f: F) -> DeferredOutcome<E, U>
    where
        U: Send + 'static,
        F: Fn(T) -> Outcome<E, U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        DeferredOutcome::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move { source.invoke().await.chain(|value| f(value)) }
        })
    }

    /// Eliminate both tracks into a plain deferred value
    pub fn fold<R, L, P>(self, on_err: L, on_ok: P) -> Deferred<R>
    where
        R: Send + 'static,
        L: Fn(E) -> R + Send + Sync + 'static,
        P: Fn(T) -> R + Send + Sync + 'static,
    {
        let on_err = Arc::new(on_err);
        let on_ok = Arc::new(on_ok);
        Deferred::new(move || {
            let source = self.clone();
            let on_err = Arc::clone(&on_err);
            let on_ok = Arc::clone(&on_ok);
            async move {
                let outcome = source.invoke().await;
                Ok(outcome.fold(|error| on_err(error), |value| on_ok(value)))
            }
        })
    }

    pub fn get_or_else<F>(self, on_err: F) -> Deferred<T>
    where
        F: Fn(E) -> T + Send + Sync + 'static,
    {
        self.fold(on_err, |value| value)
    }

    /// View as a plain deferred whose invocations never reject
    pub fn into_deferred(self) -> Deferred<Outcome<E, T>> {
        Deferred::new(move || {
            let source = self.clone();
            async move { Ok(source.invoke().await) }
        })
    }
}
