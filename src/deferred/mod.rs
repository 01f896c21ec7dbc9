//! Re-invokable descriptions of asynchronous work
//!
//! A [`Deferred<T>`] is not a future. It is a zero-argument description that
//! produces a fresh future every time it is [invoked](Deferred::invoke), so
//! two invocations are two independent computations and nothing is cached.
//! Cloning a `Deferred` shares the description, never an in-flight result.
//!
//! Combinators are lazy: building a pipeline with [`map`](Deferred::map) or
//! [`chain`](Deferred::chain) runs nothing. Each step of a `chain` starts
//! only after the previous step's future has completed.
//!
//! An invocation may reject with an [`anyhow::Error`]. Rejections skip every
//! downstream transformer. Use [`DeferredOutcome::try_catch`] to move a
//! rejection onto a typed error track instead.
//!
//! # Example
//!
//! ```
//! use fpcore::deferred::Deferred;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let answer = Deferred::of(20).map(|n| n + 1).chain(|n| Deferred::of(n * 2));
//! assert_eq!(answer.invoke().await.unwrap(), 42);
//! # }
//! ```

pub mod outcome;

pub use outcome::DeferredOutcome;

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use tracing::{trace, warn};

use crate::app::config::Config;
use crate::error::Error;

/// Handle for one invocation of a [`Deferred`]
pub type DeferredFuture<T> = BoxFuture<'static, anyhow::Result<T>>;

/// A repeatable asynchronous computation producing `T`
pub struct Deferred<T> {
    thunk: Arc<dyn Fn() -> DeferredFuture<T> + Send + Sync>,
}

impl<T> Clone for Deferred<T> {
    fn clone(&self) -> Self {
        Self {
            thunk: Arc::clone(&self.thunk),
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Deferred<T> {
    /// Describe a computation from an async factory. `f` is called once per
    /// invocation.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        Self {
            thunk: Arc::new(move || f().boxed()),
        }
    }

    /// Describe a computation from a synchronous function. `f` runs when the
    /// invocation's future is first polled.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> anyhow::Result<T> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self::new(move || {
            let f = Arc::clone(&f);
            async move { f() }
        })
    }

    /// A computation that resolves to `value` on every invocation
    pub fn of(value: T) -> Self
    where
        T: Clone + Sync,
    {
        Self::new(move || {
            let value = value.clone();
            async move { Ok(value) }
        })
    }

    /// A computation that rejects with `message` on every invocation
    pub fn rejected(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::new(move || {
            let message = message.clone();
            async move { Err(anyhow::anyhow!(message)) }
        })
    }

    /// Start a fresh execution and return its handle
    pub fn invoke(&self) -> DeferredFuture<T> {
        trace!(output = std::any::type_name::<T>(), "invoking deferred");
        (self.thunk)()
    }

    /// Apply `f` to the result of each invocation. A rejection skips `f`.
    pub fn map<U, F>(self, f: F) -> Deferred<U>
    where
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Deferred::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move { source.invoke().await.map(|value| f(value)) }
        })
    }

    /// Feed the result of each invocation into `f` and run the deferred it
    /// returns. The second step starts only after the first has resolved.
    pub fn chain<U, F>(self, f: F) -> Deferred<U>
    where
        U: Send + 'static,
        F: Fn(T) -> Deferred<U> + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Deferred::new(move || {
            let source = self.clone();
            let f = Arc::clone(&f);
            async move {
                let value = source.invoke().await?;
                f(value).invoke().await
            }
        })
    }

    /// Reject any invocation that does not finish within `duration`
    pub fn with_timeout(self, duration: Duration) -> Self {
        Deferred::new(move || {
            let source = self.clone();
            async move {
                match tokio::time::timeout(duration, source.invoke()).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(?duration, "deferred invocation timed out");
                        Err(Error::TimedOut(duration).into())
                    }
                }
            }
        })
    }

    /// Apply the defaults from `config`
    pub fn configured(self, config: &Config) -> Self {
        match config.deferred_timeout {
            Some(duration) => self.with_timeout(duration),
            None => self,
        }
    }
}
