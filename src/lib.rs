//! # fpcore
//!
//! Small composable containers for values that may be missing, computations
//! that may fail, and asynchronous work that runs on demand.
//!
//! ## Modules
//!
//! - `optional` - `Optional<T>`: presence or absence of a value
//! - `outcome` - `Outcome<E, T>`: success value or typed error, plus the
//!   `try_catch` boundary for fallible host operations
//! - `deferred` - `Deferred<T>`: re-invokable asynchronous computations, and
//!   `DeferredOutcome<E, T>` for asynchronous computations with a typed error
//! - `json` - JSON decoding onto the `Outcome` error track
//! - `app` - configuration and logging setup
//! - `error` - crate error type
//!
//! Every container offers the same vocabulary: `map` transforms the wrapped
//! value, `chain` sequences a step that returns another container, and
//! `fold` / `get_or_else` eliminate the container into a plain value.
pub mod app;
pub mod deferred;
pub mod error;
pub mod json;
pub mod optional;
pub mod outcome;

pub use deferred::{Deferred, DeferredOutcome};
pub use error::{Error, Result};
pub use optional::{find, head, Optional};
pub use outcome::{Caught, Outcome};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::Config;
    pub use crate::deferred::{Deferred, DeferredOutcome};
    pub use crate::json::{parse_json, parse_json_as};
    pub use crate::optional::{find, head, Optional};
    pub use crate::outcome::{Caught, Outcome};
}
