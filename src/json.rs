//! JSON decoding on the `Outcome` error track
//!
//! Parsing is delegated to `serde_json`; these helpers only route its
//! failures through [`Outcome::try_catch`] so malformed input becomes an
//! `Err` value instead of an error that must be handled separately.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Error;
use crate::outcome::Outcome;

/// Parse `text` into an untyped JSON value
pub fn parse_json(text: &str) -> Outcome<Error, Value> {
    parse_json_as(text)
}

/// Parse `text` into `T`
pub fn parse_json_as<T: DeserializeOwned>(text: &str) -> Outcome<Error, T> {
    Outcome::try_catch(|| serde_json::from_str::<T>(text), Error::from)
}
