use std::time::Duration;
use thiserror::Error;

use crate::outcome::Caught;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Panicked: {0}")]
    Panicked(String),

    #[error("Timed out after {0:?}")]
    TimedOut(Duration),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl<X: Into<Error>> From<Caught<X>> for Error {
    fn from(caught: Caught<X>) -> Self {
        match caught {
            Caught::Raised(error) => error.into(),
            Caught::Panicked(message) => Error::Panicked(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
