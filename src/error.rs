use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that may occur in this library.
#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum Error {
    /// An owner was neither absent nor a non-empty identifier.
    #[error("Owner must be a non-empty identifier or absent, got `{0}`")]
    InvalidOwner(String),

    /// The config did not describe a usable fleet.
    #[error("The config is not valid. Problem: `{0}`")]
    BadConfig(String),
}

impl Error {
    /// Attempt to unwrap the error as a bad config.
    pub fn try_into_bad_config(self) -> Result<String, Self> {
        if let Self::BadConfig(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}
