//! Errors raised while fetching weather for a city.

use thiserror::Error;

/// Failure of a single lookup. Callers only ever show the message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("City not found")]
    NotFound,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl FetchError {
    /// Message stored by the lookup component and shown in the empty table row.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
