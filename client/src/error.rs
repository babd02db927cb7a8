//! Client-side error handling

use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a usable response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a failure status; `message` is the server's
    /// `error` field when one was present
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },

    /// Reading or writing the persisted session failed
    #[error("session storage: {0}")]
    Storage(#[from] std::io::Error),

    /// The persisted session file exists but does not parse
    #[error("session file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
