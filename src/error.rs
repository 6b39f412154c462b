//! Error type definitions.

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// A `Result` alias where the `Err` case is `voyago::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the Voyago client and stores.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token (make sure there are no invalid characters)")]
    InvalidToken,
    #[error("Failed to setup HTTP client: {0}")]
    HttpClientSetup(reqwest::Error),
    #[error("Failed to deserialize response: {0}")]
    Deserialize(reqwest::Error),
    #[error("Http error: {0}")]
    Http(reqwest::Error),
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    InvalidParams(#[from] serde_qs::Error),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(std::io::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(url::ParseError),
}

/// An error returned by the Voyago API.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    #[serde(skip)]
    pub method: http::Method,
    #[serde(skip)]
    pub path: String,
    pub message: Option<String>,
}

impl ApiError {
    pub(crate) fn new(
        status: u16,
        method: http::Method,
        path: String,
        message: Option<String>,
    ) -> Self {
        Self {
            status,
            method,
            path,
            message,
        }
    }
}

impl std::error::Error for ApiError {}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = self.message.as_ref() {
            write!(
                f,
                "Received {} on {} {}: {}",
                self.status, self.method, self.path, msg
            )
        } else {
            write!(
                f,
                "Received {} on {} {}",
                self.status, self.method, self.path
            )
        }
    }
}
