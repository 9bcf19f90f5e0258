//! Places client error types.

use std::fmt;

/// Errors from the places HTTP client.
#[derive(Debug)]
pub enum PlaceError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Rate limited by the API
    RateLimited,

    /// Invalid API key or unauthorized
    Unauthorized,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::Http(e) => write!(f, "HTTP error: {e}"),
            PlaceError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            PlaceError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            PlaceError::RateLimited => write!(f, "rate limited by places API"),
            PlaceError::Unauthorized => write!(f, "unauthorized (invalid API key)"),
        }
    }
}

impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaceError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PlaceError {
    fn from(err: reqwest::Error) -> Self {
        PlaceError::Http(err)
    }
}
