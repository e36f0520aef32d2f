/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for the OneMap client
//!
//! Every failure, whether it is detected locally or reported by the API, is
//! returned as an [`AppError`]. Nothing is retried by the library; callers can
//! use [`AppError::is_retryable`] to decide for themselves.

use reqwest::StatusCode;
use std::fmt;
use std::sync::Arc;

/// Result alias used throughout the crate
pub type OneMapResult<T> = Result<T, AppError>;

/// Main error type for the library
///
/// Wrapped library errors sit behind an `Arc` so the type stays `Clone`.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Caller arguments are missing or inconsistent, detected before any network call
    Validation(String),
    /// Email or password not configured
    MissingCredentials,
    /// The login endpoint rejected the credentials or returned no token
    Authentication {
        /// HTTP status returned by the login endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// An endpoint answered with a non-200 status
    Api {
        /// HTTP status returned by the endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Connection, timeout or DNS failure
    Network(Arc<reqwest::Error>),
    /// Response body is not valid JSON
    Json(Arc<serde_json::Error>),
    /// JSON is valid but does not have the expected shape
    Deserialization(String),
    /// Local I/O failure
    Io(Arc<std::io::Error>),
}

impl AppError {
    /// Whether repeating the same call could reasonably succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::Network(_) => true,
            AppError::Api { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Authentication { status, .. } | AppError::Api { status, .. } => {
                Some(*status)
            }
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "invalid input: {msg}"),
            AppError::MissingCredentials => {
                write!(f, "missing credentials: email and password must both be provided")
            }
            AppError::Authentication { status, body } => {
                write!(f, "authentication failed ({status}): {body}")
            }
            AppError::Api { status, body } => write!(f, "api error ({status}): {body}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e.as_ref()),
            AppError::Json(e) => Some(e.as_ref()),
            AppError::Io(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        AppError::Network(Arc::new(error))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Json(Arc::new(error))
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::Io(Arc::new(error))
    }
}
