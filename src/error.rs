/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the identity client
//!
//! Failures fall in two categories:
//! - transport failures, always reported as [`AppError::Api`] with the
//!   underlying cause preserved in a [`TransportError`]
//! - application failures, where the identity service answered but the
//!   envelope did not report success (one variant per endpoint family)

use reqwest::StatusCode;
use thiserror::Error;

/// Cause of a failed exchange with the identity service
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client failed to send the request or read the response
    #[error("http error: {0}")]
    Http(#[source] reqwest::Error),
    /// A local resource (typically a certificate file) could not be read
    #[error("io error: {0}")]
    Io(#[source] std::io::Error),
    /// The response body was not a JSON document
    #[error("invalid json response: {0}")]
    Decode(#[source] serde_json::Error),
    /// The service answered with a non-success HTTP status
    #[error("unexpected status code: {0}")]
    Status(StatusCode),
    /// Any other failure raised while sending
    #[error("{0}")]
    Other(String),
}

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure
    #[error("api error: {0}")]
    Api(#[from] TransportError),
    /// Certificate or interactive login rejected
    #[error("login error: {0}")]
    Login(String),
    /// Keep alive rejected
    #[error("keep alive error: {0}")]
    KeepAlive(String),
    /// Logout rejected
    #[error("logout error: {0}")]
    Logout(String),
    /// Invalid or incomplete configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Returns `true` when the failure happened before an envelope could be read
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Api(_))
    }

    /// Returns `true` when the service answered with a non-success envelope
    #[must_use]
    pub fn is_application(&self) -> bool {
        matches!(
            self,
            AppError::Login(_) | AppError::KeepAlive(_) | AppError::Logout(_)
        )
    }

    /// Envelope-derived detail for application failures
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Login(detail) | AppError::KeepAlive(detail) | AppError::Logout(detail) => {
                Some(detail)
            }
            _ => None,
        }
    }
}
