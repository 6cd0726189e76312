/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;

/// Outcome of a successful transport exchange
///
/// Holds the parsed JSON envelope together with the raw body, so callers can
/// inspect what the service actually sent.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Time spent waiting for the response
    pub elapsed: Duration,
    /// Parsed JSON envelope
    pub body: Value,
    /// Body exactly as received
    pub raw: String,
}

impl ApiResponse {
    /// Builds a `200 OK` response around an envelope, mostly useful for fake transports
    #[must_use]
    pub fn ok(body: Value) -> Self {
        let raw = body.to_string();
        Self {
            status: StatusCode::OK,
            elapsed: Duration::ZERO,
            body,
            raw,
        }
    }
}
