/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Envelope classification
//!
//! The identity service answers `200 OK` for rejected calls too, so the
//! envelope status must be checked on every response.

use crate::constants::{SUCCESS_STATUS, UNKNOWN_FAILURE};
use crate::error::AppError;
use serde_json::Value;

/// Where an endpoint family reports its outcome inside the envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRule {
    /// Field holding the outcome
    pub status_field: &'static str,
    /// Value of `status_field` meaning success
    pub success: &'static str,
    /// Fields tried in order for the failure detail
    pub detail_fields: &'static [&'static str],
}

impl StatusRule {
    /// `{"status": "SUCCESS" | "FAIL", "error": ...}` envelopes
    pub const STATUS: StatusRule = StatusRule {
        status_field: "status",
        success: SUCCESS_STATUS,
        detail_fields: &["error", "message"],
    };

    /// `{"loginStatus": "SUCCESS" | <reason code>}` envelopes of certificate login
    pub const LOGIN_STATUS: StatusRule = StatusRule {
        status_field: "loginStatus",
        success: SUCCESS_STATUS,
        detail_fields: &["error", "message", "loginStatus"],
    };
}

/// Checks an envelope against `rule`
///
/// # Arguments
/// * `body` - Parsed response envelope
/// * `rule` - Status location for the endpoint family
/// * `make_error` - Endpoint-specific error constructor
///
/// # Returns
/// * `Ok(())` - The envelope reports success
/// * `Err(make_error(detail))` - Anything else; `detail` is the first non-empty
///   detail field or `"unknown failure"`
pub fn classify(
    body: &Value,
    rule: &StatusRule,
    make_error: fn(String) -> AppError,
) -> Result<(), AppError> {
    if body.get(rule.status_field).and_then(Value::as_str) == Some(rule.success) {
        return Ok(());
    }

    let detail = rule
        .detail_fields
        .iter()
        .filter_map(|field| body.get(*field).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .unwrap_or(UNKNOWN_FAILURE);

    Err(make_error(detail.to_string()))
}
