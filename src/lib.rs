//! # Betfair Identity Client
//!
//! Session management for the Betfair betting-exchange API: certificate and
//! interactive login, keep alive and logout against the identity service.
//!
//! ## Layout
//!
//! - [`session`] holds the session token, application key and certificate paths
//! - [`model::http`] defines the [`Transport`](model::http::Transport) seam and its reqwest implementation
//! - [`endpoints`] has one [`Endpoint`](endpoints::Endpoint) per remote operation
//! - [`application::client`] ties them together behind [`ApiClient`](application::client::ApiClient)
//!
//! ## Errors
//!
//! Transport failures always surface as [`AppError::Api`](error::AppError::Api).
//! A service answer whose envelope does not report success surfaces as the
//! endpoint's own variant (`Login`, `KeepAlive`, `Logout`) and leaves the
//! session untouched.

/// Client and configuration
pub mod application;
/// Global constants
pub mod constants;
/// Identity endpoints and envelope classification
pub mod endpoints;
/// Error types
pub mod error;
/// Transport, request and response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Session state
pub mod session;
/// Helpers for configuration, logging and certificates
pub mod utils;

/// Shortcut to [`application::config`]
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
