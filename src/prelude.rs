/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Identity Client Prelude
//!
//! Brings the commonly used types into scope:
//!
//! ```rust
//! use betfair_identity_client::prelude::*;
//!
//! let client = ApiClient::new("username", "password", "app_key", "UK");
//! assert!(client.session_token().is_none());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the identity client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, TransportError};

// ============================================================================
// CLIENT, SESSION AND ENDPOINTS
// ============================================================================

/// Session-holding client
pub use crate::application::client::ApiClient;

/// Session state
pub use crate::session::SessionState;

/// Endpoint trait, variants and envelope classification
pub use crate::endpoints::{
    Endpoint, InteractiveLogin, KeepAlive, Login, Logout, StatusRule, classify,
};

// ============================================================================
// TRANSPORT AND MODELS
// ============================================================================

/// Transport abstraction and reqwest implementation
pub use crate::model::http::{ReqwestTransport, Transport};

/// Request, response and locale models
pub use crate::model::{
    locale::Locale,
    requests::{ApiRequest, HeaderList},
    responses::ApiResponse,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Certificate discovery
pub use crate::utils::certs::resolve_cert_paths;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::{Method, StatusCode};
pub use serde_json::{Value, json};
pub use tracing::{debug, error, info, warn};
