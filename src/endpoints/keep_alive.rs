use crate::endpoints::{Endpoint, StatusRule, classify};
use crate::error::AppError;
use crate::model::locale::Locale;
use crate::model::requests::HeaderList;
use crate::session::SessionState;
use serde_json::Value;
use tracing::debug;

/// Extends the lifetime of the current session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAlive {
    url: String,
}

impl KeepAlive {
    /// Creates the endpoint for the identity host of `locale`
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            url: format!("{}keepAlive", locale.identity_uri()),
        }
    }
}

impl Endpoint for KeepAlive {
    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self, session: &SessionState) -> HeaderList {
        session.keep_alive_headers()
    }

    fn error_handler(&self, body: &Value) -> Result<(), AppError> {
        classify(body, &StatusRule::STATUS, AppError::KeepAlive)
    }

    fn apply(&self, body: &Value, session: &mut SessionState) -> Result<(), AppError> {
        // the service may hand back the same token or none at all
        match body.get("token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => session.set_session_token(token),
            _ => session.touch(),
        }
        debug!("Session kept alive");
        Ok(())
    }
}
