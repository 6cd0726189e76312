use crate::endpoints::{Endpoint, StatusRule, classify};
use crate::error::AppError;
use crate::model::locale::Locale;
use crate::model::requests::HeaderList;
use crate::session::SessionState;
use serde_json::Value;
use tracing::info;

/// Invalidates the session token remotely, then locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logout {
    url: String,
}

impl Logout {
    /// Creates the endpoint for the identity host of `locale`
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            url: format!("{}logout", locale.identity_uri()),
        }
    }
}

impl Endpoint for Logout {
    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self, session: &SessionState) -> HeaderList {
        session.keep_alive_headers()
    }

    fn error_handler(&self, body: &Value) -> Result<(), AppError> {
        classify(body, &StatusRule::STATUS, AppError::Logout)
    }

    fn apply(&self, _body: &Value, session: &mut SessionState) -> Result<(), AppError> {
        session.clear();
        info!("✓ Logged out successfully");
        Ok(())
    }
}
