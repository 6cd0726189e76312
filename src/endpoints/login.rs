use crate::endpoints::{Endpoint, StatusRule, classify};
use crate::error::AppError;
use crate::model::locale::Locale;
use crate::model::requests::HeaderList;
use crate::session::SessionState;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use tracing::{error, info};

fn credentials_form(username: &str, password: &str) -> Vec<(String, String)> {
    vec![
        ("username".to_string(), username.to_string()),
        ("password".to_string(), password.to_string()),
    ]
}

fn store_token(body: &Value, field: &str, session: &mut SessionState) -> Result<(), AppError> {
    match body.get(field).and_then(Value::as_str) {
        Some(token) if !token.is_empty() => {
            session.set_session_token(token);
            info!("✓ Login successful");
            Ok(())
        }
        _ => {
            error!("Login envelope reported success without a {}", field);
            Err(AppError::Login(format!("missing {field}")))
        }
    }
}

/// Non-interactive login authenticated by the client certificate
#[derive(Clone, PartialEq, Eq)]
pub struct Login {
    url: String,
    username: String,
    password: String,
}

impl Login {
    /// Creates the endpoint for the certificate identity host of `locale`
    pub fn new(locale: Locale, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: format!("{}certlogin", locale.identity_cert_uri()),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Login")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Endpoint for Login {
    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self, session: &SessionState) -> HeaderList {
        session.login_headers()
    }

    fn form(&self) -> Vec<(String, String)> {
        credentials_form(&self.username, &self.password)
    }

    fn error_handler(&self, body: &Value) -> Result<(), AppError> {
        classify(body, &StatusRule::LOGIN_STATUS, AppError::Login)
    }

    fn apply(&self, body: &Value, session: &mut SessionState) -> Result<(), AppError> {
        store_token(body, "sessionToken", session)
    }
}

/// Username/password login without a client certificate
#[derive(Clone, PartialEq, Eq)]
pub struct InteractiveLogin {
    url: String,
    username: String,
    password: String,
}

impl InteractiveLogin {
    /// Creates the endpoint for the identity host of `locale`
    pub fn new(locale: Locale, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            url: format!("{}login", locale.identity_uri()),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for InteractiveLogin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractiveLogin")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Endpoint for InteractiveLogin {
    fn url(&self) -> &str {
        &self.url
    }

    fn headers(&self, session: &SessionState) -> HeaderList {
        session.login_headers()
    }

    fn form(&self) -> Vec<(String, String)> {
        credentials_form(&self.username, &self.password)
    }

    fn cert<'a>(&self, _session: &'a SessionState) -> &'a [PathBuf] {
        &[]
    }

    fn error_handler(&self, body: &Value) -> Result<(), AppError> {
        classify(body, &StatusRule::STATUS, AppError::Login)
    }

    fn apply(&self, body: &Value, session: &mut SessionState) -> Result<(), AppError> {
        store_token(body, "token", session)
    }
}
