/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::constants::{
    FORM_CONTENT_TYPE, HEADER_APPLICATION, HEADER_AUTHENTICATION, SESSION_TIMEOUT_SECS,
};
use crate::model::requests::HeaderList;
use chrono::{DateTime, Duration, Utc};
use std::path::PathBuf;

/// Authentication state shared by every identity endpoint
///
/// The session is `ANONYMOUS` while `session_token` is `None` and
/// `AUTHENTICATED` otherwise. Only endpoints mutate it, and only after the
/// service reported success, so a failed call leaves it exactly as it was.
///
/// There is no internal locking: mutation takes `&mut self`, so callers
/// sharing a session across tasks must serialise access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    session_token: Option<String>,
    app_key: String,
    cert_paths: Vec<PathBuf>,
    login_time: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Creates an anonymous session
    ///
    /// # Arguments
    /// * `app_key` - Application key sent with every request
    /// * `cert_paths` - Client certificate and key paths, empty when mutual TLS is not used
    pub fn new(app_key: impl Into<String>, cert_paths: Vec<PathBuf>) -> Self {
        Self {
            session_token: None,
            app_key: app_key.into(),
            cert_paths,
            login_time: None,
        }
    }

    /// Current session token, if logged in
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Application key
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// When the token was last issued or renewed
    #[must_use]
    pub fn login_time(&self) -> Option<DateTime<Utc>> {
        self.login_time
    }

    /// Returns `true` while a session token is held
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session_token.is_some()
    }

    /// Returns `true` when there is no token or it was issued too long ago to be trusted
    #[must_use]
    pub fn session_expired(&self) -> bool {
        match self.login_time {
            Some(at) if self.session_token.is_some() => {
                Utc::now() - at > Duration::seconds(SESSION_TIMEOUT_SECS)
            }
            _ => true,
        }
    }

    /// Stores a freshly issued (or renewed) token and restarts the expiry clock
    pub fn set_session_token(&mut self, token: impl Into<String>) {
        self.session_token = Some(token.into());
        self.login_time = Some(Utc::now());
    }

    /// Restarts the expiry clock of the current token, if any
    pub fn touch(&mut self) {
        if self.session_token.is_some() {
            self.login_time = Some(Utc::now());
        }
    }

    /// Drops the token, returning the session to the anonymous state
    pub fn clear(&mut self) {
        self.session_token = None;
        self.login_time = None;
    }

    /// Client certificate paths (`.crt` then `.key`)
    #[must_use]
    pub fn cert(&self) -> &[PathBuf] {
        &self.cert_paths
    }

    /// Replaces the client certificate paths
    pub fn set_cert_paths(&mut self, cert_paths: Vec<PathBuf>) {
        self.cert_paths = cert_paths;
    }

    /// Headers for the login endpoints
    #[must_use]
    pub fn login_headers(&self) -> HeaderList {
        vec![
            ("Accept".to_string(), "application/json".to_string()),
            (HEADER_APPLICATION.to_string(), self.app_key.clone()),
            ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
        ]
    }

    /// Headers for the authenticated identity endpoints (keep alive, logout)
    ///
    /// The authentication header is omitted while anonymous; the service
    /// then rejects the call with a failure envelope.
    #[must_use]
    pub fn keep_alive_headers(&self) -> HeaderList {
        let mut headers = self.login_headers();
        if let Some(token) = &self.session_token {
            headers.push((HEADER_AUTHENTICATION.to_string(), token.clone()));
        }
        headers
    }
}
