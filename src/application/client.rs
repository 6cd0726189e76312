/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Betfair identity API
//!
//! The client owns the [`SessionState`], the [`Transport`] and one instance of
//! each identity endpoint. Every call awaits a single request; the session is
//! only changed once the service has reported success.
//!
//! # Example
//! ```ignore
//! use betfair_identity_client::prelude::*;
//!
//! let mut client = ApiClient::new("username", "password", "app_key", "UK");
//! client.login_interactive().await?;
//! client.keep_alive().await?;
//! client.logout().await?;
//! assert!(client.session_token().is_none());
//! ```

use crate::application::config::Config;
use crate::endpoints::{Endpoint, InteractiveLogin, KeepAlive, Login, Logout};
use crate::error::AppError;
use crate::model::http::{ReqwestTransport, Transport};
use crate::model::locale::Locale;
use crate::session::SessionState;
use crate::utils::certs::resolve_cert_paths;
use serde_json::Value;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Session-holding client for the identity endpoints
pub struct ApiClient {
    username: String,
    locale: Locale,
    session: SessionState,
    transport: Box<dyn Transport>,
    login: Login,
    interactive_login: InteractiveLogin,
    keep_alive: KeepAlive,
    logout: Logout,
}

impl ApiClient {
    /// Creates an anonymous client using the reqwest transport and no client certificate
    ///
    /// # Arguments
    /// * `username` - Betfair account username
    /// * `password` - Betfair account password
    /// * `app_key` - Application key
    /// * `locale` - Jurisdiction name; unknown names use the global host
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        app_key: impl Into<String>,
        locale: &str,
    ) -> Self {
        let username = username.into();
        let password = password.into();
        let locale: Locale = locale.parse().unwrap_or_default();

        debug!("Creating client for {} ({})", username, locale);

        Self {
            login: Login::new(locale, username.clone(), password.clone()),
            interactive_login: InteractiveLogin::new(locale, username.clone(), password),
            keep_alive: KeepAlive::new(locale),
            logout: Logout::new(locale),
            session: SessionState::new(app_key, Vec::new()),
            transport: Box::new(ReqwestTransport::default()),
            username,
            locale,
        }
    }

    /// Creates a client from configuration
    ///
    /// When `certs` is configured the certificate pair is resolved up front.
    ///
    /// # Returns
    /// * `Ok(ApiClient)` - Anonymous client
    /// * `Err(AppError::Config)` - If the certificate directory holds no `.crt`/`.key` pair
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = Self::new(
            config.credentials.username.clone(),
            config.credentials.password.clone(),
            config.credentials.app_key.clone(),
            &config.locale,
        )
        .with_transport(ReqwestTransport::new(config.timeout()));

        match &config.certs {
            Some(dir) => Ok(client.with_certs(resolve_cert_paths(dir)?)),
            None => {
                warn!("No certificate directory configured, certificate login will fail");
                Ok(client)
            }
        }
    }

    /// Replaces the transport
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Sets the client certificate and key paths
    #[must_use]
    pub fn with_certs(mut self, cert_paths: Vec<PathBuf>) -> Self {
        self.session.set_cert_paths(cert_paths);
        self
    }

    /// Logs in with the client certificate, storing the issued session token
    pub async fn login(&mut self) -> Result<Value, AppError> {
        info!("Logging in as {}", self.username);
        self.login
            .call(self.transport.as_ref(), &mut self.session)
            .await
    }

    /// Logs in without a client certificate, storing the issued session token
    pub async fn login_interactive(&mut self) -> Result<Value, AppError> {
        info!("Logging in interactively as {}", self.username);
        self.interactive_login
            .call(self.transport.as_ref(), &mut self.session)
            .await
    }

    /// Extends the current session
    pub async fn keep_alive(&mut self) -> Result<Value, AppError> {
        self.keep_alive
            .call(self.transport.as_ref(), &mut self.session)
            .await
    }

    /// Invalidates the current session remotely and clears it locally
    ///
    /// Calling this while anonymous still reaches the service, which answers
    /// with a failure envelope surfaced as [`AppError::Logout`].
    pub async fn logout(&mut self) -> Result<Value, AppError> {
        info!("Logging out");
        self.logout
            .call(self.transport.as_ref(), &mut self.session)
            .await
    }

    /// Current session state
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Current session token, if logged in
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session.session_token()
    }

    /// Returns `true` when a fresh login (or keep alive) is due
    #[must_use]
    pub fn session_expired(&self) -> bool {
        self.session.session_expired()
    }

    /// Locale the endpoints were built for
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Certificate login endpoint
    #[must_use]
    pub fn login_endpoint(&self) -> &Login {
        &self.login
    }

    /// Interactive login endpoint
    #[must_use]
    pub fn interactive_login_endpoint(&self) -> &InteractiveLogin {
        &self.interactive_login
    }

    /// Keep alive endpoint
    #[must_use]
    pub fn keep_alive_endpoint(&self) -> &KeepAlive {
        &self.keep_alive
    }

    /// Logout endpoint
    #[must_use]
    pub fn logout_endpoint(&self) -> &Logout {
        &self.logout
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        let config = Config::default();
        let timeout = config.timeout();
        Self::new(
            config.credentials.username,
            config.credentials.password,
            config.credentials.app_key,
            &config.locale,
        )
        .with_transport(ReqwestTransport::new(timeout))
    }
}
