/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_LOCALE, DEFAULT_TIMEOUT_SECS};
use crate::model::locale::Locale;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the Betfair identity service
pub struct Credentials {
    /// Betfair account username
    pub username: String,
    /// Betfair account password
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Application key sent in the `X-Application` header
    pub app_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST transport
pub struct RestApiConfig {
    /// Timeout in seconds for a single request
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the identity client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Jurisdiction name, e.g. `UK`, `italy`, `australia`
    pub locale: String,
    /// Directory holding the client `.crt`/`.key` pair, if certificate login is used
    pub certs: Option<String>,
    /// REST transport configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. Recognised variables:
    /// `BETFAIR_USERNAME`, `BETFAIR_PASSWORD`, `BETFAIR_APP_KEY`,
    /// `BETFAIR_LOCALE`, `BETFAIR_CERTS` and `BETFAIR_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("BETFAIR_USERNAME", String::from("default_username"));
        let password = get_env_or_default("BETFAIR_PASSWORD", String::from("default_password"));
        let app_key = get_env_or_default("BETFAIR_APP_KEY", String::from("default_app_key"));

        if username == "default_username" {
            error!("BETFAIR_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("BETFAIR_PASSWORD not found in environment variables or .env file");
        }
        if app_key == "default_app_key" {
            error!("BETFAIR_APP_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                app_key,
            },
            locale: get_env_or_default("BETFAIR_LOCALE", String::from(DEFAULT_LOCALE)),
            certs: get_env_or_none("BETFAIR_CERTS"),
            rest_api: RestApiConfig {
                timeout: get_env_or_default("BETFAIR_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Parsed locale
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale.parse().unwrap_or_default()
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }
}
