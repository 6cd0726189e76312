/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Transport layer for the identity endpoints
//!
//! A [`Transport`] performs exactly one request and hands back the parsed
//! envelope. Whatever goes wrong on the way (unreadable certificate, TLS
//! handshake, connection refused, timeout, non-success status, body that is
//! not JSON) comes back as [`AppError::Api`] with the underlying failure kept as
//! its source. Retries are not attempted here.

use crate::constants::{DEFAULT_TIMEOUT_SECS, USER_AGENT};
use crate::error::{AppError, TransportError};
use crate::model::requests::ApiRequest;
use crate::model::responses::ApiResponse;
use async_trait::async_trait;
use reqwest::{Client, Identity};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, error, trace};

/// Executes a single request against the identity service
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` once and returns the parsed JSON envelope
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - 2xx response whose body is a JSON object
    /// * `Err(AppError::Api)` - Any failure while sending or decoding
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, AppError>;
}

/// [`Transport`] backed by `reqwest`
///
/// A fresh HTTP client is built for every call so the client certificate of
/// that call is honoured and its sockets are released when the call returns.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport with the given per-request timeout
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn build_client(&self, cert: &[PathBuf]) -> Result<Client, TransportError> {
        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout);

        if !cert.is_empty() {
            builder = builder.identity(load_identity(cert)?);
        }

        builder.build().map_err(TransportError::Http)
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

/// Loads a PEM certificate and its private key as a TLS identity
///
/// The key may be PKCS#1 (`BEGIN RSA PRIVATE KEY`), PKCS#8 or SEC1.
fn load_identity(cert: &[PathBuf]) -> Result<Identity, TransportError> {
    let [cert_path, key_path] = cert else {
        return Err(TransportError::Other(format!(
            "expected certificate and key paths, got {} path(s)",
            cert.len()
        )));
    };

    let cert_pem = fs::read(cert_path).map_err(TransportError::Io)?;
    let key_pem = fs::read(key_path).map_err(TransportError::Io)?;

    let mut pem = cert_pem;
    if !pem.ends_with(b"\n") {
        pem.push(b'\n');
    }
    pem.extend_from_slice(&key_pem);

    Identity::from_pem(&pem).map_err(TransportError::Http)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, AppError> {
        let client = self.build_client(&request.cert).inspect_err(|e| {
            error!("Failed to build HTTP client for {}: {}", request.url, e);
        })?;

        debug!("{} {}", request.method, request.url);

        let mut builder = client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            error!("Request to {} failed: {}", request.url, e);
            TransportError::Http(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);
        trace!("Response headers: {:#?}", response.headers());

        let raw = response.text().await.map_err(TransportError::Http)?;
        let elapsed = started.elapsed();

        if !status.is_success() {
            error!("Request failed with status {}: {}", status, raw);
            return Err(TransportError::Status(status).into());
        }

        let body: Value = serde_json::from_str(&raw).map_err(|e| {
            error!("Response from {} is not JSON: {}", request.url, e);
            TransportError::Decode(e)
        })?;
        if !body.is_object() {
            return Err(
                TransportError::Other("response body is not a json object".to_string()).into(),
            );
        }

        Ok(ApiResponse {
            status,
            elapsed,
            body,
            raw,
        })
    }
}
