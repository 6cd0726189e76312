/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Identity endpoints
//!
//! Every remote operation is an [`Endpoint`]: an immutable descriptor (URL and
//! HTTP method) plus the behaviour to build its request, classify the
//! envelope and apply its effect to the [`SessionState`]. The shared flow
//! lives in the provided [`Endpoint::request`] and [`Endpoint::call`] methods:
//!
//! 1. build URL, headers, form and certificate from the session
//! 2. hand the request to the [`Transport`]
//! 3. classify the envelope, leaving the session untouched on failure
//! 4. apply the endpoint effect and return the envelope

use crate::error::AppError;
use crate::model::http::Transport;
use crate::model::requests::{ApiRequest, HeaderList};
use crate::model::responses::ApiResponse;
use crate::session::SessionState;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use std::path::PathBuf;

/// Envelope classification shared by the endpoint families
pub mod classify;
/// Session renewal
pub mod keep_alive;
/// Certificate and interactive login
pub mod login;
/// Session invalidation
pub mod logout;

pub use classify::{StatusRule, classify};
pub use keep_alive::KeepAlive;
pub use login::{InteractiveLogin, Login};
pub use logout::Logout;

/// A remote identity operation
#[async_trait]
pub trait Endpoint: Send + Sync {
    /// Fixed URL of the operation
    fn url(&self) -> &str;

    /// HTTP method of the operation
    fn method(&self) -> Method {
        Method::POST
    }

    /// Request headers derived from the session
    fn headers(&self, session: &SessionState) -> HeaderList;

    /// Url-encoded form fields, empty when the operation sends no body
    fn form(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Client certificate paths sent with the request
    fn cert<'a>(&self, session: &'a SessionState) -> &'a [PathBuf] {
        session.cert()
    }

    /// Checks the envelope, returning the endpoint-specific error on failure
    fn error_handler(&self, body: &Value) -> Result<(), AppError>;

    /// Commits the effect of a successful call
    ///
    /// Implementations must either fully update `session` or leave it
    /// untouched and return an error.
    fn apply(&self, body: &Value, session: &mut SessionState) -> Result<(), AppError>;

    /// Builds the request for the current session
    fn build_request(&self, session: &SessionState) -> ApiRequest {
        ApiRequest::new(self.method(), self.url(), self.headers(session))
            .with_form(self.form())
            .with_cert(self.cert(session))
    }

    /// Sends the request without classifying the response
    ///
    /// # Returns
    /// * `Ok(ApiResponse)` - Whatever envelope the service answered with
    /// * `Err(AppError::Api)` - Transport failure
    async fn request(
        &self,
        transport: &dyn Transport,
        session: &SessionState,
    ) -> Result<ApiResponse, AppError> {
        let request = self.build_request(session);
        transport.execute(&request).await
    }

    /// Performs the operation end to end
    ///
    /// # Returns
    /// * `Ok(Value)` - The success envelope; `session` has been updated
    /// * `Err(AppError)` - Transport or application failure; `session` is unchanged
    async fn call(
        &self,
        transport: &dyn Transport,
        session: &mut SessionState,
    ) -> Result<Value, AppError> {
        let response = self.request(transport, session).await?;
        self.error_handler(&response.body)?;
        self.apply(&response.body, session)?;
        Ok(response.body)
    }
}
