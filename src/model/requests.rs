/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::Method;
use std::path::PathBuf;

/// Ordered list of `(name, value)` request headers
pub type HeaderList = Vec<(String, String)>;

/// A fully built request, ready to be handed to a transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderList,
    /// Form fields, sent url-encoded when non-empty
    pub form: Vec<(String, String)>,
    /// Client certificate and key paths, empty when mutual TLS is not used
    pub cert: Vec<PathBuf>,
}

impl ApiRequest {
    /// Creates a request without body or certificate
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderList) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            form: Vec::new(),
            cert: Vec::new(),
        }
    }

    /// Attaches url-encoded form fields
    #[must_use]
    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = form;
        self
    }

    /// Attaches the client certificate paths
    #[must_use]
    pub fn with_cert(mut self, cert: &[PathBuf]) -> Self {
        self.cert = cert.to_vec();
        self
    }

    /// Looks a header up by name, ignoring case
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
