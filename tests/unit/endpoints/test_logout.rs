use crate::common::{
    FakeTransport, LOGOUT_URL, Outcome, anonymous_session, authenticated_session, fixture,
};
use betfair_identity_client::constants::HEADER_AUTHENTICATION;
use betfair_identity_client::endpoints::{Endpoint, Logout};
use betfair_identity_client::error::AppError;
use betfair_identity_client::model::locale::Locale;
use reqwest::Method;
use serde_json::json;
use std::path::PathBuf;

fn logout() -> Logout {
    Logout::new("UK".parse::<Locale>().unwrap())
}

#[tokio::test]
async fn test_call() {
    let transport = FakeTransport::replying(fixture("logout_success"));
    let mut session = authenticated_session();

    let response = logout().call(&transport, &mut session).await.unwrap();

    assert_eq!(response, fixture("logout_success"));
    assert!(session.session_token().is_none());
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn test_request() {
    let transport = FakeTransport::replying(fixture("logout_success"));
    let mut session = authenticated_session();
    let cert = vec![PathBuf::from("certs/client.crt"), PathBuf::from("certs/client.key")];
    session.set_cert_paths(cert.clone());

    let response = logout().request(&transport, &session).await.unwrap();
    assert_eq!(response.body, fixture("logout_success"));

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::POST);
    assert_eq!(calls[0].url, LOGOUT_URL);
    assert_eq!(calls[0].headers, session.keep_alive_headers());
    assert_eq!(calls[0].header(HEADER_AUTHENTICATION), Some("SESSION_TOKEN"));
    assert_eq!(calls[0].cert, cert);
    assert!(calls[0].form.is_empty());

    // request alone never touches the session
    assert_eq!(session.session_token(), Some("SESSION_TOKEN"));
}

#[tokio::test]
async fn test_request_error() {
    let transport = FakeTransport::new(Outcome::ConnectionRefused);
    let mut session = authenticated_session();
    let before = session.clone();

    let err = logout().call(&transport, &mut session).await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(transport.calls()[0].url, LOGOUT_URL);
    assert_eq!(session, before);
}

#[tokio::test]
async fn test_request_error_random() {
    let transport = FakeTransport::new(Outcome::Unexpected);
    let session = authenticated_session();

    let err = logout().request(&transport, &session).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(transport.calls().len(), 1);
}

#[test]
fn test_logout_error_handler() {
    let endpoint = logout();
    assert!(endpoint.error_handler(&fixture("logout_success")).is_ok());

    let err = endpoint.error_handler(&fixture("logout_fail")).unwrap_err();
    assert!(matches!(err, AppError::Logout(ref detail) if detail == "NO_SESSION"));
}

#[test]
fn test_url() {
    assert_eq!(logout().url(), LOGOUT_URL);
    assert_eq!(logout().method(), Method::POST);
}

#[test]
fn test_url_ignores_session() {
    let endpoint = logout();
    let anonymous = endpoint.build_request(&anonymous_session());
    let authenticated = endpoint.build_request(&authenticated_session());
    assert_eq!(anonymous.url, authenticated.url);
    assert_eq!(anonymous.url, LOGOUT_URL);
}

#[tokio::test]
async fn test_fail_envelope_keeps_token() {
    let transport = FakeTransport::replying(fixture("logout_fail"));
    let mut session = authenticated_session();
    let before = session.clone();

    let err = logout().call(&transport, &mut session).await.unwrap_err();

    assert!(matches!(err, AppError::Logout(_)));
    assert_eq!(session, before);
    assert_eq!(session.session_token(), Some("SESSION_TOKEN"));
}

#[tokio::test]
async fn test_fail_envelope_while_anonymous() {
    let transport = FakeTransport::replying(fixture("logout_fail"));
    let mut session = anonymous_session();

    let err = logout().call(&transport, &mut session).await.unwrap_err();

    assert!(matches!(err, AppError::Logout(_)));
    assert!(session.session_token().is_none());
    assert!(transport.calls()[0].header(HEADER_AUTHENTICATION).is_none());
}

#[tokio::test]
async fn test_logout_twice_reaches_service_twice() {
    let transport = FakeTransport::replying(fixture("logout_success"));
    let mut session = authenticated_session();
    let endpoint = logout();

    endpoint.call(&transport, &mut session).await.unwrap();
    transport.set_outcome(Outcome::Reply(fixture("logout_fail")));
    let err = endpoint.call(&transport, &mut session).await.unwrap_err();

    assert!(matches!(err, AppError::Logout(_)));
    assert_eq!(transport.calls().len(), 2);
    assert!(session.session_token().is_none());
}

#[tokio::test]
async fn test_status_without_detail() {
    let transport = FakeTransport::replying(json!({"status": "FAIL"}));
    let mut session = authenticated_session();

    let err = logout().call(&transport, &mut session).await.unwrap_err();

    assert_eq!(err.detail(), Some("unknown failure"));
    assert!(session.is_authenticated());
}
