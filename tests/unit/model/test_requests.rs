use betfair_identity_client::model::requests::ApiRequest;
use betfair_identity_client::model::responses::ApiResponse;
use reqwest::{Method, StatusCode};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn test_api_request_builder() {
    let request = ApiRequest::new(
        Method::POST,
        "https://identitysso.betfair.com/api/logout",
        vec![("X-Application".to_string(), "app_key".to_string())],
    )
    .with_form(vec![("username".to_string(), "user".to_string())])
    .with_cert(&[PathBuf::from("c.crt"), PathBuf::from("c.key")]);

    assert_eq!(request.form.len(), 1);
    assert_eq!(request.cert.len(), 2);
    assert_eq!(request.header("x-application"), Some("app_key"));
    assert_eq!(request.header("X-Authentication"), None);
}

#[test]
fn test_api_response_ok() {
    let response = ApiResponse::ok(json!({"status": "SUCCESS"}));
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.raw, r#"{"status":"SUCCESS"}"#);
}
