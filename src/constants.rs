/// User agent string used in HTTP requests to identify this client to the identity service
pub const USER_AGENT: &str = "betfair-identity-client/0.1.0";
/// Default timeout in seconds for a single identity request
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Seconds after login (or the last keep alive) after which the session is treated as expired
pub const SESSION_TIMEOUT_SECS: i64 = 12000;
/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "UK";
/// Status value reported by a successful identity envelope
pub const SUCCESS_STATUS: &str = "SUCCESS";
/// Detail attached to application errors whose envelope carries no explanation
pub const UNKNOWN_FAILURE: &str = "unknown failure";

/// Header carrying the application key
pub const HEADER_APPLICATION: &str = "X-Application";
/// Header carrying the session token
pub const HEADER_AUTHENTICATION: &str = "X-Authentication";
/// Form content type used by every identity endpoint
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
