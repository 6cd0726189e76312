use betfair_identity_client::config::Config;
use betfair_identity_client::model::locale::Locale;
use betfair_identity_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;
use std::time::Duration;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BF_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("BF_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("BF_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("BF_MISSING_VAR");
        let result: String = get_env_or_default("BF_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_integer() {
    unsafe {
        env::set_var("BF_TEST_VAR_INT", "42");
        let result: u64 = get_env_or_default("BF_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("BF_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("BF_TEST_VAR_PADDED", "  17\n");
        let result: u64 = get_env_or_default("BF_TEST_VAR_PADDED", 0);
        assert_eq!(result, 17);
        env::remove_var("BF_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BF_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("BF_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("BF_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_default_with_bool() {
    unsafe {
        env::set_var("BF_TEST_VAR_BOOL", "true");
        let result: bool = get_env_or_default("BF_TEST_VAR_BOOL", false);
        assert!(result);
        env::remove_var("BF_TEST_VAR_BOOL");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("BF_TEST_VAR_OPTION", "123");
        let result: Option<u32> = get_env_or_none("BF_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("BF_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("BF_MISSING_OPTION");
        let result: Option<String> = get_env_or_none("BF_MISSING_OPTION");
        assert_eq!(result, None);
    }
}

#[test]
fn test_get_env_or_none_with_blank_var() {
    unsafe {
        env::set_var("BF_TEST_VAR_BLANK", "   ");
        let result: Option<String> = get_env_or_none("BF_TEST_VAR_BLANK");
        assert_eq!(result, None);
        env::remove_var("BF_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_none_with_invalid_parse() {
    unsafe {
        env::set_var("BF_TEST_VAR_OPTION_INVALID", "abc");
        let result: Option<u32> = get_env_or_none("BF_TEST_VAR_OPTION_INVALID");
        assert_eq!(result, None);
        env::remove_var("BF_TEST_VAR_OPTION_INVALID");
    }
}

#[test]
fn test_config_new_reads_betfair_vars() {
    unsafe {
        env::set_var("BETFAIR_USERNAME", "env_user");
        env::set_var("BETFAIR_APP_KEY", "env_app_key");
        env::set_var("BETFAIR_LOCALE", "italy");
        env::set_var("BETFAIR_TIMEOUT", " 45 ");
        env::set_var("BETFAIR_CERTS", "  ");

        let config = Config::new();
        assert_eq!(config.credentials.username, "env_user");
        assert_eq!(config.credentials.app_key, "env_app_key");
        assert_eq!(config.locale(), Locale::Italy);
        assert_eq!(config.timeout(), Duration::from_secs(45));
        assert_eq!(config.certs, None);

        env::set_var("BETFAIR_TIMEOUT", "soon");
        env::set_var("BETFAIR_CERTS", "/etc/betfair/certs");
        let config = Config::new();
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.certs.as_deref(), Some("/etc/betfair/certs"));

        env::remove_var("BETFAIR_USERNAME");
        env::remove_var("BETFAIR_APP_KEY");
        env::remove_var("BETFAIR_LOCALE");
        env::remove_var("BETFAIR_TIMEOUT");
        env::remove_var("BETFAIR_CERTS");
    }
}
