use super::*;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var(API_URL_VAR);
    std::env::remove_var(TIMEOUT_VAR);
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert!(config.user_agent.starts_with("countries/"));
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
}

#[test]
#[serial]
fn test_resolve_defaults() {
    clear_env();
    let config = AppConfig::resolve(None, None).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.http.timeout, Some(Duration::from_secs(30)));
}

#[test]
#[serial]
fn test_resolve_env_overrides_default() {
    clear_env();
    std::env::set_var(API_URL_VAR, "http://localhost:9999/all");
    std::env::set_var(TIMEOUT_VAR, "5");

    let config = AppConfig::resolve(None, None).unwrap();
    assert_eq!(config.endpoint, "http://localhost:9999/all");
    assert_eq!(config.http.timeout, Some(Duration::from_secs(5)));

    clear_env();
}

#[test]
#[serial]
fn test_resolve_flag_overrides_env() {
    clear_env();
    std::env::set_var(API_URL_VAR, "http://from-env/all");
    std::env::set_var(TIMEOUT_VAR, "5");

    let config = AppConfig::resolve(Some("http://from-flag/all".to_string()), Some(7)).unwrap();
    assert_eq!(config.endpoint, "http://from-flag/all");
    assert_eq!(config.http.timeout, Some(Duration::from_secs(7)));

    clear_env();
}

#[test]
#[serial]
fn test_resolve_zero_timeout_disables_timeout() {
    clear_env();
    let config = AppConfig::resolve(None, Some(0)).unwrap();
    assert_eq!(config.http.timeout, None);
}

#[test]
#[serial]
fn test_resolve_invalid_env_timeout() {
    clear_env();
    std::env::set_var(TIMEOUT_VAR, "soon");

    let result = AppConfig::resolve(None, None);
    assert!(matches!(result, Err(CountriesError::InvalidConfig(_))));

    clear_env();
}
