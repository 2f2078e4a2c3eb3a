use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, api_base_url: DEFAULT_API_BASE_URL.to_owned() });
}

#[test]
fn from_lookup_reads_port_and_base_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("API_BASE_URL", "https://api.test/v1/")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.test/v1");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("API_BASE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn non_http_base_url_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_BASE_URL", "localhost:3500")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiBaseUrl("localhost:3500".to_owned()));
    assert!(err.to_string().contains("must start with http:// or https://"));
}
