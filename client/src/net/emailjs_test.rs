use super::*;

#[test]
fn config_from_falls_back_to_defaults() {
    let config = config_from(None, None, None, None);
    assert_eq!(config.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
    assert_eq!(config.public_key, DEFAULT_PUBLIC_KEY);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn config_from_ignores_blank_overrides() {
    let config = config_from(Some(" "), Some(""), None, Some(""));
    assert_eq!(config.service_id, DEFAULT_SERVICE_ID);
    assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn config_from_applies_overrides() {
    let config = config_from(Some("svc"), Some("tpl"), Some("key"), Some("http://localhost:9000/send/"));
    assert_eq!(config, EmailJsConfig::new("svc", "tpl", "key").with_endpoint("http://localhost:9000/send"));
}

