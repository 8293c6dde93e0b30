use super::*;

fn default_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn resolve_addr_keeps_default_without_overrides() {
    assert_eq!(resolve_addr(None, None, default_addr()).unwrap(), default_addr());
}

#[test]
fn resolve_addr_treats_blank_values_as_unset() {
    assert_eq!(resolve_addr(Some("  "), Some(""), default_addr()).unwrap(), default_addr());
}

#[test]
fn resolve_addr_applies_port_override() {
    let addr = resolve_addr(None, Some("8080"), default_addr()).unwrap();
    assert_eq!(addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_applies_host_override() {
    let addr = resolve_addr(Some("0.0.0.0"), Some(" 3100 "), default_addr()).unwrap();
    assert_eq!(addr, "0.0.0.0:3100".parse::<SocketAddr>().unwrap());
}

#[test]
fn resolve_addr_rejects_bad_port() {
    let err = resolve_addr(None, Some("http"), default_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
    assert_eq!(err.to_string(), "invalid PORT: http");

    let err = resolve_addr(None, Some("70000"), default_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn resolve_addr_rejects_bad_host() {
    let err = resolve_addr(Some("localhost:3000"), None, default_addr()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHost(_)));
}
