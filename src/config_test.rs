use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, api_url: String::new(), site_root: None });
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("DOCDESK_API_URL", "https://docs.example.test/"),
        ("DOCDESK_SITE_ROOT", "/srv/site"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://docs.example.test");
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/site")));
}

#[test]
fn from_lookup_blank_values_fall_back() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", " "), ("DOCDESK_API_URL", ""), ("DOCDESK_SITE_ROOT", "  ")]))
        .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.api_url.is_empty());
    assert!(cfg.site_root.is_none());
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort { value: "70000".into() });
}

#[test]
fn from_lookup_rejects_api_url_without_scheme() {
    let err = HostConfig::from_lookup(lookup(&[("DOCDESK_API_URL", "docs.example.test")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidApiUrl { value: "docs.example.test".into() });
}
