#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use netatmo_gateway::config;

const FULL: &str = r#"
client_id: "abc"
client_secret: "s3cr3t"
username: "me@example.org"
password: "hunter2"
http_port: 8080
http_addr: "127.0.0.1"
"#;

#[test]
fn ok_all_six_fields() {
    let cfg = config::load_from_str(FULL).expect("must parse");
    assert_eq!(cfg.client_id, "abc");
    assert_eq!(cfg.client_secret, "s3cr3t");
    assert_eq!(cfg.username, "me@example.org");
    assert_eq!(cfg.password, "hunter2");
    assert_eq!(cfg.http_port, 8080);
    assert_eq!(cfg.http_addr, "127.0.0.1");
    assert_eq!(cfg.bind_host(), "127.0.0.1");
    assert_eq!(cfg.api_base_url, "https://api.netatmo.com");
    assert_eq!(cfg.upstream_timeout(), Duration::from_secs(10));
}

#[test]
fn missing_credential_fails() {
    let bad = r#"
client_id: "abc"
client_secret: "s3cr3t"
username: "me@example.org"
http_port: 8080
http_addr: ""
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn empty_credential_fails() {
    let bad = FULL.replace("\"hunter2\"", "\"\"");
    let err = config::load_from_str(&bad).expect_err("must fail");
    assert!(err.to_string().contains("password"));
}

#[test]
fn deny_unknown_fields() {
    let bad = format!("{FULL}http_prot: 9000 # typo should fail\n");
    let err = config::load_from_str(&bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn port_zero_and_out_of_range_fail() {
    let zero = FULL.replace("8080", "0");
    assert!(config::load_from_str(&zero).is_err());
    let big = FULL.replace("8080", "70000");
    assert!(config::load_from_str(&big).is_err());
}

#[test]
fn empty_addr_binds_all_interfaces() {
    let cfg = config::load_from_str(&FULL.replace("\"127.0.0.1\"", "\"\"")).unwrap();
    assert_eq!(cfg.bind_host(), "0.0.0.0");
}

#[test]
fn optional_upstream_settings() {
    let yaml = format!("{FULL}api_base_url: \"http://127.0.0.1:9999\"\nupstream_timeout_secs: 3\n");
    let cfg = config::load_from_str(&yaml).unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:9999");
    assert_eq!(cfg.upstream_timeout(), Duration::from_secs(3));

    let bad = format!("{FULL}upstream_timeout_secs: 0\n");
    assert!(config::load_from_str(&bad).is_err());
    let bad = format!("{FULL}api_base_url: \"ftp://example.org\"\n");
    assert!(config::load_from_str(&bad).is_err());
}

#[test]
fn debug_redacts_secrets() {
    let cfg = config::load_from_str(FULL).unwrap();
    let dbg = format!("{cfg:?} {:?}", cfg.credentials());
    assert!(!dbg.contains("hunter2"));
    assert!(!dbg.contains("s3cr3t"));
    assert!(dbg.contains("me@example.org"));
}

#[test]
fn unreadable_file_fails() {
    let err = config::load_from_file("/nonexistent/netatmo/config.yml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn malformed_yaml_fails() {
    let err = config::load_from_str("client_id: [unterminated").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}
