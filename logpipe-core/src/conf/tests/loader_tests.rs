use crate::conf::{ConfigError, load_config, parse_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

const MINIMAL: &str = r#"
server {
  listen = "127.0.0.1:8080"
}

query {
  data_dir = "data"
}
"#;

#[test]
fn minimal_config_uses_defaults() {
    let cfg = parse_config(MINIMAL).unwrap();

    assert_eq!(cfg.server.listen, "127.0.0.1:8080");
    assert_eq!(cfg.server.threads, None);
    assert!(cfg.server.tls.is_none());
    assert_eq!(cfg.query.route, "/perform_query");
    assert_eq!(cfg.query.max_body_bytes, 64 * 1024);
}

#[test]
fn full_config_parses_every_field() {
    let cfg = parse_config(
        r#"
server {
  listen  = "0.0.0.0:8443"
  threads = 4

  tls {
    cert = "certs/server.pem"
    key  = "certs/server.key"
  }
}

query {
  route          = "/logs"
  data_dir       = "/var/log/app"
  max_body_bytes = 1024
}
"#,
    )
    .unwrap();

    assert_eq!(cfg.server.threads, Some(4));
    assert_eq!(cfg.server.tls.unwrap().cert, "certs/server.pem");
    assert_eq!(cfg.query.route, "/logs");
    assert_eq!(cfg.query.max_body_bytes, 1024);
}

#[test]
fn relative_data_dir_is_resolved_against_config_location() {
    // Arrange
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(&path, MINIMAL).unwrap();

    // Act
    let cfg = load_config(&path).unwrap();

    // Assert
    assert_eq!(cfg.query.data_dir, dir.path().join("data"));
}

#[test]
fn missing_data_dir_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(&path, MINIMAL).unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "query.data_dir",
            ..
        }
    ));
}

#[test]
fn invalid_listen_address_is_rejected() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(&path, MINIMAL.replace("127.0.0.1:8080", "not-an-address")).unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "server.listen",
            ..
        }
    ));
}

#[test]
fn route_must_be_absolute() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(
        &path,
        MINIMAL.replace("data_dir = \"data\"", "data_dir = \"data\"\n  route = \"logs\""),
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "query.route",
            ..
        }
    ));
}

#[test]
fn unreadable_file_is_read_error() {
    let dir = tempdir().unwrap();

    let err = load_config(&dir.path().join("missing.hcl")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn malformed_hcl_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(&path, "server {").unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_max_body_bytes_is_rejected() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(
        &path,
        MINIMAL.replace(
            "data_dir = \"data\"",
            "data_dir = \"data\"\n  max_body_bytes = 0",
        ),
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "query.max_body_bytes",
            ..
        }
    ));
}

#[test]
fn zero_threads_is_rejected() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let path = dir.path().join("logpipe.hcl");
    fs::write(
        &path,
        MINIMAL.replace(
            "listen = \"127.0.0.1:8080\"",
            "listen = \"127.0.0.1:8080\"\n  threads = 0",
        ),
    )
    .unwrap();

    let err = load_config(&path).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "server.threads",
            ..
        }
    ));
}
