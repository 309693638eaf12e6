use std::io::Write;
use std::path::Path;

use groupconf::{load_config, parse_str, ConfigError, Value};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SAMPLE: &str = "\
; sample application config
[server]
host = localhost
port = 8080
flags = a, b

[ftp]
path = /tmp/ ; scratch dir
enabled = no
name = \"hello there, ftp uploading\"
";

#[test]
fn test_load_wellformed_file() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &[]).unwrap();

    assert_eq!(config.len(), 2);
    assert_eq!(
        config.get("server", "host"),
        Some(&Value::Str("localhost".to_string()))
    );
    assert_eq!(config.get("server", "port"), Some(&Value::Int(8080)));
    assert_eq!(
        config.get("server", "flags"),
        Some(&Value::List(vec![
            Value::Str("a".to_string()),
            Value::Str("b".to_string()),
        ]))
    );

    // Inline comment trimmed, boolean token coerced, quoted commas kept.
    assert_eq!(
        config.get("ftp", "path"),
        Some(&Value::Str("/tmp/".to_string()))
    );
    assert_eq!(config.get("ftp", "enabled"), Some(&Value::Bool(false)));
    assert_eq!(
        config.get("ftp", "name"),
        Some(&Value::Str("hello there, ftp uploading".to_string()))
    );
}

#[test]
fn test_absent_lookups_are_not_errors() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &[]).unwrap();

    assert!(config.get("server", "missing").is_none());
    assert!(config.group("missing_group").is_none());
    assert!(config.get("missing_group", "anything").is_none());
}

#[test]
fn test_typed_accessors() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &[]).unwrap();

    let port = config.get("server", "port").and_then(Value::as_int);
    assert_eq!(port, Some(8080));
    let enabled = config.get("ftp", "enabled").and_then(Value::as_bool);
    assert_eq!(enabled, Some(false));
    // Wrong-type access is also just None.
    assert_eq!(config.get("server", "port").and_then(Value::as_str), None);
}

#[test]
fn test_override_replaces_only_target_key() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &["server.port=9090"]).unwrap();

    assert_eq!(config.get("server", "port"), Some(&Value::Int(9090)));
    assert_eq!(
        config.get("server", "host"),
        Some(&Value::Str("localhost".to_string()))
    );
    assert_eq!(
        config.get("server", "flags"),
        Some(&Value::List(vec![
            Value::Str("a".to_string()),
            Value::Str("b".to_string()),
        ]))
    );
}

#[test]
fn test_overrides_apply_in_order_last_wins() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &["server.port=1", "server.port=2"]).unwrap();
    assert_eq!(config.get("server", "port"), Some(&Value::Int(2)));
}

#[test]
fn test_override_creates_group() {
    let file = write_config(SAMPLE);
    let config = load_config(file.path(), &["extras.debug=true"]).unwrap();
    assert_eq!(config.get("extras", "debug"), Some(&Value::Bool(true)));
}

#[test]
fn test_malformed_override_fails_with_position() {
    let file = write_config(SAMPLE);
    let err = load_config(file.path(), &["server.port=9090", "garbage"]).unwrap_err();
    match err {
        ConfigError::InvalidOverride { index, directive } => {
            assert_eq!(index, 2);
            assert_eq!(directive, "garbage");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_duplicate_group_fails_with_second_line() {
    let file = write_config("[a]\nx = 1\n\n[b]\ny = 2\n[a]\n");
    let err = load_config(file.path(), &[]).unwrap_err();
    match err {
        ConfigError::DuplicateGroup { name, line } => {
            assert_eq!(name, "a");
            assert_eq!(line, 6);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_setting_before_group_fails() {
    let file = write_config("; comment\n\nx = 1\n[a]\n");
    let err = load_config(file.path(), &[]).unwrap_err();
    match err {
        ConfigError::MissingGroup { line } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_garbage_line_fails() {
    let file = write_config("[a]\nnot a valid line at all\n");
    let err = load_config(file.path(), &[]).unwrap_err();
    match err {
        ConfigError::InvalidLine { line, text } => {
            assert_eq!(line, 2);
            assert_eq!(text, "not a valid line at all");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_config(Path::new("/no/such/config/file.conf"), &[]).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_reparse_is_structurally_equal() {
    let first = parse_str(SAMPLE, &[]).unwrap();
    let second = parse_str(SAMPLE, &[]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_json_dump_preserves_types() {
    let config = parse_str(SAMPLE, &[]).unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["server"]["port"], serde_json::json!(8080));
    assert_eq!(json["ftp"]["enabled"], serde_json::json!(false));
    assert_eq!(json["server"]["flags"], serde_json::json!(["a", "b"]));
}
