use std::path::PathBuf;

use dhcpd_conf_core::{extract_hosts, format_json, parse_file, HostRecord, ParseError};
use pretty_assertions::assert_eq;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn record(name: &str, addr: Option<&str>, hwaddr: Option<&str>) -> HostRecord {
    HostRecord {
        name: name.to_string(),
        address: addr.map(str::to_string),
        hardware_address: hwaddr.map(str::to_string),
    }
}

#[test]
fn extracts_hosts_from_lab_config() {
    let document = parse_file(&fixture("fixtures/dhcpd.conf")).expect("parse should succeed");
    let hosts = extract_hosts(&document);

    assert_eq!(
        hosts,
        vec![
            record("unit1", Some("10.0.0.5"), Some("AA:BB:CC:DD:EE:FF")),
            record("printer-1", Some("10.0.0.50"), Some("DE:AD:BE:EF:00:01")),
            record("printer-2", None, Some("DE:AD:BE:EF:00:02")),
            record("laptop", Some("10.0.1.7"), None),
        ]
    );
}

#[test]
fn lab_config_formats_as_json_array() {
    let document = parse_file(&fixture("fixtures/dhcpd.conf")).expect("parse should succeed");
    let json = format_json(&extract_hosts(&document)).expect("format should succeed");

    assert!(json.starts_with(r#"[{"name":"unit1","addr":"10.0.0.5","hwaddr":"AA:BB:CC:DD:EE:FF"}"#));
    assert!(json.ends_with(r#"{"name":"laptop","addr":"10.0.1.7","hwaddr":null}]"#));
}

#[test]
fn reparsing_is_deterministic() {
    let first = extract_hosts(&parse_file(&fixture("fixtures/dhcpd.conf")).expect("parse"));
    let second = extract_hosts(&parse_file(&fixture("fixtures/dhcpd.conf")).expect("parse"));
    assert_eq!(first, second);
}

#[test]
fn unbalanced_braces_fail() {
    let err = parse_file(&fixture("fixtures/unbalanced.conf")).unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedEof { .. }));
}

#[test]
fn missing_semicolon_fails_with_position() {
    let err = parse_file(&fixture("fixtures/missing-semicolon.conf")).unwrap_err();
    match err {
        ParseError::Syntax { line, column, .. } => assert_eq!((line, column), (3, 3)),
        other => panic!("unexpected error: {other:?}"),
    }
}
