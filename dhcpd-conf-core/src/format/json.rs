use crate::extract::HostRecord;

/// Format host records as a single-line JSON array.
pub fn format_json(hosts: &[HostRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(hosts)
}

#[cfg(test)]
mod tests {
    use super::format_json;
    use crate::extract::HostRecord;

    #[test]
    fn empty_input_is_an_empty_array() {
        assert_eq!(format_json(&[]).expect("format"), "[]");
    }

    #[test]
    fn keeps_record_order() {
        let hosts = vec![
            HostRecord {
                name: "b".to_string(),
                address: None,
                hardware_address: Some("AA:BB:CC:DD:EE:FF".to_string()),
            },
            HostRecord {
                name: "a".to_string(),
                address: Some("10.0.0.1".to_string()),
                hardware_address: None,
            },
        ];
        assert_eq!(
            format_json(&hosts).expect("format"),
            r#"[{"name":"b","addr":null,"hwaddr":"AA:BB:CC:DD:EE:FF"},{"name":"a","addr":"10.0.0.1","hwaddr":null}]"#
        );
    }
}
