use std::path::Path;

use anyhow::{Context, Result};
use dhcpd_conf_core::{extract_hosts, format_json, parse_file};

/// Parse `path` and render its host records as a JSON array.
///
/// Nothing is returned unless the whole file parses.
pub fn extract_json(path: &Path) -> Result<String> {
    let document =
        parse_file(path).with_context(|| format!("failed to parse {}", path.display()))?;
    let hosts = extract_hosts(&document);
    tracing::info!(path = %path.display(), hosts = hosts.len(), "extracted host records");
    format_json(&hosts).context("failed to serialize host records")
}
