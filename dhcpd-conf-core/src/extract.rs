//! Host record extraction over a parsed [`Document`].
//!
//! Any block whose header is a generic `KEY VALUE` pair becomes a record,
//! whatever the key is spelled. Blocks headed by `subnet`, `pool` or `group`
//! never become records themselves, but their bodies are still walked.
//!
//! Records are emitted depth-first with children before their parent, so a
//! host nested inside another pair-headed block is listed first.

use serde::Serialize;

use crate::parser::{parse, ParseError};
use crate::tree::{Block, Document, Line, Statement};

/// One extracted client-host declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostRecord {
    /// Value of the block header pair, e.g. `unit1` in `host unit1 { ... }`.
    pub name: String,
    /// Value of the last body statement that contains a `KEY VALUE` line.
    #[serde(rename = "addr")]
    pub address: Option<String>,
    /// First value of the last body statement that contains an
    /// `option`/`hardware` line, upper-cased.
    #[serde(rename = "hwaddr")]
    pub hardware_address: Option<String>,
}

/// Walk `document` and return its host records in traversal order.
pub fn extract_hosts(document: &Document) -> Vec<HostRecord> {
    let mut hosts = Vec::new();
    walk(&document.statements, &mut hosts);
    tracing::debug!(hosts = hosts.len(), "extracted host records");
    hosts
}

/// Parse `source` and extract its host records in one step.
pub fn extract_hosts_from_str(source: &str) -> Result<Vec<HostRecord>, ParseError> {
    let document = parse(source)?;
    Ok(extract_hosts(&document))
}

// Post-order over blocks with an explicit stack of open bodies: a block is
// finished once every statement in its body has been visited.
fn walk(statements: &[Statement], hosts: &mut Vec<HostRecord>) {
    let mut stack: Vec<(Option<&Block>, std::slice::Iter<'_, Statement>)> =
        vec![(None, statements.iter())];

    loop {
        let next = match stack.last_mut() {
            Some((_, children)) => children.next(),
            None => break,
        };
        match next {
            Some(Statement::Block(block)) => stack.push((Some(block), block.body.iter())),
            Some(Statement::Line(_)) => {}
            None => {
                if let Some((Some(block), _)) = stack.pop() {
                    finish_block(block, hosts);
                }
            }
        }
    }
}

fn finish_block(block: &Block, hosts: &mut Vec<HostRecord>) {
    match host_record(block) {
        Some(record) => {
            tracing::debug!(
                name = %record.name,
                addr = ?record.address,
                hwaddr = ?record.hardware_address,
                "host record"
            );
            hosts.push(record);
        }
        None => tracing::debug!(header = %block.header, "skipping non-host block"),
    }
}

fn host_record(block: &Block) -> Option<HostRecord> {
    let Line::Pair { value: name, .. } = &block.header else {
        return None;
    };

    let mut record = HostRecord {
        name: name.clone(),
        address: None,
        hardware_address: None,
    };

    // Every body statement is searched, so later matches overwrite earlier ones.
    for statement in &block.body {
        if let Some(address) = statement.find_first(&pair_value) {
            record.address = Some(address.to_string());
        }
        if let Some(hwaddr) = statement.find_first(&first_option_value) {
            record.hardware_address = Some(hwaddr.to_uppercase());
        }
    }

    Some(record)
}

fn pair_value(line: &Line) -> Option<&str> {
    match line {
        Line::Pair { value, .. } => Some(value),
        _ => None,
    }
}

fn first_option_value(line: &Line) -> Option<&str> {
    match line {
        Line::Option { values, .. } => values.first().map(String::as_str),
        _ => None,
    }
}
