//! Parsing and host extraction for ISC dhcpd configuration files.
//!
//! The pipeline is `text -> lexer -> parser -> tree -> extract`:
//!
//! - [`lexer`] turns text into tokens, dropping whitespace and `#` comments
//! - [`parser`] builds a [`Document`] of nested statements
//! - [`extract`] walks the document and collects [`HostRecord`]s
//! - [`format`] serializes the records for downstream tooling

pub mod extract;
pub mod format;
pub mod lexer;
pub mod parser;
pub mod tree;

pub use extract::{extract_hosts, extract_hosts_from_str, HostRecord};
pub use format::format_json;
pub use parser::{parse, parse_file, ParseError};
pub use tree::{Block, BlockKeyword, Document, Line, OptionKeyword, Statement};
