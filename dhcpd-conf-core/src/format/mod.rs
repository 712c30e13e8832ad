//! Output formatters for extracted host records.

pub mod json;

pub use json::format_json;
