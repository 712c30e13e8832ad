//! Command-line front end for `dhcpd-conf-core`.
//!
//! Reads one ISC dhcpd config, extracts every host record and prints them
//! as a JSON array. Parsing is all-or-nothing: any I/O, lexical or syntax
//! error prints a diagnostic and no array.

pub mod extract_cmd;
pub mod logging;
