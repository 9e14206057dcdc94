//! iCalendar payload generation and read-back.
//!
//! Payloads follow RFC 5545: CRLF line endings, 75-octet folding and
//! escaped TEXT values.

mod generate;
mod parse;

pub use generate::{build_ics_payload, normalize_line_breaks};
pub use parse::{ExportedEvent, parse_exported};
