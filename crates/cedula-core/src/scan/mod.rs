//! Scan parsing module: sanitization, format recognition, extraction.

mod parser;
pub mod rules;

pub use parser::{CedulaParser, ScanOutcome};
