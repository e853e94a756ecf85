//! Common regex patterns for cedula scan extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Literal marker identifying the digital-cedula encoding.
pub const DIGITAL_ANCHOR: &str = "PubDSK";

lazy_static! {
    // Digital payload: header bytes end at the first long digit run
    pub static ref DIGITAL_PAYLOAD_START: Regex = Regex::new(
        r"\d{15,25}"
    ).unwrap();

    // Digital payload shape: document digits, glued name blob, optional
    // packing byte, sex marker, 8-digit date
    pub static ref DIGITAL_PAYLOAD: Regex = Regex::new(
        r"^(\d+)([A-ZÑ]+)(?:0|\s|1)?([MF])(\d{8})"
    ).unwrap();

    // Legacy "sandwich": digit run, spaced name run, 0 + sex + date
    pub static ref SANDWICH: Regex = Regex::new(
        r"(\d{7,15})\s*([A-ZÑ\s]+?)\s*0([MF])(\d{8})"
    ).unwrap();

    // OCR salvage: a clean word-bounded numeric code
    pub static ref OCR_CODE: Regex = Regex::new(
        r"\b\d{8,20}\b"
    ).unwrap();

    // Keyboard-wedge control markers typed by physical scanners
    pub static ref WEDGE_FUNCTION_KEY: Regex = Regex::new(
        r"(?i)<F\d+>"
    ).unwrap();

    pub static ref WEDGE_CONTROL_TOKEN: Regex = Regex::new(
        r"(?i)<CR>|<LF>|<GS>|<RS>|<US>"
    ).unwrap();
}
