//! Format-specific extraction rules.
//!
//! Each format the scanner encounters in the field gets one strategy; the
//! recognizer tries them in fixed priority order and the first match wins.

pub mod digital;
pub mod fallback;
pub mod legacy;
pub mod patterns;
pub mod sanitize;
pub mod surnames;

pub use digital::DigitalFormat;
pub use fallback::DigitsOnly;
pub use legacy::LegacyFormat;
pub use sanitize::{sanitize, scrub};
pub use surnames::{SurnameDictionary, DEFAULT_SURNAMES};

use crate::models::record::DocumentRecord;

/// One scan event in the normalization states the strategies need.
#[derive(Debug)]
pub struct ScanInput<'a> {
    /// Text exactly as received from the scanner or decoder.
    pub raw: &'a str,

    /// Per-character cleaned text, positions preserved.
    pub scrubbed: String,

    /// Scrubbed text with whitespace collapsed and trimmed.
    pub sanitized: String,
}

impl<'a> ScanInput<'a> {
    pub fn new(raw: &'a str) -> Self {
        let scrubbed = sanitize::scrub(raw);
        let sanitized = sanitize::collapse(&scrubbed);
        Self {
            raw,
            scrubbed,
            sanitized,
        }
    }
}

/// A format-specific extraction attempt.
///
/// `Some` means the strategy matched and extracted a record; `None` means
/// "did not match" and the recognizer falls through to the next strategy.
/// Implementations must never panic or propagate errors on malformed
/// input.
pub trait FormatStrategy {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Attempt extraction against one scan event.
    fn try_extract(&self, input: &ScanInput<'_>) -> Option<DocumentRecord>;
}

/// Canonicalize a captured digit run into a document number.
///
/// Fixed-width encodings left-pad the number with zeros and some glue
/// adjacent counters onto it, so keep the rightmost 10 digits and
/// round-trip through an integer to drop leading zeros.
pub(crate) fn canonical_id(digits: &str) -> Option<String> {
    let tail = if digits.len() > 10 {
        &digits[digits.len() - 10..]
    } else {
        digits
    };
    tail.parse::<u64>().ok().map(|n| n.to_string())
}
