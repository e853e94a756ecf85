//! Digits-only fallback for bare numeric codes.

use tracing::debug;

use crate::models::record::DocumentRecord;

use super::{FormatStrategy, ScanInput};

/// Fewer digits than this is scanner noise, not a code.
const MIN_DIGITS: usize = 7;

/// Cap on the captured code length.
const MAX_DIGITS: usize = 15;

/// Last-resort strategy for scans that carry a usable number but none of
/// the cedula payload shapes (membership cards, hand-typed codes).
///
/// Collects every digit in the sanitized text and keeps the leading
/// slice verbatim; no integer round-trip, so leading zeros survive.
pub struct DigitsOnly;

impl FormatStrategy for DigitsOnly {
    fn name(&self) -> &'static str {
        "digits-only"
    }

    fn try_extract(&self, input: &ScanInput<'_>) -> Option<DocumentRecord> {
        let digits: String = input
            .sanitized
            .chars()
            .filter(char::is_ascii_digit)
            .collect();

        if digits.len() < MIN_DIGITS {
            return None;
        }

        let code = &digits[..digits.len().min(MAX_DIGITS)];
        debug!(code = %code, "digits-only fallback matched");
        Some(DocumentRecord::simple_code(code))
    }
}
