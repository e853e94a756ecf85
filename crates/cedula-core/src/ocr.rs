//! OCR text salvage.
//!
//! The upload path runs OCR over a photographed document when no barcode
//! decodes. Recognized text is too noisy for the format strategies; the
//! only thing worth trusting in it is a clean, word-bounded digit code.

use crate::scan::rules::patterns::OCR_CODE;

/// First word-bounded run of 8 to 20 digits in recognized text,
/// returned verbatim (leading zeros preserved).
pub fn extract_code(text: &str) -> Option<String> {
    OCR_CODE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_code() {
        let text = "REPUBLICA DE COLOMBIA\nNUIP 0032145698 otro 87654321";
        assert_eq!(extract_code(text).as_deref(), Some("0032145698"));
    }

    #[test]
    fn test_ignores_short_runs() {
        assert_eq!(extract_code("fecha 2024 cod 1234567"), None);
    }

    #[test]
    fn test_ignores_unbounded_runs() {
        // A 25-digit blob is not a code; word boundaries must hold.
        assert_eq!(extract_code("1234567890123456789012345"), None);
    }
}
