//! Keyboard-wedge buffer cleanup.
//!
//! Physical barcode readers type their payload as keystrokes. The
//! accumulated buffer arrives with function-key markers and named
//! control tokens wrapped around the real data; strip those before the
//! text goes to the parser.

use crate::scan::rules::patterns::{WEDGE_CONTROL_TOKEN, WEDGE_FUNCTION_KEY};

/// Strip control markers and non-printable characters from a wedge
/// buffer. Keeps printable ASCII plus Ñ/ñ.
pub fn clean_buffer(raw: &str) -> String {
    let stripped = WEDGE_FUNCTION_KEY.replace_all(raw, "");
    let stripped = WEDGE_CONTROL_TOKEN.replace_all(&stripped, "");

    stripped
        .chars()
        .filter(|&c| matches!(c, ' '..='~') || c == 'Ñ' || c == 'ñ')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_function_key_markers() {
        assert_eq!(clean_buffer("<F8>1234567890<F12>"), "1234567890");
    }

    #[test]
    fn test_strips_named_control_tokens() {
        assert_eq!(clean_buffer("<CR><lf>12345<GS>678<rs>"), "12345678");
    }

    #[test]
    fn test_drops_raw_control_characters() {
        assert_eq!(clean_buffer("\u{1d}123\u{0}45\u{7f}"), "12345");
    }

    #[test]
    fn test_keeps_printable_and_enie() {
        assert_eq!(clean_buffer("MUÑOZ pe-ña_42"), "MUÑOZ pe-ña_42");
    }

    #[test]
    fn test_empty_buffer() {
        assert_eq!(clean_buffer(""), "");
    }
}
