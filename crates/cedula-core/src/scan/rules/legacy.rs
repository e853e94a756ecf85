//! Legacy-cedula extraction (the digit/name/sex+date "sandwich").

use tracing::debug;

use crate::models::record::{DocumentKind, DocumentRecord};

use super::patterns::SANDWICH;
use super::{canonical_id, FormatStrategy, ScanInput};

/// Strategy for the legacy cedula barcode.
///
/// The legacy encoding keeps the fields apart: a digit run, the names
/// separated by spaces, then a `0` pad, the sex marker and an 8-digit
/// date. Matched against the fully sanitized text, so any scanner noise
/// between the fields has already collapsed into single spaces.
pub struct LegacyFormat;

impl FormatStrategy for LegacyFormat {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn try_extract(&self, input: &ScanInput<'_>) -> Option<DocumentRecord> {
        let caps = SANDWICH.captures(&input.sanitized)?;

        let id_number = canonical_id(&caps[1])?;
        let (surnames, given_names) = split_name_words(caps[2].trim());
        debug!(id = %id_number, "sandwich matched");

        Some(DocumentRecord {
            kind: DocumentKind::LegacyCedula,
            id_number,
            surnames,
            given_names,
        })
    }
}

/// Word-token policy for the legacy name run.
///
/// Colombian documents carry two surnames, so with three or more words
/// the first two are surnames; with two, one each; a single word is a
/// surname with no given names.
fn split_name_words(text: &str) -> (String, String) {
    let words: Vec<&str> = text.split(' ').filter(|w| !w.is_empty()).collect();

    match words.len() {
        0 => (String::new(), String::new()),
        1 => (words[0].to_string(), String::new()),
        2 => (words[0].to_string(), words[1].to_string()),
        _ => (format!("{} {}", words[0], words[1]), words[2..].join(" ")),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extract(raw: &str) -> Option<DocumentRecord> {
        LegacyFormat.try_extract(&ScanInput::new(raw))
    }

    #[test]
    fn test_extracts_sandwich() {
        let record = extract("1234567890 PEREZ GOMEZ MARIA JOSE 0F19850505").unwrap();

        assert_eq!(record.kind, DocumentKind::LegacyCedula);
        assert_eq!(record.id_number, "1234567890");
        assert_eq!(record.surnames, "PEREZ GOMEZ");
        assert_eq!(record.given_names, "MARIA JOSE");
    }

    #[test]
    fn test_tolerates_framing_noise() {
        let record = extract("\u{1d}\u{1e}0087654321##MUÑOZ ROJAS PEDRO*0M19770812xx").unwrap();
        assert_eq!(record.id_number, "87654321");
        assert_eq!(record.surnames, "MUÑOZ ROJAS");
        assert_eq!(record.given_names, "PEDRO");
    }

    #[test]
    fn test_truncates_long_digit_runs() {
        let record = extract("1234567890123 PEREZ GOMEZ MARIA 0M19900101").unwrap();
        assert_eq!(record.id_number, "4567890123");
    }

    #[test]
    fn test_two_word_name_run() {
        let record = extract("7654321 PEREZ MARIA 0F19850505").unwrap();
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.given_names, "MARIA");
    }

    #[test]
    fn test_one_word_name_run() {
        let record = extract("7654321 PEREZ 0F19850505").unwrap();
        assert_eq!(record.surnames, "PEREZ");
        assert_eq!(record.given_names, "");
    }

    #[test]
    fn test_requires_sex_and_date_tail() {
        assert!(extract("1234567890 PEREZ GOMEZ MARIA").is_none());
        assert!(extract("1234567890 PEREZ GOMEZ MARIA 0F1985").is_none());
    }

    #[test]
    fn test_split_name_words_empty() {
        assert_eq!(split_name_words(""), (String::new(), String::new()));
    }
}
