//! Digital-cedula extraction (PubDSK payload).

use tracing::debug;

use crate::models::record::{DocumentKind, DocumentRecord};

use super::patterns::{DIGITAL_ANCHOR, DIGITAL_PAYLOAD, DIGITAL_PAYLOAD_START};
use super::surnames::SurnameDictionary;
use super::{canonical_id, FormatStrategy, ScanInput};

/// Strategy for the digital cedula encoding.
///
/// The PDF417 payload of the digital document carries a `PubDSK` marker
/// followed by header bytes, a long digit run opening the real payload,
/// the glued name blob, a sex marker and a date. The anchor is searched
/// in the scrubbed (not yet collapsed) text because the header bytes
/// around it decode as noise that sanitization turns into separators.
pub struct DigitalFormat<'a> {
    pub dictionary: &'a SurnameDictionary,
}

impl FormatStrategy for DigitalFormat<'_> {
    fn name(&self) -> &'static str {
        "digital"
    }

    fn try_extract(&self, input: &ScanInput<'_>) -> Option<DocumentRecord> {
        if !input.sanitized.contains(DIGITAL_ANCHOR) && !input.raw.contains(DIGITAL_ANCHOR) {
            return None;
        }

        let anchor = input.scrubbed.find(DIGITAL_ANCHOR)?;
        let segment = &input.scrubbed[anchor + DIGITAL_ANCHOR.len()..];

        // Everything between the anchor and the first long digit run is
        // header junk; the run itself opens the payload.
        let start = DIGITAL_PAYLOAD_START.find(segment)?.start();
        let caps = DIGITAL_PAYLOAD.captures(&segment[start..])?;

        let id_number = canonical_id(&caps[1])?;
        let (surnames, given_names) = self.dictionary.split(&caps[2]);
        debug!(id = %id_number, "digital payload matched");

        Some(DocumentRecord {
            kind: DocumentKind::DigitalCedula,
            id_number,
            surnames,
            given_names,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn extract(raw: &str) -> Option<DocumentRecord> {
        let dictionary = SurnameDictionary::new();
        let strategy = DigitalFormat {
            dictionary: &dictionary,
        };
        strategy.try_extract(&ScanInput::new(raw))
    }

    #[test]
    fn test_extracts_digital_payload() {
        let raw = "\u{1d}hdr\u{1e}PubDSK\u{1d}NZ12 9988776655000123456789GARCIALOPEZJUANCARLOS0M19900101tail";
        let record = extract(raw).unwrap();

        assert_eq!(record.kind, DocumentKind::DigitalCedula);
        assert_eq!(record.id_number, "123456789");
        assert_eq!(record.surnames, "GARCIA LOPEZ");
        assert_eq!(record.given_names, "JUANCARLOS");
    }

    #[test]
    fn test_skips_short_digit_junk_before_payload() {
        // The 12 in the header must not anchor the payload.
        let raw = "PubDSK 12 000000001234567890MARTINEZANA1F20010230";
        let record = extract(raw).unwrap();
        assert_eq!(record.id_number, "1234567890");
        assert_eq!(record.surnames, "MARTINEZ");
        assert_eq!(record.given_names, "ANA");
    }

    #[test]
    fn test_space_separator_before_sex_marker() {
        let raw = "PubDSK 000000001234567890MARTINEZANA F20010230";
        let record = extract(raw).unwrap();
        assert_eq!(record.kind, DocumentKind::DigitalCedula);
        assert_eq!(record.surnames, "MARTINEZ");
    }

    #[test]
    fn test_requires_anchor() {
        assert!(extract("000000001234567890MARTINEZANA0F20010230").is_none());
    }

    #[test]
    fn test_fails_without_long_digit_run() {
        // 13 digits only; the payload anchor needs 15.
        assert!(extract("PubDSK 1234567890123GARCIAANA0M19900101").is_none());
    }

    #[test]
    fn test_fails_on_truncated_date() {
        assert!(extract("PubDSK 000000001234567890GARCIAANA0M1990").is_none());
    }
}
