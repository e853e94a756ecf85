//! Scan parser trying format strategies in fixed priority order.

use tracing::{debug, info};

use crate::models::config::ScanConfig;
use crate::models::record::DocumentRecord;

use super::rules::{
    sanitize, DigitalFormat, DigitsOnly, FormatStrategy, LegacyFormat, ScanInput,
    SurnameDictionary,
};

/// Scans shorter than this (in code points) are rejected outright.
const MIN_SCAN_LEN: usize = 5;

/// Parser for scanned identity-document text.
///
/// Total and side-effect-free: every input maps to exactly one
/// [`DocumentRecord`], with `NoMatch` standing in for "unparseable".
/// All working state is local to the call, so one parser can be shared
/// across threads freely.
pub struct CedulaParser {
    dictionary: SurnameDictionary,
    enable_fallback: bool,
}

impl CedulaParser {
    /// Parser with the built-in surname dictionary and default settings.
    pub fn new() -> Self {
        Self {
            dictionary: SurnameDictionary::new(),
            enable_fallback: true,
        }
    }

    /// Replace the surname dictionary.
    pub fn with_dictionary(mut self, dictionary: SurnameDictionary) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Enable or disable the digits-only fallback strategy.
    pub fn with_fallback(mut self, enable: bool) -> Self {
        self.enable_fallback = enable;
        self
    }

    /// Build a parser from a [`ScanConfig`], loading the custom surname
    /// file when one is configured.
    pub fn from_config(config: &ScanConfig) -> crate::Result<Self> {
        let dictionary = match &config.dictionary.file {
            Some(path) => SurnameDictionary::from_file(path)?,
            None => SurnameDictionary::new(),
        };

        Ok(Self {
            dictionary,
            enable_fallback: config.extraction.enable_fallback,
        })
    }

    /// The dictionary behind the surname tokenizer.
    pub fn dictionary(&self) -> &SurnameDictionary {
        &self.dictionary
    }

    /// Parse one scan event into a [`DocumentRecord`].
    pub fn parse(&self, raw: &str) -> DocumentRecord {
        if raw.chars().count() < MIN_SCAN_LEN {
            return DocumentRecord::no_match();
        }

        let input = ScanInput::new(raw);
        debug!(len = raw.len(), "parsing scan event");

        let digital = DigitalFormat {
            dictionary: &self.dictionary,
        };
        let mut strategies: Vec<&dyn FormatStrategy> = vec![&digital, &LegacyFormat];
        if self.enable_fallback {
            strategies.push(&DigitsOnly);
        }

        for strategy in strategies {
            if let Some(record) = strategy.try_extract(&input) {
                info!(strategy = strategy.name(), kind = %record.kind, "scan matched");
                return record;
            }
        }

        debug!("no strategy matched");
        DocumentRecord::no_match()
    }

    /// Parse and keep the sanitized text alongside the record.
    pub fn parse_outcome(&self, raw: &str) -> ScanOutcome {
        ScanOutcome {
            record: self.parse(raw),
            sanitized: sanitize(raw),
        }
    }
}

impl Default for CedulaParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a parse with the intermediate sanitized text retained.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The extracted record.
    pub record: DocumentRecord,

    /// The sanitized text the recognizer worked on.
    pub sanitized: String,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::record::DocumentKind;

    #[test]
    fn test_short_input_is_no_match() {
        let parser = CedulaParser::new();
        for raw in ["", "12", "1234"] {
            let record = parser.parse(raw);
            assert_eq!(record.kind, DocumentKind::NoMatch);
            assert!(record.id_number.is_empty());
        }
    }

    #[test]
    fn test_parses_digital_scan() {
        let parser = CedulaParser::new();
        let record = parser
            .parse("\u{1d}PubDSK\u{1e}NZ 9988776655000123456789GARCIALOPEZJUANCARLOS0M19900101");

        assert_eq!(record.kind, DocumentKind::DigitalCedula);
        assert_eq!(record.id_number, "123456789");
        assert_eq!(record.surnames, "GARCIA LOPEZ");
        assert_eq!(record.given_names, "JUANCARLOS");
    }

    #[test]
    fn test_parses_legacy_scan() {
        let parser = CedulaParser::new();
        let record = parser.parse("1234567890 PEREZ GOMEZ MARIA JOSE 0F19850505");

        assert_eq!(record.kind, DocumentKind::LegacyCedula);
        assert_eq!(record.id_number, "1234567890");
        assert_eq!(record.surnames, "PEREZ GOMEZ");
        assert_eq!(record.given_names, "MARIA JOSE");
    }

    #[test]
    fn test_falls_back_to_digits_only() {
        let parser = CedulaParser::new();
        let record = parser.parse("garbled###3214569870garbled");

        assert_eq!(record.kind, DocumentKind::SimpleCode);
        assert_eq!(record.id_number, "3214569870");
    }

    #[test]
    fn test_digital_wins_over_sandwich() {
        // The tail of this payload also satisfies the legacy shape; the
        // digital strategy must win on priority.
        let parser = CedulaParser::new();
        let record =
            parser.parse("PubDSK 9988776655000123456789GARCIALOPEZJUANCARLOS0M19900101");
        assert_eq!(record.kind, DocumentKind::DigitalCedula);
    }

    #[test]
    fn test_broken_digital_payload_falls_through() {
        // Anchor present but the payload is malformed; the sandwich in
        // the rest of the scan still matches.
        let parser = CedulaParser::new();
        let record = parser.parse("PubDSK junk 1234567 PEREZ MARIA 0F19850505");
        assert_eq!(record.kind, DocumentKind::LegacyCedula);
        assert_eq!(record.id_number, "1234567");
    }

    #[test]
    fn test_fallback_can_be_disabled() {
        let parser = CedulaParser::new().with_fallback(false);
        let record = parser.parse("garbled###3214569870garbled");
        assert_eq!(record.kind, DocumentKind::NoMatch);
    }

    #[test]
    fn test_matched_ids_are_short_digit_strings() {
        let parser = CedulaParser::new();
        let scans = [
            "PubDSK 9988776655000123456789GARCIALOPEZJUANCARLOS0M19900101",
            "1234567890123 PEREZ GOMEZ MARIA 0M19900101",
            "garbled###3214569870garbled",
        ];

        for raw in scans {
            let record = parser.parse(raw);
            assert!(record.is_match());
            assert!(record.id_number.chars().all(|c| c.is_ascii_digit()));
            if record.kind != DocumentKind::SimpleCode {
                assert!(record.id_number.len() <= 10);
            }
        }
    }

    #[test]
    fn test_parse_outcome_keeps_sanitized_text() {
        let parser = CedulaParser::new();
        let outcome = parser.parse_outcome("##1234567890  PEREZ GOMEZ ANA 0F19850505##");

        assert_eq!(outcome.record.kind, DocumentKind::LegacyCedula);
        assert_eq!(outcome.sanitized, "1234567890 PEREZ GOMEZ ANA 0F19850505");
    }

    #[test]
    fn test_custom_dictionary() {
        let dictionary = SurnameDictionary::from_entries(["ZZTOP"]).unwrap();
        let parser = CedulaParser::new().with_dictionary(dictionary);
        let record =
            parser.parse("PubDSK 000001234567890123ZZTOPANA0F19900101");

        assert_eq!(record.surnames, "ZZTOP");
        assert_eq!(record.given_names, "ANA");
    }
}
