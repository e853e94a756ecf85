//! Output data model for scanned identity documents.

use serde::{Deserialize, Serialize};

/// Which encoding of the identity document a scan matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Digital cedula (PubDSK-marked PDF417 payload).
    DigitalCedula,
    /// Legacy cedula (digit run / name run / sex+date sandwich).
    LegacyCedula,
    /// Bare numeric code with no name data.
    SimpleCode,
    /// No strategy matched.
    #[default]
    NoMatch,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::DigitalCedula => write!(f, "digital_cedula"),
            DocumentKind::LegacyCedula => write!(f, "legacy_cedula"),
            DocumentKind::SimpleCode => write!(f, "simple_code"),
            DocumentKind::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Structured record recovered from one scan event.
///
/// `id_number` is empty exactly when `kind` is [`DocumentKind::NoMatch`];
/// callers must treat an empty `id_number` as parse failure regardless of
/// the kind label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Matched document variant.
    pub kind: DocumentKind,

    /// Identity number as a canonical digit string. At most 10 digits for
    /// the cedula variants, up to 15 for bare codes.
    pub id_number: String,

    /// Surname token(s), space-joined. Empty for bare codes.
    pub surnames: String,

    /// Given names left over after surname extraction. May be empty.
    pub given_names: String,
}

impl DocumentRecord {
    /// Record for a scan that no strategy could make sense of.
    pub fn no_match() -> Self {
        Self::default()
    }

    /// Record for a bare numeric code carrying no name data.
    pub fn simple_code(digits: impl Into<String>) -> Self {
        Self {
            kind: DocumentKind::SimpleCode,
            id_number: digits.into(),
            ..Self::default()
        }
    }

    /// Whether the record carries usable data.
    pub fn is_match(&self) -> bool {
        !self.id_number.is_empty()
    }

    /// Full name in document order (surnames first), empty for bare codes.
    pub fn full_name(&self) -> String {
        match (self.surnames.is_empty(), self.given_names.is_empty()) {
            (false, false) => format!("{} {}", self.surnames, self.given_names),
            (false, true) => self.surnames.clone(),
            (true, false) => self.given_names.clone(),
            (true, true) => String::new(),
        }
    }
}
