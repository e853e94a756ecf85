//! Surname dictionary and the surname/given-name tokenizer.
//!
//! The digital cedula encoding glues surnames and given names into one
//! run of uppercase letters with no separator. The only way to find the
//! boundary is to peel known surnames off the front of the blob.

use std::path::Path;

use crate::error::{CedulaError, Result};

/// Known Colombian surnames, most frequent first.
///
/// The tokenizer scans this list top to bottom and the first entry that
/// prefixes the remaining blob wins, so ordering is part of the contract.
/// An entry must come after any longer entry it is a prefix of, or it
/// shadows the longer match (GALLEGOS before GALLEGO, VILLAMIZAR before
/// VILLA, PALACIOS before PALACIO, MARINO before MARIN, REYES before REY).
pub static DEFAULT_SURNAMES: &[&str] = &[
    "RODRIGUEZ",
    "GOMEZ",
    "GONZALEZ",
    "MARTINEZ",
    "GARCIA",
    "LOPEZ",
    "HERNANDEZ",
    "SANCHEZ",
    "RAMIREZ",
    "PEREZ",
    "DIAZ",
    "MUÑOZ",
    "ROJAS",
    "MORENO",
    "JIMENEZ",
    "GUTIERREZ",
    "TORRES",
    "VARGAS",
    "CASTRO",
    "RUIZ",
    "ALVAREZ",
    "ROMERO",
    "SUAREZ",
    "VALENCIA",
    "ORTIZ",
    "CARDENAS",
    "CARDONA",
    "OSORIO",
    "RESTREPO",
    "MEJIA",
    "JARAMILLO",
    "ZULUAGA",
    "MONTOYA",
    "GIRALDO",
    "ARIAS",
    "RIVERA",
    "AGUDELO",
    "VELEZ",
    "FLOREZ",
    "OCAMPO",
    "HENAO",
    "QUINTERO",
    "SALAZAR",
    "CORREA",
    "BETANCUR",
    "MORALES",
    "PARRA",
    "CASTAÑO",
    "CASTAÑEDA",
    "VALDERRAMA",
    "HURTADO",
    "MONSALVE",
    "MESA",
    "VILLAMIZAR",
    "VILLA",
    "TOBON",
    "URIBE",
    "ECHEVERRI",
    "PATIÑO",
    "ZAPATA",
    "ACOSTA",
    "AVILA",
    "GALLEGOS",
    "GALLEGO",
    "GALVIS",
    "CUERVO",
    "PINEDA",
    "DUQUE",
    "ESCOBAR",
    "NARANJO",
    "SERNA",
    "VERGARA",
    "PALACIOS",
    "PALACIO",
    "ANGEL",
    "CANO",
    "MARINO",
    "MARIN",
    "SIERRA",
    "SILVA",
    "NAVARRO",
    "DELGADO",
    "GUERRERO",
    "MEDINA",
    "CORTES",
    "CAMACHO",
    "BELTRAN",
    "RINCON",
    "FORERO",
    "CONTRERAS",
    "CARRILLO",
    "MENDOZA",
    "GUZMAN",
    "SOLANO",
    "REYES",
    "REY",
    "BLANCO",
    "PAEZ",
    "NIETO",
    "BERNAL",
    "RODAS",
    "SALDARRIAGA",
    "LONDOÑO",
    "PULIDO",
    "MURILLO",
    "BARRERA",
    "CARVAJAL",
    "ARANGO",
    "POSADA",
    "BUITRAGO",
    "CEBALLOS",
    "ARISTIZABAL",
    "BEDOYA",
    "VELASQUEZ",
    "VALLEJO",
    "OSPINA",
    "ORTEGA",
    "PINZON",
    "MOLINA",
    "ROBLEDO",
    "CACERES",
    "QUIROGA",
    "CHAVARRO",
    "LOZANO",
    "PRADA",
    "ACEVEDO",
];

/// Immutable, ordered set of known surnames.
///
/// Built once at startup and shared by reference; the list order is the
/// priority order for prefix matching.
#[derive(Debug, Clone)]
pub struct SurnameDictionary {
    entries: Vec<String>,
}

impl Default for SurnameDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl SurnameDictionary {
    /// Dictionary backed by the built-in surname list.
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_SURNAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Dictionary from caller-supplied entries, order preserved.
    ///
    /// Entries are trimmed and uppercased; blank entries are dropped.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_uppercase())
            .filter(|e| !e.is_empty())
            .collect();

        if entries.is_empty() {
            return Err(CedulaError::Dictionary("no surname entries".to_string()));
        }
        Ok(Self { entries })
    }

    /// Dictionary from a text file: one surname per line, `#` comments
    /// and blank lines skipped.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let lines = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'));

        Self::from_entries(lines).map_err(|_| {
            CedulaError::Dictionary(format!("{}: no surname entries", path.display()))
        })
    }

    /// Entries in priority order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `name` is a dictionary entry (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        let name = name.trim().to_uppercase();
        self.entries.iter().any(|e| *e == name)
    }

    /// Split a glued uppercase name blob into surnames and given names.
    ///
    /// Greedy and prefix-anchored: consume the first dictionary entry
    /// that prefixes the blob, then at most one more against the
    /// remainder; whatever is left are the given names. A blob with no
    /// recognizable surname is returned whole as the surname.
    pub fn split(&self, blob: &str) -> (String, String) {
        match self.consume_prefix(blob) {
            Some(first) => {
                let mut surnames = first.to_string();
                let mut rest = &blob[first.len()..];

                if let Some(second) = self.consume_prefix(rest) {
                    surnames.push(' ');
                    surnames.push_str(second);
                    rest = &rest[second.len()..];
                }

                (surnames, rest.trim().to_string())
            }
            None => (blob.trim().to_string(), String::new()),
        }
    }

    /// First entry, in list order, that is a prefix of `rest`.
    fn consume_prefix(&self, rest: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(String::as_str)
            .find(|entry| rest.starts_with(entry))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_splits_two_surnames() {
        let dict = SurnameDictionary::new();
        let (surnames, given) = dict.split("GARCIALOPEZJUANCARLOS");
        assert_eq!(surnames, "GARCIA LOPEZ");
        assert_eq!(given, "JUANCARLOS");
    }

    #[test]
    fn test_splits_single_surname() {
        let dict = SurnameDictionary::new();
        let (surnames, given) = dict.split("RODRIGUEZSINAPELLIDOCONOCIDO");
        assert_eq!(surnames, "RODRIGUEZ");
        assert_eq!(given, "SINAPELLIDOCONOCIDO");
    }

    #[test]
    fn test_consumes_at_most_two_surnames() {
        let dict = SurnameDictionary::new();
        // TORRES is in the dictionary but only two tokens may be consumed.
        let (surnames, given) = dict.split("GARCIALOPEZTORRES");
        assert_eq!(surnames, "GARCIA LOPEZ");
        assert_eq!(given, "TORRES");
    }

    #[test]
    fn test_unknown_blob_is_all_surname() {
        let dict = SurnameDictionary::new();
        let (surnames, given) = dict.split("XYZABC");
        assert_eq!(surnames, "XYZABC");
        assert_eq!(given, "");
    }

    #[test]
    fn test_empty_blob() {
        let dict = SurnameDictionary::new();
        assert_eq!(dict.split(""), (String::new(), String::new()));
    }

    #[test]
    fn test_list_order_wins_over_length() {
        // REYES precedes REY in the list, so the longer entry matches.
        let dict = SurnameDictionary::new();
        let (surnames, given) = dict.split("REYESMARIA");
        assert_eq!(surnames, "REYES");
        assert_eq!(given, "MARIA");

        // Reversed order demonstrates the shadowing the list avoids.
        let shadowed = SurnameDictionary::from_entries(["REY", "REYES"]).unwrap();
        let (surnames, given) = shadowed.split("REYESMARIA");
        assert_eq!(surnames, "REY");
        assert_eq!(given, "ESMARIA");
    }

    #[test]
    fn test_from_entries_normalizes() {
        let dict = SurnameDictionary::from_entries(["  garcia ", "", "Lopez"]).unwrap();
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("GARCIA"));
        assert!(dict.contains("lopez"));
    }

    #[test]
    fn test_from_entries_rejects_empty() {
        assert!(matches!(
            SurnameDictionary::from_entries(Vec::<String>::new()),
            Err(CedulaError::Dictionary(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("surnames.txt");
        std::fs::write(&path, "# custom list\nquintana\n\nARCILA\n").unwrap();

        let dict = SurnameDictionary::from_file(&path).unwrap();
        assert_eq!(dict.len(), 2);
        let (surnames, given) = dict.split("QUINTANAPEDRO");
        assert_eq!(surnames, "QUINTANA");
        assert_eq!(given, "PEDRO");
    }

    #[test]
    fn test_builtin_list_has_no_silent_shadowing() {
        // Every entry that is a prefix of another entry must come after it.
        let entries: Vec<&str> = DEFAULT_SURNAMES.to_vec();
        for (i, shorter) in entries.iter().enumerate() {
            for (j, longer) in entries.iter().enumerate() {
                if i < j && longer.starts_with(shorter) && shorter != longer {
                    panic!("{shorter} at {i} shadows {longer} at {j}");
                }
            }
        }
    }
}
