// crates/airportdb-core/src/config.rs
use serde::{Deserialize, Serialize};

/// Separator placed between fields of a composite search key.
pub const DEFAULT_DELIMITER: char = ':';

/// How a search term is compared against an index entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Substring over the whole composite key. A term may straddle the
    /// delimiter between two fields (`"kusa"` hits `...kennedy:...:usa`
    /// only if the characters are adjacent in the key).
    #[default]
    Composite,
    /// The term must occur inside a single field.
    PerField,
}

/// Knobs for index construction and matching.
///
/// The default reproduces the plain behaviour: `:` delimiter, composite
/// matching, no accent folding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub delimiter: char,
    pub match_mode: MatchMode,
    /// Transliterate keys and terms to ASCII before lowering.
    pub fold_accents: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            match_mode: MatchMode::Composite,
            fold_accents: false,
        }
    }
}

impl SearchConfig {
    pub fn per_field(mut self) -> Self {
        self.match_mode = MatchMode::PerField;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_accent_folding(mut self, fold: bool) -> Self {
        self.fold_accents = fold;
        self
    }
}
