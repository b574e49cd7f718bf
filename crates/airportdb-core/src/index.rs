// crates/airportdb-core/src/index.rs

//! # Index Builder
//!
//! Turns an airport list into a parallel list of lowercase composite keys,
//! `iata:name:city:country`. Entry *i* always describes record *i*; the
//! index is rebuilt wholesale whenever the records change and never patched.

use crate::config::SearchConfig;
use crate::model::Airport;
use crate::text::normalize;
use std::ops::Range;

/// One composite key plus the byte span of each field inside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    key: String,
    /// Spans of iata, name, city, country within `key`.
    fields: [Range<usize>; 4],
}

impl IndexEntry {
    fn build(airport: &Airport, config: &SearchConfig) -> Self {
        let mut key = String::new();
        let mut fields: [Range<usize>; 4] = Default::default();

        for (i, value) in airport.search_fields().into_iter().enumerate() {
            if i > 0 {
                key.push(config.delimiter);
            }
            let start = key.len();
            key.push_str(&normalize(value, config.fold_accents));
            fields[i] = start..key.len();
        }

        Self { key, fields }
    }

    /// The full composite key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The four normalized field segments, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(move |r| &self.key[r.clone()])
    }
}

/// The derived search view over an airport list.
#[derive(Clone, Debug, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
    config: SearchConfig,
}

impl SearchIndex {
    /// Build one entry per record, preserving record order.
    pub fn build(records: &[Airport], config: &SearchConfig) -> Self {
        let entries: Vec<IndexEntry> = records
            .iter()
            .map(|a| IndexEntry::build(a, config))
            .collect();

        tracing::debug!(
            entries = entries.len(),
            delimiter = %config.delimiter,
            fold_accents = config.fold_accents,
            "built search index"
        );

        Self {
            entries,
            config: config.clone(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn get(&self, position: usize) -> Option<&IndexEntry> {
        self.entries.get(position)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(IndexEntry::key)
    }

    pub fn into_keys(self) -> Vec<String> {
        self.entries.into_iter().map(|e| e.key).collect()
    }
}

/// Composite keys for `records` with the default configuration.
///
/// ```rust
/// use airportdb_core::{build_index, Airport};
///
/// let keys = build_index(&[Airport::new("JFK", "John F Kennedy", "New York", "USA")]);
/// assert_eq!(keys, vec!["jfk:john f kennedy:new york:usa".to_string()]);
/// ```
pub fn build_index(records: &[Airport]) -> Vec<String> {
    SearchIndex::build(records, &SearchConfig::default()).into_keys()
}
