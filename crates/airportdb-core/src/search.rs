// crates/airportdb-core/src/search.rs

//! # Filter Engine
//!
//! A linear, case-insensitive substring scan over the composite keys. A hit
//! at position *i* selects record *i* directly; there is no reverse lookup
//! through the IATA code.

use crate::config::MatchMode;
use crate::index::{IndexEntry, SearchIndex};
use crate::model::Airport;
use crate::text::normalize;

/// `None` and `""` both mean "no filter".
#[inline]
fn active_term(term: Option<&str>) -> Option<&str> {
    term.filter(|t| !t.is_empty())
}

/// Positions of the keys in `index` that contain `term`.
///
/// An empty or absent term selects every position.
pub fn filter_positions<K: AsRef<str>>(term: Option<&str>, index: &[K]) -> Vec<usize> {
    let Some(term) = active_term(term) else {
        return (0..index.len()).collect();
    };
    let needle = term.to_lowercase();

    index
        .iter()
        .enumerate()
        .filter(|(_, key)| key.as_ref().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// The ordered subsequence of `records` whose key in `index` contains `term`.
///
/// `records` and `index` must be congruent (same length, same order). Debug
/// builds panic on a length mismatch; release builds stop at the shorter
/// of the two.
///
/// ```rust
/// use airportdb_core::{build_index, filter, Airport};
///
/// let airports = vec![
///     Airport::new("JFK", "John F Kennedy", "New York", "USA"),
///     Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA"),
/// ];
/// let index = build_index(&airports);
///
/// let hits = filter(Some("LOS"), &airports, &index);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].iata, "LAX");
/// ```
pub fn filter<'a, K: AsRef<str>>(
    term: Option<&str>,
    records: &'a [Airport],
    index: &[K],
) -> Vec<&'a Airport> {
    debug_assert_eq!(records.len(), index.len(), "index out of step with records");

    let Some(term) = active_term(term) else {
        return records.iter().collect();
    };
    let needle = term.to_lowercase();

    records
        .iter()
        .zip(index)
        .filter(|(_, key)| key.as_ref().contains(&needle))
        .map(|(airport, _)| airport)
        .collect()
}

impl IndexEntry {
    /// Does this entry contain the already-normalized `needle`?
    #[inline]
    pub fn matches(&self, needle: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Composite => self.key().contains(needle),
            MatchMode::PerField => self.fields().any(|f| f.contains(needle)),
        }
    }
}

impl SearchIndex {
    /// Normalize a raw term the same way keys were normalized.
    pub fn normalize_term(&self, term: &str) -> String {
        normalize(term, self.config().fold_accents)
    }

    /// Matching positions under this index's configuration.
    pub fn positions(&self, term: Option<&str>) -> Vec<usize> {
        let Some(term) = active_term(term) else {
            return (0..self.len()).collect();
        };
        let needle = self.normalize_term(term);
        let mode = self.config().match_mode;

        self.entries()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(&needle, mode))
            .map(|(i, _)| i)
            .collect()
    }

    /// Configuration-aware counterpart of [`filter`].
    pub fn select<'a>(&self, term: Option<&str>, records: &'a [Airport]) -> Vec<&'a Airport> {
        debug_assert_eq!(records.len(), self.len(), "index out of step with records");

        self.positions(term)
            .into_iter()
            .filter_map(|i| records.get(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::index::build_index;

    fn sample() -> Vec<Airport> {
        vec![
            Airport::new("JFK", "John F Kennedy", "New York", "USA"),
            Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA"),
        ]
    }

    fn iatas(hits: &[&Airport]) -> Vec<String> {
        hits.iter().map(|a| a.iata.clone()).collect()
    }

    #[test]
    fn empty_term_is_identity() {
        let r = sample();
        let idx = build_index(&r);
        let expected: Vec<&Airport> = r.iter().collect();
        assert_eq!(filter(None, &r, &idx), expected);
        assert_eq!(filter(Some(""), &r, &idx), expected);
    }

    #[test]
    fn scenario_from_two_airports() {
        let r = sample();
        let idx = build_index(&r);
        assert_eq!(iatas(&filter(Some("los"), &r, &idx)), vec!["LAX"]);
        assert_eq!(iatas(&filter(Some("usa"), &r, &idx)), vec!["JFK", "LAX"]);
        assert!(filter(Some("xyz"), &r, &idx).is_empty());
    }

    #[test]
    fn case_insensitive() {
        let r = sample();
        let idx = build_index(&r);
        assert_eq!(filter(Some("NEW YORK"), &r, &idx), filter(Some("new york"), &r, &idx));
        assert_eq!(iatas(&filter(Some("Jfk"), &r, &idx)), vec!["JFK"]);
    }

    #[test]
    fn whitespace_is_a_real_term() {
        let r = vec![
            Airport::new("ORD", "O'Hare", "Chicago", "USA"),
            Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA"),
        ];
        let idx = build_index(&r);
        assert_eq!(iatas(&filter(Some(" "), &r, &idx)), vec!["LAX"]);
    }

    #[test]
    fn positions_match_filter() {
        let r = sample();
        let idx = build_index(&r);
        assert_eq!(filter_positions(Some("angeles"), &idx), vec![1]);
        assert_eq!(filter_positions(None, &idx), vec![0, 1]);
    }

    #[test]
    fn composite_mode_spans_field_boundaries() {
        let r = sample();
        let idx = SearchIndex::build(&r, &SearchConfig::default());
        // "york:usa" straddles city and country.
        assert_eq!(idx.positions(Some("york:us")), vec![0]);
    }

    #[test]
    fn per_field_mode_rejects_boundary_spans() {
        let r = sample();
        let idx = SearchIndex::build(&r, &SearchConfig::default().per_field());
        assert!(idx.positions(Some("york:us")).is_empty());
        assert_eq!(idx.positions(Some("york")), vec![0]);
    }

    #[test]
    fn accent_folding_applies_to_term_and_keys() {
        let r = vec![Airport::new("ZRH", "Zürich Airport", "Zürich", "Switzerland")];
        let plain = SearchIndex::build(&r, &SearchConfig::default());
        assert!(plain.positions(Some("zurich")).is_empty());
        assert_eq!(plain.positions(Some("ZÜRICH")), vec![0]);

        let folded = SearchIndex::build(&r, &SearchConfig::default().with_accent_folding(true));
        assert_eq!(folded.positions(Some("zurich")), vec![0]);
        assert_eq!(folded.positions(Some("Zür")), vec![0]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index out of step with records")]
    fn mismatched_index_is_rejected_in_debug() {
        let r = sample();
        filter(Some("j"), &r, &Vec::<String>::new());
    }

    #[test]
    fn per_field_tolerates_delimiter_inside_a_field() {
        let r = vec![Airport::new("AAA", "Terminal: North", "Springfield", "USA")];
        let idx = SearchIndex::build(&r, &SearchConfig::default().per_field());
        assert_eq!(idx.positions(Some("terminal: n")), vec![0]);
        // Spans iata and name through the joining delimiter.
        assert!(idx.positions(Some("aaa:t")).is_empty());

        let composite = SearchIndex::build(&r, &SearchConfig::default());
        assert_eq!(composite.positions(Some("aaa:t")), vec![0]);
    }

    #[test]
    fn select_returns_records_in_order() {
        let r = sample();
        let idx = SearchIndex::build(&r, &SearchConfig::default());
        assert_eq!(iatas(&idx.select(Some("intl"), &r)), vec!["LAX"]);
        assert_eq!(iatas(&idx.select(Some("n"), &r)), vec!["JFK", "LAX"]);
    }
}
