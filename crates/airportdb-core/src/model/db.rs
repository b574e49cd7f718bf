// crates/airportdb-core/src/model/db.rs
use super::Airport;
use crate::config::SearchConfig;
use crate::fetch::FetchState;
use crate::index::SearchIndex;
use serde::Serialize;

/// The airport list together with its search index.
///
/// Records and index are only ever replaced together, so entry *i* of the
/// index always describes airport *i*.
#[derive(Clone, Debug, Default)]
pub struct AirportDb {
    airports: Vec<Airport>,
    index: SearchIndex,
}

impl AirportDb {
    pub fn new(airports: Vec<Airport>) -> Self {
        Self::with_config(airports, SearchConfig::default())
    }

    pub fn with_config(airports: Vec<Airport>, config: SearchConfig) -> Self {
        let index = SearchIndex::build(&airports, &config);
        Self { airports, index }
    }

    /// Swap in a new airport list and rebuild the index.
    pub fn replace(&mut self, airports: Vec<Airport>) {
        self.index = SearchIndex::build(&airports, self.index.config());
        self.airports = airports;
    }

    /// Rebuild the index under a different configuration.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.index = SearchIndex::build(&self.airports, &config);
    }

    /// Apply a fetch outcome: `Ready` replaces the list, anything else keeps it.
    ///
    /// Returns `true` when the list was replaced.
    pub fn apply(&mut self, state: FetchState<Vec<Airport>>) -> bool {
        match state {
            FetchState::Ready(airports) => {
                tracing::info!(airports = airports.len(), "airport list replaced");
                self.replace(airports);
                true
            }
            FetchState::Failed(reason) => {
                tracing::warn!(%reason, "fetch failed; keeping current airport list");
                false
            }
            FetchState::Pending => false,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        self.index.config()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub fn into_airports(self) -> Vec<Airport> {
        self.airports
    }

    pub(crate) fn airport_slice(&self) -> &[Airport] {
        &self.airports
    }
}

impl From<Vec<Airport>> for AirportDb {
    fn from(airports: Vec<Airport>) -> Self {
        Self::new(airports)
    }
}

/// Matches of one filter pass, plus the size of the list searched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResults<'a> {
    pub items: Vec<&'a Airport>,
    pub total: usize,
}

impl<'a> SearchResults<'a> {
    #[inline]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, &'a Airport> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for SearchResults<'a> {
    type Item = &'a Airport;
    type IntoIter = std::vec::IntoIter<&'a Airport>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
