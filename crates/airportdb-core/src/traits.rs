// crates/airportdb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{Airport, SearchResults};

/// Read-side operations over an airport collection.
pub trait AirportSearch {
    fn stats(&self) -> DbStats;

    /// All airports, in source order.
    ///
    /// # Example
    ///
    /// ```
    /// use airportdb_core::{Airport, AirportDb, AirportSearch};
    ///
    /// let db = AirportDb::new(vec![Airport::new("JFK", "John F Kennedy", "New York", "USA")]);
    /// assert_eq!(db.airports().len(), 1);
    /// ```
    fn airports(&self) -> &[Airport];

    /// Case-insensitive lookup by IATA code (`"jfk"` finds `JFK`).
    fn find_by_iata(&self, iata: &str) -> Option<&Airport>;

    /// Incremental filter. `None` or `""` returns every airport.
    fn search(&self, term: Option<&str>) -> SearchResults<'_>;

    /// Number of matches without materializing the result list.
    fn count_matches(&self, term: Option<&str>) -> usize {
        self.search(term).count()
    }
}
