// crates/airportdb-core/src/model/search.rs
use super::db::{AirportDb, SearchResults};
use super::Airport;
use crate::common::DbStats;
use crate::traits::AirportSearch;
use std::collections::HashSet;

impl AirportSearch for AirportDb {
    fn stats(&self) -> DbStats {
        let airports = self.airport_slice();
        let countries: HashSet<String> =
            airports.iter().map(|a| a.country.to_lowercase()).collect();
        let cities: HashSet<String> = airports.iter().map(|a| a.city.to_lowercase()).collect();

        DbStats {
            airports: airports.len(),
            countries: countries.len(),
            cities: cities.len(),
        }
    }

    fn airports(&self) -> &[Airport] {
        self.airport_slice()
    }

    fn find_by_iata(&self, iata: &str) -> Option<&Airport> {
        let iata = iata.trim();
        self.airport_slice()
            .iter()
            .find(|a| a.iata.eq_ignore_ascii_case(iata))
    }

    fn search(&self, term: Option<&str>) -> SearchResults<'_> {
        let airports = self.airport_slice();
        SearchResults {
            items: self.index().select(term, airports),
            total: airports.len(),
        }
    }

    fn count_matches(&self, term: Option<&str>) -> usize {
        self.index().positions(term).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchState;

    fn db() -> AirportDb {
        AirportDb::new(vec![
            Airport::new("JFK", "John F Kennedy", "New York", "USA"),
            Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA"),
            Airport::new("LHR", "Heathrow", "London", "United Kingdom"),
        ])
    }

    #[test]
    fn stats_count_distinct_values() {
        let s = db().stats();
        assert_eq!(s.airports, 3);
        assert_eq!(s.countries, 2);
        assert_eq!(s.cities, 3);
    }

    #[test]
    fn find_by_iata_ignores_case() {
        let db = db();
        assert_eq!(db.find_by_iata("lhr").map(|a| a.city.as_str()), Some("London"));
        assert!(db.find_by_iata("CDG").is_none());
    }

    #[test]
    fn search_reports_count_and_total() {
        let db = db();
        let res = db.search(Some("usa"));
        assert_eq!(res.count(), 2);
        assert_eq!(res.total, 3);
        assert_eq!(db.count_matches(Some("usa")), 2);
        assert_eq!(db.search(None).count(), 3);
    }

    #[test]
    fn replace_rebuilds_index() {
        let mut db = db();
        db.replace(vec![Airport::new("CDG", "Charles de Gaulle", "Paris", "France")]);
        assert_eq!(db.index().len(), 1);
        assert_eq!(db.count_matches(Some("paris")), 1);
        assert_eq!(db.count_matches(Some("usa")), 0);
    }

    #[test]
    fn failed_fetch_keeps_records() {
        let mut db = db();
        assert!(!db.apply(FetchState::Failed("timeout".into())));
        assert!(!db.apply(FetchState::Pending));
        assert_eq!(db.len(), 3);

        assert!(db.apply(FetchState::Ready(Vec::new())));
        assert!(db.is_empty());
        assert!(db.index().is_empty());
    }
}
