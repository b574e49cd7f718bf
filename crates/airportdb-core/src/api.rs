// crates/airportdb-core/src/api.rs

//! Serializable views for front-ends (CLI `--json`, WASM).

use crate::fetch::FetchState;
use crate::model::{Airport, SearchResults};
use serde::Serialize;

/// One airport as a front-end renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AirportView<'a> {
    pub iata: &'a str,
    pub name: &'a str,
    pub city: &'a str,
    pub country: &'a str,
    pub href: String,
}

impl<'a> From<&'a Airport> for AirportView<'a> {
    fn from(a: &'a Airport) -> Self {
        Self {
            iata: &a.iata,
            name: &a.name,
            city: &a.city,
            country: &a.country,
            href: a.href(),
        }
    }
}

impl AirportView<'_> {
    /// `"John F Kennedy, New York - JFK"`.
    pub fn title(&self) -> String {
        format!("{}, {} - {}", self.name, self.city, self.iata)
    }
}

pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Something went wrong... Please try refreshing the page.";
pub const EMPTY_MESSAGE: &str = "No airports found";
pub const RESULTS_MESSAGE: &str = "All Airports";

/// What the result area of the page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Listing<'a> {
    Loading,
    Error { reason: String },
    Empty,
    Results {
        count: usize,
        items: Vec<AirportView<'a>>,
    },
}

impl<'a> Listing<'a> {
    /// Loading wins over error, error wins over the result list.
    pub fn new(status: &FetchState<()>, results: SearchResults<'a>) -> Self {
        match status {
            FetchState::Pending => Listing::Loading,
            FetchState::Failed(reason) => Listing::Error {
                reason: reason.clone(),
            },
            FetchState::Ready(()) if results.is_empty() => Listing::Empty,
            FetchState::Ready(()) => {
                let items: Vec<AirportView<'a>> =
                    results.into_iter().map(AirportView::from).collect();
                Listing::Results {
                    count: items.len(),
                    items,
                }
            }
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            Listing::Loading => LOADING_MESSAGE,
            Listing::Error { .. } => ERROR_MESSAGE,
            Listing::Empty => EMPTY_MESSAGE,
            Listing::Results { .. } => RESULTS_MESSAGE,
        }
    }

    /// Badge count next to the headline, where one is shown.
    pub fn count(&self) -> Option<usize> {
        match self {
            Listing::Empty => Some(0),
            Listing::Results { count, .. } => Some(*count),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AirportDb, AirportSearch};

    fn db() -> AirportDb {
        AirportDb::new(vec![Airport::new("JFK", "John F Kennedy", "New York", "USA")])
    }

    #[test]
    fn view_carries_href_and_title() {
        let a = Airport::new("JFK", "John F Kennedy", "New York", "USA");
        let v = AirportView::from(&a);
        assert_eq!(v.href, "/airports/jfk");
        assert_eq!(v.title(), "John F Kennedy, New York - JFK");
    }

    #[test]
    fn listing_follows_status_then_results() {
        let db = db();
        assert_eq!(Listing::new(&FetchState::Pending, db.search(None)), Listing::Loading);

        let err = Listing::new(&FetchState::Failed("500".into()), db.search(None));
        assert_eq!(err.headline(), ERROR_MESSAGE);
        assert_eq!(err.count(), None);

        let empty = Listing::new(&FetchState::Ready(()), db.search(Some("zzz99")));
        assert_eq!(empty.headline(), EMPTY_MESSAGE);
        assert_eq!(empty.count(), Some(0));

        let full = Listing::new(&FetchState::Ready(()), db.search(Some("kennedy")));
        assert_eq!(full.headline(), RESULTS_MESSAGE);
        assert_eq!(full.count(), Some(1));
    }

    #[test]
    fn listing_serializes_with_kind_tag() {
        let db = db();
        let listing = Listing::new(&FetchState::Ready(()), db.search(None));
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["kind"], "results");
        assert_eq!(json["count"], 1);
        assert_eq!(json["items"][0]["href"], "/airports/jfk");
    }
}
