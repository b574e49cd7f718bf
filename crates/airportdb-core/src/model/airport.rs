// crates/airportdb-core/src/model/airport.rs
use serde::{Deserialize, Serialize};

/// Path prefix of the per-airport detail page.
pub const DETAIL_PATH_PREFIX: &str = "/airports/";

/// A single airport as delivered by the airports API.
///
/// Missing keys deserialize to empty strings; they still take part in the
/// search key as empty segments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, e.g. `"JFK"`. Assumed unique across the list.
    #[serde(default)]
    pub iata: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl Airport {
    pub fn new(
        iata: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            iata: iata.into(),
            name: name.into(),
            city: city.into(),
            country: country.into(),
        }
    }

    /// The four searchable fields, in key order.
    #[inline]
    pub fn search_fields(&self) -> [&str; 4] {
        [&self.iata, &self.name, &self.city, &self.country]
    }

    /// Lowercase IATA code, used as the link key.
    pub fn slug(&self) -> String {
        self.iata.to_lowercase()
    }

    /// Link to the detail page, e.g. `/airports/jfk`.
    pub fn href(&self) -> String {
        format!("{DETAIL_PATH_PREFIX}{}", self.slug())
    }
}
