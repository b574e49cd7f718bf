// crates/airportdb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, gzip, HTTP) and hands a parsed airport
//! list to [`AirportDb`]. Every entry point either returns a
//! [`Result`] or, through [`fetch`], the tri-state [`FetchState`].

use crate::error::{AirportError, Result};
use crate::fetch::FetchState;
use crate::model::{Airport, AirportDb};
use std::collections::HashSet;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;
#[cfg(feature = "fetch")]
mod http;

pub use common_io::open_stream;
#[cfg(feature = "fetch")]
pub use http::fetch_from_url;

/// Where the airport list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// JSON (or `.json.gz` with the `compact` feature) on disk.
    Path(PathBuf),
    /// An HTTP endpoint returning the JSON array, e.g. `.../api/airports`.
    #[cfg(feature = "fetch")]
    Url(String),
}

impl Source {
    /// Anything starting with `http://` or `https://` is a URL when the
    /// `fetch` feature is on; everything else is a path.
    pub fn parse(s: &str) -> Self {
        #[cfg(feature = "fetch")]
        if s.starts_with("http://") || s.starts_with("https://") {
            return Source::Url(s.to_string());
        }
        Source::Path(PathBuf::from(s))
    }
}

/// Parse a JSON array of airports from `reader`.
pub fn read_airports<R: Read>(reader: R) -> Result<Vec<Airport>> {
    let airports: Vec<Airport> = serde_json::from_reader(reader)?;
    warn_on_duplicate_iata(&airports);
    Ok(airports)
}

/// Parse a JSON array of airports from a file.
pub fn load_airports(path: impl AsRef<Path>) -> Result<Vec<Airport>> {
    let path = path.as_ref();
    let reader = open_stream(path)?;
    let airports = read_airports(reader)?;
    tracing::info!(path = %path.display(), airports = airports.len(), "loaded airports");
    Ok(airports)
}

/// Load from any [`Source`], folding the outcome into a [`FetchState`].
pub fn fetch(source: &Source) -> FetchState<Vec<Airport>> {
    let res = match source {
        Source::Path(p) => load_airports(p),
        #[cfg(feature = "fetch")]
        Source::Url(u) => fetch_from_url(u),
    };
    if let Err(e) = &res {
        tracing::error!(error = %e, "could not load airports");
    }
    res.into()
}

/// Lookups by IATA code return the first record; later duplicates are
/// still searchable but unreachable by code.
fn warn_on_duplicate_iata(airports: &[Airport]) {
    let mut seen = HashSet::with_capacity(airports.len());
    for a in airports {
        if !seen.insert(a.iata.to_ascii_lowercase()) {
            tracing::warn!(iata = %a.iata, "duplicate IATA code in airport list");
        }
    }
}

impl AirportDb {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "airports.json"
    }

    /// Load the bundled sample dataset.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_airports(path)?))
    }

    pub fn load_from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self::new(read_airports(reader)?))
    }

    pub fn load_from_source(source: &Source) -> Result<Self> {
        match fetch(source) {
            FetchState::Ready(airports) => Ok(Self::new(airports)),
            FetchState::Failed(reason) => Err(AirportError::NotFound(reason)),
            FetchState::Pending => Err(AirportError::InvalidData(
                "source did not produce a result".into(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AirportSearch;

    #[test]
    fn reads_json_array() {
        let json = r#"[
            {"iata":"JFK","name":"John F Kennedy","city":"New York","country":"USA"},
            {"iata":"LAX","name":"Los Angeles Intl","city":"Los Angeles","country":"USA","tz":"x"}
        ]"#;
        let db = AirportDb::load_from_reader(json.as_bytes()).unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.find_by_iata("lax").unwrap().city, "Los Angeles");
    }

    #[test]
    fn rejects_non_array() {
        let err = read_airports(r#"{"iata":"JFK"}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, AirportError::Json(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_airports("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AirportError::NotFound(_)));
        let state = fetch(&Source::Path("/definitely/not/here.json".into()));
        assert!(state.is_failed());
    }

    #[test]
    fn source_parse_defaults_to_path() {
        assert_eq!(
            Source::parse("data/airports.json"),
            Source::Path(PathBuf::from("data/airports.json"))
        );
    }
}
