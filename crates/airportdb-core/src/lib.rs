// crates/airportdb-core/src/lib.rs

//! # airportdb-core
//!
//! An airport list plus an incremental search filter.
//!
//! Records are indexed once into lowercase composite keys
//! (`iata:name:city:country`); every keystroke then runs one linear
//! substring scan over those keys. Matches are resolved positionally, so the
//! result is always an ordered subsequence of the input.
//!
//! ```rust
//! use airportdb_core::prelude::*;
//!
//! let db = AirportDb::new(vec![
//!     Airport::new("JFK", "John F Kennedy", "New York", "USA"),
//!     Airport::new("LAX", "Los Angeles Intl", "Los Angeles", "USA"),
//! ]);
//!
//! assert_eq!(db.search(Some("usa")).count(), 2);
//! assert_eq!(db.search(Some("LOS")).items[0].iata, "LAX");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod api;
pub mod common;
pub mod config;
pub mod error;
pub mod fetch;
pub mod index;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod search; // Filter engine
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::{MatchMode, SearchConfig, DEFAULT_DELIMITER};
pub use crate::error::{AirportError, Result};
pub use crate::fetch::FetchState;
pub use crate::index::{build_index, IndexEntry, SearchIndex};
pub use crate::model::{Airport, AirportDb, SearchResults};
pub use crate::search::{filter, filter_positions};
pub use crate::traits::AirportSearch;

pub mod prelude {
    pub use crate::api::{AirportView, Listing};
    pub use crate::{
        build_index, filter, Airport, AirportDb, AirportError, AirportSearch, FetchState,
        MatchMode, Result, SearchConfig, SearchIndex,
    };
}
