// crates/airportdb-core/src/common.rs
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`crate::AirportSearch::stats`]. `countries` and `cities`
/// count distinct values case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub airports: usize,
    pub countries: usize,
    pub cities: usize,
}
