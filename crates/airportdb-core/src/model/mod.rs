// crates/airportdb-core/src/model/mod.rs
pub mod airport;
pub mod db;
pub mod search;

pub use airport::{Airport, DETAIL_PATH_PREFIX};
pub use db::{AirportDb, SearchResults};
