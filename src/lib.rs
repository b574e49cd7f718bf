//! Workspace facade: re-exports `airportdb-core` so the demos under
//! `demos/` can `use airportdb_rs::prelude::*`.
pub use airportdb_core::*;
