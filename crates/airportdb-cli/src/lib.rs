//! airportdb-cli
//! =============
//!
//! Command-line interface for the `airportdb-core` airport list.
//!
//! This crate primarily provides a binary (`airportdb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Basic usage:
//!
//! ```text
//! airportdb --help
//! airportdb stats
//! airportdb search york
//! airportdb --per-field search "york:united"
//! airportdb show jfk
//! ```
//!
//! For programmatic access use the [`airportdb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
