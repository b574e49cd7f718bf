//! Error handling example for airportdb-rs
//!
//! Demonstrates the fetch lifecycle: pending, failed and ready states, and
//! how a failed fetch leaves the current list in place.

use airportdb_rs::loader::{fetch, Source};
use airportdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== airportdb-rs Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a missing file ---");
    match AirportDb::load_from_path("does/not/exist.json") {
        Ok(db) => println!("✓ Loaded {} airports", db.len()),
        Err(e) => println!("✗ Failed to load: {e}"),
    }
    println!();

    // Example 2: The tri-state fetch result
    println!("--- Example 2: Fetch states and the listing ---");
    let mut db = AirportDb::default();

    let pending: FetchState<()> = FetchState::Pending;
    println!("  {}", Listing::new(&pending, db.search(None)).headline());

    let ok = fetch(&Source::Path(
        AirportDb::default_data_dir().join(AirportDb::default_dataset_filename()),
    ));
    let status = ok.status();
    db.apply(ok);
    let listing = Listing::new(&status, db.search(None));
    println!("  {} [{}]", listing.headline(), listing.count().unwrap_or(0));

    // Example 3: A failed refresh keeps the data
    println!("--- Example 3: Failed refresh ---");
    let failed = fetch(&Source::Path("does/not/exist.json".into()));
    let status = failed.status();
    db.apply(failed);
    println!("  {}", Listing::new(&status, db.search(None)).headline());
    println!("  Airports still loaded: {}", db.len());

    // Example 4: A search with no hits is not an error
    println!("--- Example 4: No matches ---");
    let listing = Listing::new(&FetchState::Ready(()), db.search(Some("zzz99")));
    println!("  {} [{}]", listing.headline(), listing.count().unwrap_or(0));

    Ok(())
}
