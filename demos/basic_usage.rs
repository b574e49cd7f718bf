//! Basic usage example for airportdb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled airport list
//! - Inspect the search index
//! - Filter incrementally, the way a search box does per keystroke

use airportdb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== airportdb-rs Basic Usage Example ===\n");

    println!("Loading airport list...");
    let db = AirportDb::load()?;
    println!("✓ Loaded {} airports\n", db.len());

    // Example 1: The composite search keys
    println!("--- Example 1: Search index ---");
    for key in db.index().keys().take(3) {
        println!("  {key}");
    }
    println!("  ... and {} more\n", db.index().len().saturating_sub(3));

    // Example 2: Typing "lon" one character at a time
    println!("--- Example 2: Incremental search ---");
    let typed = "lon";
    for end in 0..=typed.len() {
        let term = &typed[..end];
        let results = db.search(Some(term));
        println!("  {term:>4?} -> {} of {}", results.count(), results.total);
    }
    println!();

    // Example 3: Rendering a result list
    println!("--- Example 3: Results for \"united kingdom\" ---");
    for airport in db.search(Some("united kingdom")) {
        let view = AirportView::from(airport);
        println!("  {}  ({})", view.title(), view.href);
    }
    println!();

    // Example 4: Lookup by code
    println!("--- Example 4: Find by IATA code ---");
    if let Some(a) = db.find_by_iata("cdg") {
        println!("  {} serves {}, {}", a.name, a.city, a.country);
    }

    Ok(())
}
