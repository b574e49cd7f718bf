//! Advanced filtering example for airportdb-rs
//!
//! Shows the free functions (`build_index` + `filter`) and the matching
//! options: per-field matching and accent folding.

use airportdb_rs::prelude::*;

fn print_hits(label: &str, hits: &[&Airport]) {
    let codes: Vec<&str> = hits.iter().map(|a| a.iata.as_str()).collect();
    println!("  {label:<28} -> {codes:?}");
}

fn main() -> Result<()> {
    println!("=== airportdb-rs Advanced Filtering Example ===\n");

    let airports = AirportDb::load()?.into_airports();

    // Example 1: Stateless functions over a snapshot
    println!("--- Example 1: build_index + filter ---");
    let index = build_index(&airports);
    print_hits("\"TOKYO\"", &filter(Some("TOKYO"), &airports, &index));
    let first_three: Vec<&Airport> = filter(Some("international"), &airports, &index)
        .into_iter()
        .take(3)
        .collect();
    print_hits("\"international\" (first 3)", &first_three);
    print_hits("\"zzz99\"", &filter(Some("zzz99"), &airports, &index));
    println!();

    // Example 2: Boundary-spanning terms
    println!("--- Example 2: Composite vs per-field matching ---");
    let composite = AirportDb::new(airports.clone());
    let per_field = AirportDb::with_config(airports.clone(), SearchConfig::default().per_field());
    let term = Some("york:united");
    print_hits("composite \"york:united\"", &composite.search(term).items);
    print_hits("per-field \"york:united\"", &per_field.search(term).items);
    println!();

    // Example 3: Accent folding
    println!("--- Example 3: Accent folding ---");
    let plain = AirportDb::new(airports.clone());
    let folded = AirportDb::with_config(airports, SearchConfig::default().with_accent_folding(true));
    print_hits("plain \"zurich\"", &plain.search(Some("zurich")).items);
    print_hits("folded \"zurich\"", &folded.search(Some("zurich")).items);
    print_hits("folded \"munchen\"", &folded.search(Some("munchen")).items);

    Ok(())
}
