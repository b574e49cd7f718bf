//! airportdb — Command-line interface for airportdb-core
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ airportdb stats
//!
//! - Filter by any field (case-insensitive substring)
//!   $ airportdb search los
//!   $ airportdb search USA --json
//!
//! - Details and link for one airport
//!   $ airportdb show lhr
//!
//! Data source
//! -----------
//!
//! By default the CLI loads the sample dataset bundled with `airportdb-core`.
//! Use `--input <path>` for a custom `.json`/`.json.gz` file. Set `RUST_LOG`
//! (e.g. `RUST_LOG=airportdb_core=debug`) to see load and index events.
mod args;

use crate::args::{CliArgs, Commands};
use airportdb_core::api::{AirportView, Listing};
use airportdb_core::loader::{self, Source};
use airportdb_core::{AirportDb, AirportSearch, FetchState, MatchMode, SearchConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    let config = SearchConfig {
        delimiter: args.delimiter,
        match_mode: if args.per_field {
            MatchMode::PerField
        } else {
            MatchMode::Composite
        },
        fold_accents: args.fold_accents,
    };

    // Determine input (default JSON inside airportdb-core)
    let source = match args.input.as_deref() {
        Some(s) => Source::parse(s),
        None => Source::Path(AirportDb::default_data_dir().join(AirportDb::default_dataset_filename())),
    };

    let state = loader::fetch(&source);
    let status = state.status();
    let mut db = AirportDb::with_config(Vec::new(), config);
    db.apply(state);

    match args.command {
        Commands::Stats => {
            let stats = db.stats();
            println!("Airport statistics:");
            println!("  Airports: {}", stats.airports);
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
        }

        Commands::List => {
            for a in db.airports() {
                println!("{} ({})", AirportView::from(a).title(), a.country);
            }
        }

        Commands::Search { term, json } => {
            let listing = search_listing(&db, &status, term.as_deref());

            if json {
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                print_listing(&listing);
            }
        }

        Commands::Show { iata } => match db.find_by_iata(&iata) {
            Some(a) => {
                println!("Airport: {}", a.name);
                println!("IATA: {}", a.iata);
                println!("City: {}", a.city);
                println!("Country: {}", a.country);
                println!("Link: {}", a.href());
            }
            None => {
                tracing::warn!(%iata, "no airport with this IATA code");
                eprintln!("No airport found for: {iata}");
            }
        },

        Commands::Index => {
            for key in db.index().keys() {
                println!("{key}");
            }
        }
    }

    if let FetchState::Failed(reason) = status {
        anyhow::bail!("could not load airports: {reason}");
    }

    Ok(())
}

fn search_listing<'a>(
    db: &'a AirportDb,
    status: &FetchState<()>,
    term: Option<&str>,
) -> Listing<'a> {
    let results = db.search(term);
    tracing::debug!(term = ?term, hits = results.count(), total = results.total, "search");
    Listing::new(status, results)
}

fn print_listing(listing: &Listing<'_>) {
    match listing.count() {
        Some(n) => println!("{} [{n}]", listing.headline()),
        None => println!("{}", listing.headline()),
    }

    if let Listing::Results { items, .. } = listing {
        for v in items {
            println!("{}", v.title());
            println!("    {}  {}", v.country, v.href);
        }
    }
}
