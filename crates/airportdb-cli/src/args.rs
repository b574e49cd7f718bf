use clap::{Parser, Subcommand};

/// CLI arguments for airportdb
#[derive(Debug, Parser)]
#[command(
    name = "airportdb",
    version,
    about = "Search an airport list by IATA code, name, city or country"
)]
pub struct CliArgs {
    /// Path to the airports JSON (or .json.gz) file, or an http(s) URL when
    /// built with the `fetch` feature. Defaults to the bundled sample.
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Character placed between fields of the search key
    #[arg(short = 'd', long = "delimiter", global = true, default_value_t = ':')]
    pub delimiter: char,

    /// Match the term inside a single field only (no cross-field matches)
    #[arg(long = "per-field", global = true)]
    pub per_field: bool,

    /// Ignore accents when matching (e.g. "zurich" finds "Zürich")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the airport list
    Stats,

    /// List all airports
    List,

    /// Filter airports by a substring of code, name, city or country
    Search {
        /// Search term (case-insensitive). Omit to list everything.
        term: Option<String>,

        /// Print the result listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single airport by IATA code
    Show {
        /// IATA code (e.g. JFK, lhr)
        iata: String,
    },

    /// Print the composite search key of every airport
    Index,
}
