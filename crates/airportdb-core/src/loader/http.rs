// crates/airportdb-core/src/loader/http.rs
use crate::error::Result;
use crate::model::Airport;

/// Blocking GET of a JSON airport array. Non-2xx statuses are errors.
pub fn fetch_from_url(url: &str) -> Result<Vec<Airport>> {
    tracing::info!(%url, "fetching airports");

    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.bytes()?;
    let airports = super::read_airports(body.as_ref())?;

    tracing::info!(%url, airports = airports.len(), "fetched airports");
    Ok(airports)
}
