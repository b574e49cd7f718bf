#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use airportdb_wasm::{count_matches, get_airport_count, load_airports, mark_fetch_failed};

const AIRPORTS: &str = r#"[
  {"iata":"JFK","name":"John F Kennedy","city":"New York","country":"USA"},
  {"iata":"LAX","name":"Los Angeles Intl","city":"Los Angeles","country":"USA"}
]"#;

#[wasm_bindgen_test]
fn can_load_and_filter() {
    let n = load_airports(AIRPORTS).unwrap();
    assert_eq!(n, 2);
    assert_eq!(get_airport_count(), 2);

    assert_eq!(count_matches(Some("los".into())), 1);
    assert_eq!(count_matches(Some("USA".into())), 2);
    assert_eq!(count_matches(None), 2);
    assert_eq!(count_matches(Some("xyz".into())), 0);
}

#[wasm_bindgen_test]
fn failed_fetch_keeps_list() {
    load_airports(AIRPORTS).unwrap();
    mark_fetch_failed("503 Service Unavailable");
    assert_eq!(get_airport_count(), 2);
}
