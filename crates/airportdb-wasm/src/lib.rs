//! airportdb-wasm — WebAssembly bindings for airportdb-core
//!
//! The page fetches `/api/airports` itself and hands the JSON body to
//! [`load_airports`]. Every keystroke then calls [`search_airports`] (or
//! [`get_listing`] for the full loading / error / empty / results state).
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_airports, mark_fetch_failed, get_listing } from 'airportdb-wasm';
//!
//! await init();
//! try {
//!   const body = await (await fetch('/api/airports')).text();
//!   load_airports(body);
//! } catch (e) {
//!   mark_fetch_failed(String(e));
//! }
//!
//! input.addEventListener('input', () => render(get_listing(input.value)));
//! ```
//!
//! Notes
//! -----
//! - State lives in a single module-global session guarded by a lock.
//! - A failed fetch keeps whatever list was loaded before.
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use wasm_bindgen::prelude::*;

use airportdb_core::api::{AirportView, Listing};
use airportdb_core::loader::read_airports;
use airportdb_core::{AirportDb, AirportSearch, FetchState, MatchMode, SearchConfig};
use serde_json::json;
use serde_wasm_bindgen::to_value;

struct Session {
    db: AirportDb,
    status: FetchState<()>,
}

static SESSION: OnceLock<RwLock<Session>> = OnceLock::new();

fn session() -> &'static RwLock<Session> {
    SESSION.get_or_init(|| {
        RwLock::new(Session {
            db: AirportDb::default(),
            status: FetchState::Pending,
        })
    })
}

fn read() -> RwLockReadGuard<'static, Session> {
    session().read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Session> {
    session().write().unwrap_or_else(PoisonError::into_inner)
}

fn log(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    log("Initializing airportdb WASM module...");
    let _ = session();
}

/* --------------------------------------------------------------------------
   Data lifecycle
-------------------------------------------------------------------------- */

/// Replace the airport list with the parsed JSON array. Returns the count.
///
/// On a parse error the previous list is kept and the session is marked
/// failed.
#[wasm_bindgen]
pub fn load_airports(json: &str) -> Result<usize, JsValue> {
    match read_airports(json.as_bytes()) {
        Ok(airports) => {
            let mut s = write();
            s.db.apply(FetchState::Ready(airports));
            s.status = FetchState::Ready(());
            log(&format!("✓ Loaded {} airports", s.db.len()));
            Ok(s.db.len())
        }
        Err(e) => {
            let reason = e.to_string();
            write().status = FetchState::Failed(reason.clone());
            Err(JsValue::from_str(&reason))
        }
    }
}

/// A new request is in flight.
#[wasm_bindgen]
pub fn mark_loading() {
    write().status = FetchState::Pending;
}

/// The request failed; the current list stays as it is.
#[wasm_bindgen]
pub fn mark_fetch_failed(reason: &str) {
    log(&format!("✗ Fetch failed: {reason}"));
    write().status = FetchState::Failed(reason.to_string());
}

/// Switch matching strategy. Rebuilds the index.
#[wasm_bindgen]
pub fn configure(per_field: bool, fold_accents: bool) {
    let config = SearchConfig {
        match_mode: if per_field {
            MatchMode::PerField
        } else {
            MatchMode::Composite
        },
        fold_accents,
        ..SearchConfig::default()
    };
    write().db.set_config(config);
}

/* --------------------------------------------------------------------------
   Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_airport_count() -> usize {
    read().db.len()
}

#[wasm_bindgen]
pub fn count_matches(term: Option<String>) -> usize {
    read().db.count_matches(term.as_deref())
}

/// Matching airports as an array of `{iata, name, city, country, href}`.
#[wasm_bindgen]
pub fn search_airports(term: Option<String>) -> Result<JsValue, JsValue> {
    let s = read();
    let items: Vec<AirportView<'_>> = s
        .db
        .search(term.as_deref())
        .into_iter()
        .map(AirportView::from)
        .collect();

    Ok(to_value(&items)?)
}

/// The full result area state: `{kind: "loading" | "error" | "empty" | "results", ...}`
/// plus the headline text to show.
#[wasm_bindgen]
pub fn get_listing(term: Option<String>) -> Result<JsValue, JsValue> {
    let s = read();
    let listing = Listing::new(&s.status, s.db.search(term.as_deref()));
    let out = json!({
        "headline": listing.headline(),
        "count": listing.count(),
        "listing": listing,
    });

    Ok(to_value(&out)?)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = read().db.stats();
    Ok(to_value(&stats)?)
}
