// crates/airportdb-core/src/text.rs

/// Convert a string into a folded key suitable for indexing and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Zürich` -> `Zurich`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use airportdb_core::text::fold_key;
///
/// assert_eq!(fold_key("Zürich"), "zurich");
/// assert_eq!(fold_key("São Paulo"), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Lowercase `s`, optionally transliterating to ASCII first.
#[inline]
pub fn normalize(s: &str, fold_accents: bool) -> String {
    if fold_accents {
        fold_key(s)
    } else {
        s.to_lowercase()
    }
}
