// crates/airportdb-core/src/loader/common_io.rs
use crate::error::{AirportError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps `.gz` files in a Gzip decoder.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        AirportError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(AirportError::InvalidData(format!(
            "{} is gzip compressed but 'compact' is disabled",
            path.display()
        )))
    }
}
