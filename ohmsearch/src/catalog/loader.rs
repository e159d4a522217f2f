//! Catalog file loading.
//!
//! Catalog files are plain text: resistor values separated by commas and/or
//! line breaks, each with an optional `k`/`M` suffix. Entries that do not
//! parse as positive resistances are dropped with a warning and never reach
//! the search core.

use std::fs;
use std::path::Path;

use crate::catalog::units::parse_resistance;
use crate::catalog::Catalog;
use crate::core::SearchError;

/// Load a catalog file from disk.
///
/// An unreadable file is an error; a readable file with no usable entries
/// yields an empty catalog (the search then reports zero matches).
pub fn load_catalog(path: &Path) -> Result<Catalog, SearchError> {
    let text = fs::read_to_string(path)
        .map_err(|e| SearchError::Catalog(format!("cannot read {}: {}", path.display(), e)))?;
    let catalog = parse_catalog(&text);
    tracing::debug!(
        "Loaded {} resistor values from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Parse catalog text that has already been read.
pub fn parse_catalog(text: &str) -> Catalog {
    let mut values = Vec::new();
    for token in text.split([',', '\n', '\r']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match parse_resistance(token) {
            Some(ohms) if ohms > 0.0 => values.push(ohms),
            Some(_) => {
                tracing::warn!("Ignoring non-positive value {:?} in catalog", token);
            }
            None => {
                tracing::warn!("Invalid value {:?} in catalog, skipping", token);
            }
        }
    }
    Catalog::new(values)
}
