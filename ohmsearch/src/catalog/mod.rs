//! Resistor catalog model and loading.

pub mod loader;
pub mod units;

// Re-export for convenience
pub use loader::{load_catalog, parse_catalog};
pub use units::{format_member, format_total, parse_resistance};

use serde::Serialize;

/// An ordered set of stocked resistor values, in ohms.
///
/// Entry order is preserved and entries with equal values keep their own
/// identity: a catalog listing 100 Ω twice offers two distinct physical
/// parts, and a combination may use both. [`Catalog::deduplicated`] is the
/// explicit opt-out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    values: Vec<f64>,
}

/// A single catalog entry: its position in the source catalog and its value.
///
/// The position is what keeps equal-valued entries distinct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub index: usize,
    pub ohms: f64,
}

impl Catalog {
    pub fn new(values: Vec<f64>) -> Self {
        Catalog { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn entry(&self, index: usize) -> CatalogEntry {
        CatalogEntry {
            index,
            ohms: self.values[index],
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(index, &ohms)| CatalogEntry { index, ohms })
    }

    /// Order-preserving removal of repeated values; the first occurrence
    /// keeps its position order.
    ///
    /// Repeated values inflate the search space with numerically redundant
    /// combinations, so this pre-pass is offered as an explicit option. It is
    /// never applied implicitly, since distinct parts with equal values are
    /// otherwise searchable as distinct.
    pub fn deduplicated(&self) -> Catalog {
        let mut values: Vec<f64> = Vec::with_capacity(self.values.len());
        for &v in &self.values {
            if !values.iter().any(|&seen| seen == v) {
                values.push(v);
            }
        }
        Catalog { values }
    }
}
