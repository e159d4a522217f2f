//! Parallel sub-network enumeration.

use itertools::Itertools;
use serde::Serialize;

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::SearchError;

/// A multiset of catalog entries wired in parallel.
///
/// Members are kept in non-decreasing catalog position order, so two catalog
/// entries with the same value form distinct groups. The equivalent
/// resistance is fixed at construction and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelGroup {
    members: Vec<CatalogEntry>,
    equivalent: f64,
}

impl ParallelGroup {
    fn new(members: Vec<CatalogEntry>) -> Self {
        let equivalent = parallel_equivalent(members.iter().map(|m| m.ohms));
        ParallelGroup { members, equivalent }
    }

    pub fn members(&self) -> &[CatalogEntry] {
        &self.members
    }

    /// Equivalent resistance of the group, in ohms.
    pub fn equivalent(&self) -> f64 {
        self.equivalent
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Equivalent resistance of values wired in parallel: the reciprocal of the
/// sum of reciprocals.
pub fn parallel_equivalent(values: impl IntoIterator<Item = f64>) -> f64 {
    1.0 / values.into_iter().map(|v| 1.0 / v).sum::<f64>()
}

/// Enumerate every parallel group of size 1..=`max_size` over the catalog.
///
/// Groups are produced size-major; within a size, members follow
/// combinations-with-replacement order over catalog positions (non-decreasing
/// position sequences). The series composer consumes the list in exactly this
/// order, so the order is part of the contract.
///
/// An empty catalog yields an empty list. A non-positive or non-finite value
/// in the catalog is a data error; the loader filters such entries, so this
/// only triggers for directly constructed catalogs.
pub fn generate_parallel_groups(
    catalog: &Catalog,
    max_size: usize,
) -> Result<Vec<ParallelGroup>, SearchError> {
    if max_size < 1 {
        return Err(SearchError::InvalidParameter(
            "parallel group size must be at least 1".to_string(),
        ));
    }
    if let Some(bad) = catalog
        .values()
        .iter()
        .find(|v| !v.is_finite() || **v <= 0.0)
    {
        return Err(SearchError::Catalog(format!(
            "resistor value {} is not a positive resistance",
            bad
        )));
    }

    let mut groups = Vec::new();
    for size in 1..=max_size {
        for positions in (0..catalog.len()).combinations_with_replacement(size) {
            let members = positions.into_iter().map(|i| catalog.entry(i)).collect();
            groups.push(ParallelGroup::new(members));
        }
    }
    Ok(groups)
}
