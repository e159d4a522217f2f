//! Core search orchestration shared by the library API and CLI.
//! No terminal or output-format dependencies.

use std::path::Path;

use serde::Serialize;

use crate::catalog::{load_catalog, Catalog};
use crate::search::parallel::generate_parallel_groups;
use crate::search::series::{find_matches, Match};

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Catalog error: {0}")]
    Catalog(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parameters for a combination search (CLI or library callers).
#[derive(Clone, Debug)]
pub struct SearchRequest {
    /// Target equivalent resistance, in ohms. Must be positive.
    pub target: f64,
    /// Relative tolerance: a combination qualifies when
    /// `|total - target| < target * error_fraction` (strict).
    pub error_fraction: f64,
    /// Longest series chain to compose.
    pub max_series: usize,
    /// Largest parallel group to generate.
    pub max_parallel: usize,
    /// Stop after this many matches.
    pub max_results: usize,
    /// Collapse repeated catalog values before searching.
    pub dedup: bool,
}

impl SearchRequest {
    /// A request for `target` ohms with the stock defaults: 0.5% tolerance,
    /// chains of up to two groups of up to two resistors, first ten matches.
    pub fn new(target: f64) -> Self {
        SearchRequest {
            target,
            error_fraction: 0.005,
            max_series: 2,
            max_parallel: 2,
            max_results: 10,
            dedup: false,
        }
    }

    /// Check the request before any enumeration begins.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(self.target > 0.0) {
            return Err(SearchError::InvalidParameter(
                "target resistance must be positive".to_string(),
            ));
        }
        if self.error_fraction < 0.0 {
            return Err(SearchError::InvalidParameter(
                "error fraction must not be negative".to_string(),
            ));
        }
        if self.max_series < 1 {
            return Err(SearchError::InvalidParameter(
                "series chain length must be at least 1".to_string(),
            ));
        }
        if self.max_parallel < 1 {
            return Err(SearchError::InvalidParameter(
                "parallel group size must be at least 1".to_string(),
            ));
        }
        if self.max_results < 1 {
            return Err(SearchError::InvalidParameter(
                "result count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a search: accepted matches in discovery order plus counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub matches: Vec<Match>,
    pub stats: SearchStats,
}

/// Counters owned by the search call; there is no process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Series chains examined, including rejected ones.
    pub examined: u64,
    /// Chains accepted into the match list.
    pub accepted: u64,
    /// Parallel groups generated from the catalog.
    pub groups: u64,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Combination search entry points used by both the library API and the CLI.
pub struct ResistorSearch;

impl ResistorSearch {
    /// Run the full search pipeline against an in-memory catalog.
    ///
    /// The catalog is expanded into parallel groups of up to
    /// `request.max_parallel` members, those groups are composed into series
    /// chains of up to `request.max_series`, and the first
    /// `request.max_results` chains inside the tolerance band are returned.
    /// An empty catalog is valid and reports zero matches.
    pub fn find_combinations(
        catalog: &Catalog,
        request: &SearchRequest,
    ) -> Result<SearchReport, SearchError> {
        request.validate()?;

        let deduplicated;
        let catalog = if request.dedup {
            deduplicated = catalog.deduplicated();
            &deduplicated
        } else {
            catalog
        };

        let groups = generate_parallel_groups(catalog, request.max_parallel)?;
        find_matches(
            &groups,
            request.max_series,
            request.target,
            request.error_fraction,
            request.max_results,
        )
    }

    /// Load a catalog file and search it.
    pub fn search_file(path: &Path, request: &SearchRequest) -> Result<SearchReport, SearchError> {
        let catalog = load_catalog(path)?;
        Self::find_combinations(&catalog, request)
    }
}
