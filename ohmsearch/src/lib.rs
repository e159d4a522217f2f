//! Ohmsearch - resistor series/parallel combination search library
//!
//! This library searches a catalog of stocked resistor values for
//! combinations of series and parallel sub-networks whose equivalent
//! resistance matches a target value within a relative tolerance. It is
//! aimed at hardware designers who need a reachable stand-in for a value
//! that is not in the parts drawer.
//!
//! # Quick Start
//!
//! ```no_run
//! use ohmsearch::{format_match, ResistorSearch, SearchRequest};
//! use std::path::Path;
//!
//! let request = SearchRequest::new(2500.0);
//! let report = ResistorSearch::search_file(Path::new("SMD.csv"), &request).unwrap();
//!
//! for m in &report.matches {
//!     println!("{}", format_match(m));
//! }
//! ```
//!
//! # How it works
//!
//! - **Parallel groups**: every multiset of up to `max_parallel` catalog
//!   entries, with its parallel-equivalent resistance
//! - **Series chains**: every multiset of up to `max_series` parallel
//!   groups, accepted when the summed resistance lands strictly inside the
//!   tolerance band
//! - **First-found results**: enumeration stops as soon as `max_results`
//!   matches are collected; shorter chains are tried first
//!
//! Catalog entries with equal values stay distinct (two stocked 100 Ω parts
//! are two parts); `SearchRequest::dedup` collapses them on request.

pub mod catalog;
pub mod core;
pub mod format;
pub mod search;

// Re-export main types
pub use crate::catalog::{
    format_member, format_total, load_catalog, parse_catalog, parse_resistance, Catalog,
    CatalogEntry,
};
pub use crate::core::{ResistorSearch, SearchError, SearchReport, SearchRequest, SearchStats};
pub use crate::format::{format_group, format_match, format_no_match};
pub use crate::search::parallel::{generate_parallel_groups, parallel_equivalent, ParallelGroup};
pub use crate::search::series::{find_matches, Match};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Catalog, Match, ParallelGroup, ResistorSearch, SearchError, SearchReport, SearchRequest,
        SearchStats,
    };
}
