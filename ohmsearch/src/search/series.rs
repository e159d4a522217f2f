//! Series composition and tolerance matching.

use itertools::Itertools;
use serde::Serialize;

use crate::core::{SearchError, SearchReport, SearchStats};
use crate::search::parallel::ParallelGroup;

/// A series chain accepted inside the tolerance band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    /// Parallel groups composing the chain, in generation order.
    pub groups: Vec<ParallelGroup>,
    /// Series total of the group equivalents, in ohms.
    pub total: f64,
}

/// Compose series chains of parallel groups and collect those whose total
/// lands inside the tolerance band.
///
/// Chains of length 1..=`max_chain` are drawn with replacement from `groups`
/// in its given order, shorter chains first. A chain qualifies under the
/// strict test `|total - target| < target * error_fraction`; a total exactly
/// on the band edge is rejected. Every examined chain is counted, and the
/// enumeration returns mid-pass the moment `max_results` matches have been
/// accepted, so the result is the first `max_results` matches in enumeration
/// order, not a best-of selection.
///
/// Finding nothing is a normal outcome: the report then carries an empty
/// match list and the examined count.
pub fn find_matches(
    groups: &[ParallelGroup],
    max_chain: usize,
    target: f64,
    error_fraction: f64,
    max_results: usize,
) -> Result<SearchReport, SearchError> {
    if max_chain < 1 {
        return Err(SearchError::InvalidParameter(
            "series chain length must be at least 1".to_string(),
        ));
    }
    if max_results < 1 {
        return Err(SearchError::InvalidParameter(
            "result count must be at least 1".to_string(),
        ));
    }
    if !(target > 0.0) {
        return Err(SearchError::InvalidParameter(
            "target resistance must be positive".to_string(),
        ));
    }
    if error_fraction < 0.0 {
        return Err(SearchError::InvalidParameter(
            "error fraction must not be negative".to_string(),
        ));
    }

    let tolerance = target * error_fraction;
    let mut matches: Vec<Match> = Vec::new();
    let mut examined: u64 = 0;

    for chain_len in 1..=max_chain {
        for positions in (0..groups.len()).combinations_with_replacement(chain_len) {
            let total: f64 = positions.iter().map(|&i| groups[i].equivalent()).sum();
            examined += 1;
            if (total - target).abs() < tolerance {
                matches.push(Match {
                    groups: positions.iter().map(|&i| groups[i].clone()).collect(),
                    total,
                });
                if matches.len() >= max_results {
                    return Ok(report(matches, examined, groups.len()));
                }
            }
        }
    }
    Ok(report(matches, examined, groups.len()))
}

fn report(matches: Vec<Match>, examined: u64, groups: usize) -> SearchReport {
    let stats = SearchStats {
        examined,
        accepted: matches.len() as u64,
        groups: groups as u64,
    };
    SearchReport { matches, stats }
}
