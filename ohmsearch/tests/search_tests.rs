//! Tests for the combination-search core

use ohmsearch::prelude::*;
use ohmsearch::generate_parallel_groups;

fn binomial(n: usize, k: usize) -> u64 {
    let mut result = 1u64;
    for i in 0..k {
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// Number of multisets of size 1..=max_size drawn with replacement from n entries.
fn multiset_count(n: usize, max_size: usize) -> u64 {
    (1..=max_size).map(|g| binomial(n + g - 1, g)).sum()
}

#[test]
fn test_group_count_matches_multiset_formula() {
    let catalog = Catalog::new(vec![100.0, 220.0, 330.0, 470.0]);

    for max_size in 1..=3 {
        let groups = generate_parallel_groups(&catalog, max_size).unwrap();
        assert_eq!(
            groups.len() as u64,
            multiset_count(catalog.len(), max_size),
            "group count for max_size {} should follow the multiset formula",
            max_size
        );
    }
}

#[test]
fn test_equivalent_never_exceeds_smallest_member() {
    let catalog = Catalog::new(vec![100.0, 220.0, 330.0, 470.0, 1000.0]);
    let groups = generate_parallel_groups(&catalog, 3).unwrap();

    for group in &groups {
        let smallest = group
            .members()
            .iter()
            .map(|m| m.ohms)
            .fold(f64::INFINITY, f64::min);
        assert!(
            group.equivalent() <= smallest + 1e-9,
            "parallel equivalent {} should not exceed smallest member {}",
            group.equivalent(),
            smallest
        );
    }
}

#[test]
fn test_equal_values_make_distinct_groups() {
    let catalog = Catalog::new(vec![100.0, 100.0]);
    let groups = generate_parallel_groups(&catalog, 2).unwrap();

    // Two size-1 groups (one per entry) plus {0,0}, {0,1}, {1,1}.
    assert_eq!(groups.len(), 5);
    assert_eq!(groups[0].equivalent(), groups[1].equivalent());
    assert_ne!(groups[0].members()[0].index, groups[1].members()[0].index);
}

#[test]
fn test_no_single_value_near_target() {
    let catalog = Catalog::new(vec![100.0, 220.0, 330.0]);
    let request = SearchRequest {
        error_fraction: 0.05,
        max_series: 1,
        max_parallel: 1,
        max_results: 5,
        ..SearchRequest::new(250.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert!(report.is_empty(), "no single value is within 5% of 250");
    assert_eq!(report.stats.examined, 3);
    assert_eq!(report.stats.accepted, 0);
}

#[test]
fn test_parallel_pair_hits_target() {
    let catalog = Catalog::new(vec![100.0, 100.0]);
    let request = SearchRequest {
        error_fraction: 0.01,
        max_series: 1,
        max_parallel: 2,
        max_results: 1,
        ..SearchRequest::new(50.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert_eq!(report.len(), 1);
    let m = &report.matches[0];
    assert!((m.total - 50.0).abs() < 1e-9);
    assert_eq!(m.groups.len(), 1);
    assert_eq!(m.groups[0].members().len(), 2);
}

#[test]
fn test_series_chain_hits_target() {
    let catalog = Catalog::new(vec![1000.0, 2000.0]);
    let request = SearchRequest {
        error_fraction: 0.001,
        max_series: 2,
        max_parallel: 1,
        max_results: 1,
        ..SearchRequest::new(3000.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert_eq!(report.len(), 1);
    assert!((report.matches[0].total - 3000.0).abs() < 1e-9);
}

#[test]
fn test_never_more_than_max_results() {
    // Four stocked 100 Ω parts each match the target on their own.
    let catalog = Catalog::new(vec![100.0, 100.0, 100.0, 100.0]);
    let request = SearchRequest {
        error_fraction: 0.01,
        max_series: 1,
        max_parallel: 1,
        max_results: 3,
        ..SearchRequest::new(100.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert_eq!(report.len(), 3);
    // The cutoff fires mid-pass: the fourth candidate is never examined.
    assert_eq!(report.stats.examined, 3);
}

#[test]
fn test_every_match_strictly_inside_band() {
    let catalog = Catalog::new(vec![100.0, 220.0, 330.0, 470.0, 680.0, 1000.0]);
    let request = SearchRequest {
        error_fraction: 0.05,
        max_series: 2,
        max_parallel: 2,
        max_results: 20,
        ..SearchRequest::new(500.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert!(!report.is_empty());
    for m in &report.matches {
        assert!(
            (m.total - 500.0).abs() < 500.0 * 0.05,
            "match {} outside the band",
            m.total
        );
    }
}

#[test]
fn test_search_is_deterministic() {
    let catalog = Catalog::new(vec![100.0, 220.0, 330.0, 470.0, 680.0]);
    let request = SearchRequest {
        error_fraction: 0.02,
        max_series: 2,
        max_parallel: 2,
        max_results: 10,
        ..SearchRequest::new(400.0)
    };

    let first = ResistorSearch::find_combinations(&catalog, &request).unwrap();
    let second = ResistorSearch::find_combinations(&catalog, &request).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let catalog = Catalog::new(vec![100.0]);
    let base = SearchRequest::new(100.0);

    let bad_requests = [
        SearchRequest { target: 0.0, ..base.clone() },
        SearchRequest { target: -5.0, ..base.clone() },
        SearchRequest { error_fraction: -0.1, ..base.clone() },
        SearchRequest { max_series: 0, ..base.clone() },
        SearchRequest { max_parallel: 0, ..base.clone() },
        SearchRequest { max_results: 0, ..base.clone() },
    ];

    for request in &bad_requests {
        let result = ResistorSearch::find_combinations(&catalog, request);
        assert!(
            matches!(result, Err(SearchError::InvalidParameter(_))),
            "request {:?} should be rejected",
            request
        );
    }
}

#[test]
fn test_empty_catalog_is_valid_input() {
    let report =
        ResistorSearch::find_combinations(&Catalog::default(), &SearchRequest::new(100.0)).unwrap();

    assert!(report.is_empty());
    assert_eq!(report.stats.examined, 0);
    assert_eq!(report.stats.groups, 0);
}

#[test]
fn test_dedup_shrinks_the_search_space() {
    let catalog = Catalog::new(vec![100.0, 100.0, 220.0]);
    let base = SearchRequest {
        error_fraction: 0.05,
        max_series: 1,
        max_parallel: 2,
        max_results: 10,
        ..SearchRequest::new(50.0)
    };

    let full = ResistorSearch::find_combinations(&catalog, &base).unwrap();
    let deduped = ResistorSearch::find_combinations(
        &catalog,
        &SearchRequest { dedup: true, ..base },
    )
    .unwrap();

    // Three entries give 3 + 6 groups; after dedup two entries give 2 + 3.
    assert_eq!(full.stats.groups, 9);
    assert_eq!(deduped.stats.groups, 5);
    // Both still find the 100 || 100 pair at 50 ohms.
    assert!(!full.is_empty());
    assert!(!deduped.is_empty());
}
