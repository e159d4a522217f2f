//! Tuned search example: wider networks, tighter tolerance, deduplication.

use ohmsearch::{format_match, Catalog, ResistorSearch, SearchRequest};

fn main() -> Result<(), ohmsearch::SearchError> {
    // A small drawer with a duplicated part.
    let catalog = Catalog::new(vec![
        100.0, 100.0, 220.0, 330.0, 470.0, 680.0, 1000.0, 2200.0, 4700.0,
    ]);

    let request = SearchRequest {
        error_fraction: 0.002,
        max_series: 3,
        max_parallel: 3,
        max_results: 5,
        dedup: true,
        ..SearchRequest::new(825.0)
    };

    let report = ResistorSearch::find_combinations(&catalog, &request)?;

    println!(
        "Examined {} chains over {} parallel groups, accepted {}",
        report.stats.examined, report.stats.groups, report.stats.accepted
    );
    for m in &report.matches {
        println!("{}", format_match(m));
    }

    Ok(())
}
