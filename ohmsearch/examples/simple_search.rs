//! Simple search example: load a catalog and print matching combinations.

use ohmsearch::{format_match, format_no_match, ResistorSearch, SearchRequest};
use std::path::Path;

fn main() -> Result<(), ohmsearch::SearchError> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "SMD.csv".to_string());
    let target = args
        .next()
        .and_then(|s| ohmsearch::parse_resistance(&s))
        .unwrap_or(2500.0);
    let path = Path::new(&path);

    if !path.exists() {
        eprintln!("File not found: {}", path.display());
        eprintln!("Usage: cargo run --example simple_search [catalog.csv] [target]");
        std::process::exit(1);
    }

    let request = SearchRequest::new(target);
    let report = ResistorSearch::search_file(path, &request)?;

    println!("Target resistance: {} ohms", target);
    println!("Combinations examined: {}", report.stats.examined);
    println!();

    if report.is_empty() {
        println!("{}", format_no_match(report.stats.examined));
    } else {
        for m in &report.matches {
            println!("{}", format_match(m));
        }
    }

    Ok(())
}
