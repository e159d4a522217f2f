//! Ohmsearch CLI - resistor series/parallel combination search from the command line.

use clap::{Args, Parser, Subcommand, ValueEnum};
use ohmsearch::{
    format_match, format_no_match, load_catalog, parse_resistance, Catalog, ResistorSearch,
    SearchReport, SearchRequest,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ohmsearch")]
#[command(about = "Find resistor combinations matching a target resistance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a catalog for series/parallel combinations near a target
    Find(FindArgs),

    /// Inspect a catalog file
    Catalog {
        /// Path to the catalog file
        #[arg(value_name = "FILE", default_value = "SMD.csv")]
        file: PathBuf,

        /// Preview the effect of value deduplication
        #[arg(long)]
        dedup: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct FindArgs {
    /// Target resistance (e.g. '10k', '1M')
    #[arg(short, long)]
    target: String,

    /// Path to the catalog file of stocked resistor values
    #[arg(short = 'v', long, value_name = "FILE", default_value = "SMD.csv")]
    values: PathBuf,

    /// Allowed relative error, 0-1
    #[arg(short, long, default_value_t = 0.005)]
    error: f64,

    /// Most parallel groups chained in series
    #[arg(short, long, default_value_t = 2)]
    series: usize,

    /// Most resistors grouped in parallel
    #[arg(short, long, default_value_t = 2)]
    parallel: usize,

    /// Number of combinations to find
    #[arg(short, long, default_value_t = 10)]
    number: usize,

    /// Collapse repeated catalog values before searching
    #[arg(long)]
    dedup: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Exit with an error code when no combination qualifies
    #[arg(long)]
    fail_if_none: bool,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Find(args) => handle_find(&args),
        Commands::Catalog { file, dedup, format } => handle_catalog(&file, dedup, &format),
    };

    process::exit(exit_code);
}

fn handle_find(args: &FindArgs) -> i32 {
    let target = match parse_resistance(&args.target) {
        Some(ohms) if ohms > 0.0 => ohms,
        _ => {
            eprintln!("Error: Invalid target resistance {}", args.target);
            return 1;
        }
    };

    let catalog = match load_catalog(&args.values) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let request = SearchRequest {
        target,
        error_fraction: args.error,
        max_series: args.series,
        max_parallel: args.parallel,
        max_results: args.number,
        dedup: args.dedup,
    };

    match ResistorSearch::find_combinations(&catalog, &request) {
        Ok(report) => {
            match args.format {
                OutputFormat::Human => output_human(&report, &request, &catalog),
                OutputFormat::Json => output_json(&report, &request, &catalog),
            }
            if args.fail_if_none && report.is_empty() {
                return 1;
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn output_human(report: &SearchReport, request: &SearchRequest, catalog: &Catalog) {
    println!("\nTarget resistance: {} ohms", request.target);
    println!("Loaded {} resistor values.", catalog.len());
    println!();

    if report.is_empty() {
        println!("{}", format_no_match(report.stats.examined));
        return;
    }

    for m in &report.matches {
        println!("{}", format_match(m));
    }
}

fn output_json(report: &SearchReport, request: &SearchRequest, catalog: &Catalog) {
    let matches: Vec<_> = report
        .matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "chain": m.groups.iter().map(|g| {
                    serde_json::json!({
                        "members": g.members().iter().map(|e| e.ohms).collect::<Vec<_>>(),
                        "equivalent": g.equivalent(),
                    })
                }).collect::<Vec<_>>(),
                "total": m.total,
                "relative_error": (m.total - request.target).abs() / request.target,
                "display": format_match(m),
            })
        })
        .collect();

    let output = serde_json::json!({
        "target": request.target,
        "loaded": catalog.len(),
        "matches": matches,
        "stats": {
            "examined": report.stats.examined,
            "accepted": report.stats.accepted,
            "groups": report.stats.groups,
        }
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn handle_catalog(file: &PathBuf, dedup: bool, format: &OutputFormat) -> i32 {
    let catalog = match load_catalog(file) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let min = catalog.values().iter().cloned().fold(f64::INFINITY, f64::min);
    let max = catalog.values().iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let distinct = catalog.deduplicated().len();

    match format {
        OutputFormat::Human => {
            println!("Catalog: {}", file.display());
            println!("Entries: {}", catalog.len());
            if !catalog.is_empty() {
                println!("Smallest: {} ohms", min);
                println!("Largest:  {} ohms", max);
            }
            if dedup {
                println!(
                    "Distinct values: {} ({} duplicates)",
                    distinct,
                    catalog.len() - distinct
                );
            }
        }
        OutputFormat::Json => {
            let mut output = serde_json::json!({
                "file": file.display().to_string(),
                "entries": catalog.len(),
                "values": catalog.values(),
            });
            if !catalog.is_empty() {
                output["smallest"] = serde_json::json!(min);
                output["largest"] = serde_json::json!(max);
            }
            if dedup {
                output["distinct"] = serde_json::json!(distinct);
                output["duplicates"] = serde_json::json!(catalog.len() - distinct);
            }
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
    0
}
