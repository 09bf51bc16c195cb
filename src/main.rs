use anyhow::{Context, Result};
use clap::Parser;
use lacuna::category::CategoryTable;
use lacuna::cli::{Cli, OutputFormat};
use lacuna::holes::{find_hole_reports, HoleCriteria, HoleReport};
use lacuna::json_output::JsonOutput;
use lacuna::stats::PatternStats;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load the category table from TOML, or fall back to the built-in inventory
fn load_categories(path: Option<&Path>) -> Result<CategoryTable> {
    match path {
        Some(path) => CategoryTable::from_toml(path),
        None => CategoryTable::default_inventory()
            .context("Failed to parse embedded categories-default.toml"),
    }
}

/// Print holes as text
fn print_holes(pattern: &str, reports: &[HoleReport], show_counts: bool) {
    if reports.is_empty() {
        println!("No holes found for pattern '{}'.", pattern);
        return;
    }

    println!("=== Holes in pattern '{}' ({}) ===", pattern, reports.len());
    for report in reports {
        if show_counts {
            println!("{}", report.to_report_string());
        } else {
            println!("{}", report.instantiation);
        }
    }
}

/// Write JSON results to disk, creating parent directories as needed
fn write_output(path: &Path, output: &JsonOutput) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, output.to_json()?)
        .with_context(|| format!("Failed to write results to {}", path.display()))?;

    tracing::info!("wrote results to {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    if args.top.is_some() && !args.statistics {
        anyhow::bail!("--top only applies to statistics output. Use it together with -c/--summary.");
    }

    let criteria = HoleCriteria {
        min_part_count: args.min_part_count,
        max_whole_count: args.max_whole_count,
    };
    criteria.validate()?;

    let categories = load_categories(args.categories.as_deref())?;

    tracing::info!("loading lexicon {}", args.lexicon.display());
    let corpus = fs::read_to_string(&args.lexicon)
        .with_context(|| format!("Failed to read lexicon file: {}", args.lexicon.display()))?;

    let mut output = JsonOutput::new(&args.pattern);

    if args.statistics {
        let stats = PatternStats::analyze(&args.pattern, &corpus, &categories)?;
        output.set_statistics(&stats);

        if args.format == OutputFormat::Text {
            print!("{}", stats.to_report_string(args.top));
        }
    } else {
        let reports = find_hole_reports(&args.pattern, &corpus, &categories, &criteria)?;
        output.set_holes(&reports, args.counts);

        if args.format == OutputFormat::Text {
            print_holes(&args.pattern, &reports, args.counts);
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", output.to_json()?);
    }

    if let Some(path) = &args.output {
        write_output(path, &output)?;
    }

    Ok(())
}
