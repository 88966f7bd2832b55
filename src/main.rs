//! HabitForge: daily-habits analysis CLI
//!
//! This is the main entrypoint that orchestrates loading, cleaning,
//! scoring, evaluation, charts and the text report.

use anyhow::Result;
use clap::Parser;
use habitforge::{data, model, report, stats, viz, Args, EvalThresholds, ScoringConfig, Thresholds};
use std::path::Path;
use std::time::Instant;

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    init_logging(args.verbose);

    if args.verbose {
        println!("HabitForge - Daily Habits Analyzer");
        println!("==================================\n");
    }

    run_pipeline(&args)
}

/// Run the full analysis pipeline
fn run_pipeline(args: &Args) -> Result<()> {
    println!("=== Daily Habits Analysis ===\n");

    let start_time = Instant::now();

    // Step 1: Load the habit log
    if args.verbose {
        println!("Step 1: Loading data");
        println!("  Input file: {}", args.input);
    }

    let load_start = Instant::now();
    let raw = data::load_records(Path::new(&args.input))?;
    let load_time = load_start.elapsed();

    println!("✓ Data loaded: {} records", raw.len());
    if args.verbose {
        println!("  Loading time: {:.2}s", load_time.as_secs_f64());
    }
    report::print_missing(&data::missing_value_counts(&raw));

    // Step 2: Clean and validate
    if args.verbose {
        println!("Step 2: Cleaning and validating");
    }

    let cleaned = data::clean(&raw)?;
    let days = data::validate(&cleaned);

    println!("✓ Cleaned and validated: {} records kept", days.len());
    if args.verbose {
        println!("  {} out-of-range records dropped", cleaned.len() - days.len());
    }
    report::print_duplicate_dates(data::count_duplicate_dates(&days));

    // Step 3: Score habits and estimate productivity
    if args.verbose {
        println!("Step 3: Scoring habits");
    }

    let scoring = ScoringConfig::default();
    let scored = model::score_table(&days, &scoring)?;

    report::print_scored_table(&scored);
    report::print_comparison(&scored);

    let mae = model::mean_absolute_error(&scored)?;
    report::print_differences(&scored, mae);
    report::print_evaluation(model::Accuracy::classify(mae, &EvalThresholds::default()));

    // Step 4: Aggregate statistics
    let thresholds = Thresholds::default();
    let summary = stats::summarize(&scored, &thresholds)?;

    report::print_general_metrics(&summary);
    report::print_habit_comparison(&summary);

    // Step 5: Charts
    if args.verbose {
        println!("Step 4: Rendering charts");
        println!("  Output base: {}", args.output);
    }

    let viz_start = Instant::now();
    viz::render_all(&scored, &summary, &args.output)?;
    if args.verbose {
        println!("  Rendering time: {:.2}s", viz_start.elapsed().as_secs_f64());
    }
    println!();

    // Step 6: Conclusions and the text report
    let conclusions = stats::draw_conclusions(&summary, &thresholds);
    report::print_conclusions(&conclusions);
    report::write_report(Path::new(&args.report), &summary, &conclusions)?;
    println!("Report written to: {}", args.report);

    println!("\n=== Analysis Complete ===");
    println!("Total processing time: {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(())
}
