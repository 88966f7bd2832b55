//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Daily-habits analyzer: scores sleep, exercise and study hours,
/// estimates productivity and compares it against the reported value
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the daily habits CSV file
    #[arg(short, long, default_value = "data/life_data.csv")]
    pub input: String,

    /// Base output path for the chart PNGs; sibling charts derive
    /// their names from it
    #[arg(short, long, default_value = "habit_charts.png")]
    pub output: String,

    /// Output path for the text report
    #[arg(short, long, default_value = "habit_report.txt")]
    pub report: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
