//! HabitForge: a Rust CLI application for analyzing a personal daily-habits log
//!
//! This library loads a CSV of daily records (sleep, exercise and study
//! hours plus self-reported productivity), cleans and validates it,
//! derives 1-5 habit scores and an estimated productivity, evaluates the
//! estimate against the reported value, and produces summary statistics,
//! charts and a text report.

pub mod cli;
pub mod data;
pub mod error;
pub mod model;
pub mod report;
pub mod stats;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{
    clean, count_duplicate_dates, load_records, missing_value_counts, validate, DailyRecord,
    MissingCounts, RawRecord,
};
pub use error::AnalysisError;
pub use model::{
    mean_absolute_error, score_habit, score_table, Accuracy, EvalThresholds, ScoredRecord,
    ScoringConfig,
};
pub use stats::{
    draw_conclusions, summarize, Conclusions, HabitAssessment, HabitMeans, ProductivityLevel,
    Summary, Thresholds,
};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
