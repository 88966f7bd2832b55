//! Error taxonomy for the analysis pipeline

use thiserror::Error;

/// Failure classes surfaced by the core transforms.
///
/// Every variant is fatal for the stage that raises it; errors propagate
/// through `anyhow` to the top level and terminate the run.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Source data is unusable: unreadable or malformed file, a missing
    /// required column, or a column with no values to impute from.
    #[error("data quality: {0}")]
    DataQuality(String),

    /// A computation that needs at least one record received none.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    /// A scoring reference maximum is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
