//! Habit scoring model and estimate evaluation

use crate::data::DailyRecord;
use crate::error::AnalysisError;

/// Reference maxima defining what earns a full score for each habit.
///
/// The defaults (8 h sleep, 1 h exercise, 4 h study) are the fixed model
/// constants; passing the config explicitly keeps scoring testable with
/// alternate references.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub sleep_max: f64,
    pub exercise_max: f64,
    pub study_max: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sleep_max: 8.0,
            exercise_max: 1.0,
            study_max: 4.0,
        }
    }
}

/// A daily record plus its derived habit scores and productivity estimate
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    pub day: DailyRecord,
    /// Habit scores, each in [1, 5]
    pub sleep_score: f64,
    pub exercise_score: f64,
    pub study_score: f64,
    /// Unweighted mean of the three habit scores, rounded to one decimal
    pub estimated_productivity: f64,
}

impl ScoredRecord {
    /// Signed error of the estimate: reported minus estimated productivity
    pub fn difference(&self) -> f64 {
        self.day.reported_productivity - self.estimated_productivity
    }
}

/// Map a raw habit quantity to a 1-5 score against its reference maximum.
///
/// Linear scaling clamped to the closed interval [1, 5], then rounded to
/// one decimal. A zero quantity still earns the minimum score of 1;
/// anything at or above the reference earns exactly 5.
pub fn score_habit(value: f64, max_reference: f64) -> crate::Result<f64> {
    if max_reference <= 0.0 {
        return Err(AnalysisError::InvalidConfiguration(format!(
            "scoring reference maximum must be positive, got {max_reference}"
        ))
        .into());
    }

    let raw = (value / max_reference) * 5.0;
    if raw < 1.0 {
        return Ok(1.0);
    }
    if raw > 5.0 {
        return Ok(5.0);
    }
    Ok(round1(raw))
}

/// Score every record and derive its estimated productivity
pub fn score_table(
    days: &[DailyRecord],
    config: &ScoringConfig,
) -> crate::Result<Vec<ScoredRecord>> {
    days.iter()
        .map(|day| {
            let sleep_score = score_habit(day.sleep_hours, config.sleep_max)?;
            let exercise_score = score_habit(day.exercise_hours, config.exercise_max)?;
            let study_score = score_habit(day.study_hours, config.study_max)?;
            let estimated = round1((sleep_score + exercise_score + study_score) / 3.0);

            Ok(ScoredRecord {
                day: day.clone(),
                sleep_score,
                exercise_score,
                study_score,
                estimated_productivity: estimated,
            })
        })
        .collect()
}

/// Mean of |reported - estimated| over all records.
///
/// An empty table has no defined error; that is `EmptyDataset`, never NaN.
pub fn mean_absolute_error(records: &[ScoredRecord]) -> crate::Result<f64> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyDataset(
            "cannot compute mean absolute error over zero records".into(),
        )
        .into());
    }

    let total: f64 = records.iter().map(|r| r.difference().abs()).sum();
    Ok(total / records.len() as f64)
}

/// MAE bounds for the accuracy tiers
#[derive(Debug, Clone)]
pub struct EvalThresholds {
    pub accurate_max: f64,
    pub acceptable_max: f64,
}

impl Default for EvalThresholds {
    fn default() -> Self {
        Self {
            accurate_max: 0.5,
            acceptable_max: 1.0,
        }
    }
}

/// Model accuracy tier derived from the mean absolute error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    Accurate,
    Acceptable,
    Unreliable,
}

impl Accuracy {
    /// Ties at a tier boundary go to the more favorable tier
    pub fn classify(mae: f64, thresholds: &EvalThresholds) -> Accuracy {
        if mae <= thresholds.accurate_max {
            Accuracy::Accurate
        } else if mae <= thresholds.acceptable_max {
            Accuracy::Acceptable
        } else {
            Accuracy::Unreliable
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            Accuracy::Accurate => "The productivity estimate is quite precise.",
            Accuracy::Acceptable => "The productivity estimate is acceptable, but improvable.",
            Accuracy::Unreliable => "The productivity estimate is not reliable.",
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
