//! Aggregate statistics and qualitative conclusions

use crate::error::AnalysisError;
use crate::model::ScoredRecord;

/// Cutoffs for subset selection and qualitative labels
#[derive(Debug, Clone)]
pub struct Thresholds {
    /// Reported productivity at or above this marks a productive day
    pub productive_min: f64,
    /// Reported productivity at or below this marks an unproductive day
    pub unproductive_max: f64,
    /// A mean habit score below this is flagged for improvement
    pub adequate_score: f64,
    /// Mean reported productivity at or above this is labelled high
    pub high_productivity: f64,
    /// Mean reported productivity at or below this is labelled low
    pub low_productivity: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            productive_min: 4.0,
            unproductive_max: 2.0,
            adequate_score: 3.0,
            high_productivity: 4.0,
            low_productivity: 2.0,
        }
    }
}

/// Column means over one set of records
#[derive(Debug, Clone, PartialEq)]
pub struct HabitMeans {
    pub sleep_hours: f64,
    pub exercise_hours: f64,
    pub study_hours: f64,
    pub reported_productivity: f64,
}

impl HabitMeans {
    fn of(records: &[&ScoredRecord]) -> Option<HabitMeans> {
        if records.is_empty() {
            return None;
        }
        let n = records.len() as f64;
        Some(HabitMeans {
            sleep_hours: records.iter().map(|r| r.day.sleep_hours).sum::<f64>() / n,
            exercise_hours: records.iter().map(|r| r.day.exercise_hours).sum::<f64>() / n,
            study_hours: records.iter().map(|r| r.day.study_hours).sum::<f64>() / n,
            reported_productivity: records
                .iter()
                .map(|r| r.day.reported_productivity)
                .sum::<f64>()
                / n,
        })
    }
}

/// Aggregate view of the scored table
#[derive(Debug, Clone)]
pub struct Summary {
    pub days: usize,
    pub overall: HabitMeans,
    pub mean_estimated_productivity: f64,
    pub mean_sleep_score: f64,
    pub mean_exercise_score: f64,
    pub mean_study_score: f64,
    /// Means over productive days; `None` when no day qualifies
    pub productive: Option<HabitMeans>,
    /// Means over unproductive days; `None` when no day qualifies
    pub unproductive: Option<HabitMeans>,
}

/// Compute overall and subset means. `EmptyDataset` on an empty table;
/// empty subsets become `None`, never zeros.
pub fn summarize(records: &[ScoredRecord], thresholds: &Thresholds) -> crate::Result<Summary> {
    let all: Vec<&ScoredRecord> = records.iter().collect();
    let overall = HabitMeans::of(&all).ok_or_else(|| {
        AnalysisError::EmptyDataset("no records left to summarize".into())
    })?;

    let n = records.len() as f64;
    let productive: Vec<&ScoredRecord> = records
        .iter()
        .filter(|r| r.day.reported_productivity >= thresholds.productive_min)
        .collect();
    let unproductive: Vec<&ScoredRecord> = records
        .iter()
        .filter(|r| r.day.reported_productivity <= thresholds.unproductive_max)
        .collect();

    Ok(Summary {
        days: records.len(),
        overall,
        mean_estimated_productivity: records
            .iter()
            .map(|r| r.estimated_productivity)
            .sum::<f64>()
            / n,
        mean_sleep_score: records.iter().map(|r| r.sleep_score).sum::<f64>() / n,
        mean_exercise_score: records.iter().map(|r| r.exercise_score).sum::<f64>() / n,
        mean_study_score: records.iter().map(|r| r.study_score).sum::<f64>() / n,
        productive: HabitMeans::of(&productive),
        unproductive: HabitMeans::of(&unproductive),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductivityLevel {
    High,
    Moderate,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitAssessment {
    Adequate,
    NeedsImprovement,
}

/// Qualitative labels derived from the summary means
#[derive(Debug, Clone, PartialEq)]
pub struct Conclusions {
    pub productivity: ProductivityLevel,
    pub sleep: HabitAssessment,
    pub exercise: HabitAssessment,
    pub study: HabitAssessment,
}

impl Conclusions {
    pub fn all_adequate(&self) -> bool {
        [self.sleep, self.exercise, self.study]
            .iter()
            .all(|a| *a == HabitAssessment::Adequate)
    }
}

/// Pure, deterministic labelling of the summary against the thresholds
pub fn draw_conclusions(summary: &Summary, thresholds: &Thresholds) -> Conclusions {
    let mean_reported = summary.overall.reported_productivity;
    let productivity = if mean_reported >= thresholds.high_productivity {
        ProductivityLevel::High
    } else if mean_reported <= thresholds.low_productivity {
        ProductivityLevel::Low
    } else {
        ProductivityLevel::Moderate
    };

    let assess = |score: f64| {
        if score < thresholds.adequate_score {
            HabitAssessment::NeedsImprovement
        } else {
            HabitAssessment::Adequate
        }
    };

    Conclusions {
        productivity,
        sleep: assess(summary.mean_sleep_score),
        exercise: assess(summary.mean_exercise_score),
        study: assess(summary.mean_study_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DailyRecord;
    use crate::model::{score_table, ScoringConfig};
    use chrono::NaiveDate;

    fn scored(days: &[(&str, f64, f64, f64, f64)]) -> Vec<ScoredRecord> {
        let days: Vec<DailyRecord> = days
            .iter()
            .map(|(date, sleep, exercise, study, productivity)| DailyRecord {
                date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
                sleep_hours: *sleep,
                exercise_hours: *exercise,
                study_hours: *study,
                reported_productivity: *productivity,
            })
            .collect();
        score_table(&days, &ScoringConfig::default()).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_summarize_overall_means() {
        let records = scored(&[
            ("2024-03-01", 8.0, 1.0, 4.0, 5.0),
            ("2024-03-02", 4.0, 0.5, 2.0, 3.0),
        ]);
        let summary = summarize(&records, &Thresholds::default()).unwrap();

        assert_eq!(summary.days, 2);
        assert!(approx(summary.overall.sleep_hours, 6.0));
        assert!(approx(summary.overall.exercise_hours, 0.75));
        assert!(approx(summary.overall.study_hours, 3.0));
        assert!(approx(summary.overall.reported_productivity, 4.0));
        assert!(approx(summary.mean_estimated_productivity, 3.75));
        assert!(approx(summary.mean_sleep_score, 3.75));
    }

    #[test]
    fn test_summarize_subsets() {
        let records = scored(&[
            ("2024-03-01", 8.0, 1.0, 4.0, 5.0), // productive
            ("2024-03-02", 7.0, 0.5, 3.0, 4.0), // productive
            ("2024-03-03", 5.0, 0.0, 1.0, 2.0), // unproductive
            ("2024-03-04", 6.0, 0.5, 2.0, 3.0), // neither
        ]);
        let summary = summarize(&records, &Thresholds::default()).unwrap();

        let productive = summary.productive.unwrap();
        assert!(approx(productive.sleep_hours, 7.5));
        assert!(approx(productive.reported_productivity, 4.5));

        let unproductive = summary.unproductive.unwrap();
        assert!(approx(unproductive.sleep_hours, 5.0));
        assert!(approx(unproductive.exercise_hours, 0.0));
    }

    #[test]
    fn test_summarize_moderate_days_yield_no_subsets() {
        // Everything reported between 3 and 3.5: both subsets stay empty
        let records = scored(&[
            ("2024-03-01", 8.0, 1.0, 4.0, 3.0),
            ("2024-03-02", 7.0, 0.5, 3.0, 3.5),
        ]);
        let summary = summarize(&records, &Thresholds::default()).unwrap();

        assert!(summary.productive.is_none());
        assert!(summary.unproductive.is_none());
        // Overall statistics are still computed
        assert!(approx(summary.overall.sleep_hours, 7.5));
    }

    #[test]
    fn test_summarize_empty_fails() {
        let err = summarize(&[], &Thresholds::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_conclusions_levels() {
        let thresholds = Thresholds::default();

        let high = scored(&[("2024-03-01", 8.0, 1.0, 4.0, 5.0)]);
        let summary = summarize(&high, &thresholds).unwrap();
        let conclusions = draw_conclusions(&summary, &thresholds);
        assert_eq!(conclusions.productivity, ProductivityLevel::High);
        assert_eq!(conclusions.sleep, HabitAssessment::Adequate);
        assert!(conclusions.all_adequate());

        let low = scored(&[("2024-03-01", 3.0, 0.0, 0.5, 1.0)]);
        let summary = summarize(&low, &thresholds).unwrap();
        let conclusions = draw_conclusions(&summary, &thresholds);
        assert_eq!(conclusions.productivity, ProductivityLevel::Low);
        assert_eq!(conclusions.sleep, HabitAssessment::NeedsImprovement);
        assert_eq!(conclusions.exercise, HabitAssessment::NeedsImprovement);
        assert_eq!(conclusions.study, HabitAssessment::NeedsImprovement);
        assert!(!conclusions.all_adequate());

        let moderate = scored(&[("2024-03-01", 8.0, 1.0, 4.0, 3.0)]);
        let summary = summarize(&moderate, &thresholds).unwrap();
        let conclusions = draw_conclusions(&summary, &thresholds);
        assert_eq!(conclusions.productivity, ProductivityLevel::Moderate);
    }

    #[test]
    fn test_conclusions_alternate_thresholds() {
        let thresholds = Thresholds {
            adequate_score: 4.0,
            ..Thresholds::default()
        };
        // Sleep score 3.1 is adequate by default but not against 4.0
        let records = scored(&[("2024-03-01", 5.0, 1.0, 4.0, 3.0)]);
        let summary = summarize(&records, &thresholds).unwrap();
        let conclusions = draw_conclusions(&summary, &thresholds);
        assert_eq!(conclusions.sleep, HabitAssessment::NeedsImprovement);
        assert_eq!(conclusions.exercise, HabitAssessment::Adequate);
    }
}
