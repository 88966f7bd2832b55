//! Integration tests for HabitForge

use habitforge::{
    clean, count_duplicate_dates, draw_conclusions, load_records, mean_absolute_error,
    score_table, summarize, validate, Accuracy, AnalysisError, EvalThresholds, ScoringConfig,
    Thresholds,
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a test CSV with missing values, an out-of-range row and a
/// duplicate date
fn create_test_csv() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "fecha,horas_sueno,horas_ejercicio,horas_estudio,productividad,notas"
    )
    .unwrap();

    // A perfect day and a middling one
    writeln!(file, "2024-03-01,8,1,4,5,great day").unwrap();
    writeln!(file, "2024-03-02,4,0.5,2,3,").unwrap();
    // Missing sleep, imputed with the column mean
    writeln!(file, "2024-03-03,,0.5,2,4,").unwrap();
    // Out of range: dropped entirely by validation
    writeln!(file, "2024-03-04,15,1,4,5,oops").unwrap();
    // Duplicate date with missing exercise and study (imputed with zero)
    writeln!(file, "2024-03-03,7,,,2,").unwrap();

    file
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_end_to_end_pipeline() {
    let file = create_test_csv();

    let raw = load_records(file.path()).unwrap();
    assert_eq!(raw.len(), 5);

    let cleaned = clean(&raw).unwrap();
    // Sleep mean over present values before imputation: (8 + 4 + 15 + 7) / 4
    assert!(approx(cleaned[2].sleep_hours, 8.5));
    assert_eq!(cleaned[4].exercise_hours, 0.0);
    assert_eq!(cleaned[4].study_hours, 0.0);

    let days = validate(&cleaned);
    // The 15-hour sleep row is gone and contributes to no later statistic
    assert_eq!(days.len(), 4);
    assert!(days.iter().all(|d| d.sleep_hours <= 12.0));

    assert_eq!(count_duplicate_dates(&days), 1);

    let scored = score_table(&days, &ScoringConfig::default()).unwrap();
    assert!(approx(scored[0].estimated_productivity, 5.0));
    assert!(approx(scored[0].difference(), 0.0));
    assert!(approx(scored[1].estimated_productivity, 2.5));
    assert!(approx(scored[1].difference(), 0.5));
    // Imputed sleep of 8.5 clamps its score at 5
    assert!(approx(scored[2].sleep_score, 5.0));
    assert!(approx(scored[2].estimated_productivity, 3.3));

    let mae = mean_absolute_error(&scored).unwrap();
    // Differences: 0.0, 0.5, 0.7, -0.1
    assert!(approx(mae, 0.325));
    assert_eq!(
        Accuracy::classify(mae, &EvalThresholds::default()),
        Accuracy::Accurate
    );

    let thresholds = Thresholds::default();
    let summary = summarize(&scored, &thresholds).unwrap();
    assert_eq!(summary.days, 4);

    // Productive days: reported 5 and 4; unproductive: reported 2
    let productive = summary.productive.as_ref().unwrap();
    assert!(approx(productive.sleep_hours, 8.25));
    let unproductive = summary.unproductive.as_ref().unwrap();
    assert!(approx(unproductive.sleep_hours, 7.0));

    let conclusions = draw_conclusions(&summary, &thresholds);
    assert!(!conclusions.all_adequate());
}

#[test]
fn test_missing_column_is_data_quality() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fecha,horas_sueno,productividad").unwrap();
    writeln!(file, "2024-03-01,8,5").unwrap();

    let err = load_records(file.path()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::DataQuality(_))
    ));
}

#[test]
fn test_unreadable_file_is_data_quality() {
    let err = load_records(std::path::Path::new("does/not/exist.csv")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::DataQuality(_))
    ));
}

#[test]
fn test_all_rows_invalid_surfaces_empty_dataset() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fecha,horas_sueno,horas_ejercicio,horas_estudio,productividad").unwrap();
    // Every row violates some domain bound
    writeln!(file, "2024-03-01,15,1,4,5").unwrap();
    writeln!(file, "2024-03-02,8,6,4,5").unwrap();
    writeln!(file, "2024-03-03,8,1,4,0.5").unwrap();

    let raw = load_records(file.path()).unwrap();
    let days = validate(&clean(&raw).unwrap());
    assert!(days.is_empty());

    let scored = score_table(&days, &ScoringConfig::default()).unwrap();
    let err = mean_absolute_error(&scored).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::EmptyDataset(_))
    ));

    let err = summarize(&scored, &Thresholds::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<AnalysisError>(),
        Some(AnalysisError::EmptyDataset(_))
    ));
}

#[test]
fn test_moderate_days_keep_overall_statistics_only() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "fecha,horas_sueno,horas_ejercicio,horas_estudio,productividad").unwrap();
    writeln!(file, "2024-03-01,8,1,4,3").unwrap();
    writeln!(file, "2024-03-02,7,0.5,3,3.5").unwrap();

    let raw = load_records(file.path()).unwrap();
    let days = validate(&clean(&raw).unwrap());
    let scored = score_table(&days, &ScoringConfig::default()).unwrap();
    let summary = summarize(&scored, &Thresholds::default()).unwrap();

    assert!(summary.productive.is_none());
    assert!(summary.unproductive.is_none());
    assert!(approx(summary.overall.sleep_hours, 7.5));
}
