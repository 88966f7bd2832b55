//! Console summary sections and the text report writer

use std::fmt::Write as _;
use std::path::Path;

use crate::data::MissingCounts;
use crate::model::{Accuracy, ScoredRecord};
use crate::stats::{Conclusions, HabitAssessment, HabitMeans, ProductivityLevel, Summary};

fn heading(title: &str) {
    println!("{title}");
    println!("{}", "-".repeat(title.len()));
}

/// Print missing-value counts per source column
pub fn print_missing(counts: &MissingCounts) {
    println!("\nMissing values per column:");
    println!("  horas_sueno:     {}", counts.sleep_hours);
    println!("  horas_ejercicio: {}", counts.exercise_hours);
    println!("  horas_estudio:   {}", counts.study_hours);
    println!("  productividad:   {}", counts.reported_productivity);
    println!();
}

pub fn print_duplicate_dates(count: usize) {
    println!("Duplicate dates: {count}\n");
}

/// Print the scored table: raw hours plus the productivity estimate
pub fn print_scored_table(records: &[ScoredRecord]) {
    println!(
        "{:<12} {:>7} {:>9} {:>7} {:>10}",
        "date", "sleep", "exercise", "study", "estimated"
    );
    for r in records {
        println!(
            "{:<12} {:>7.1} {:>9.1} {:>7.1} {:>10.1}",
            r.day.date.to_string(),
            r.day.sleep_hours,
            r.day.exercise_hours,
            r.day.study_hours,
            r.estimated_productivity
        );
    }
    println!();
}

/// Print reported vs estimated productivity side by side
pub fn print_comparison(records: &[ScoredRecord]) {
    heading("REPORTED VS ESTIMATED PRODUCTIVITY");
    println!("{:<12} {:>9} {:>10}", "date", "reported", "estimated");
    for r in records {
        println!(
            "{:<12} {:>9.1} {:>10.1}",
            r.day.date.to_string(),
            r.day.reported_productivity,
            r.estimated_productivity
        );
    }
    println!();
}

/// Print the signed per-day difference and the mean absolute error
pub fn print_differences(records: &[ScoredRecord], mae: f64) {
    heading("DIFFERENCE (REPORTED - ESTIMATED)");
    println!(
        "{:<12} {:>9} {:>10} {:>11}",
        "date", "reported", "estimated", "difference"
    );
    for r in records {
        println!(
            "{:<12} {:>9.1} {:>10.1} {:>11.1}",
            r.day.date.to_string(),
            r.day.reported_productivity,
            r.estimated_productivity,
            r.difference()
        );
    }
    println!("\nMean absolute error: {mae:.2}\n");
}

pub fn print_evaluation(accuracy: Accuracy) {
    heading("MODEL EVALUATION");
    println!("{}\n", accuracy.verdict());
}

pub fn print_general_metrics(summary: &Summary) {
    heading("GENERAL METRICS");
    println!("Mean productivity: {:.2}", summary.overall.reported_productivity);
    println!("Mean sleep hours: {:.2}", summary.overall.sleep_hours);
    println!("Mean exercise hours: {:.2}", summary.overall.exercise_hours);
    println!("Mean study hours: {:.2}\n", summary.overall.study_hours);
}

fn print_subset(label: &str, means: &HabitMeans) {
    println!("{label}");
    println!("Mean sleep: {:.2}", means.sleep_hours);
    println!("Mean exercise: {:.2}", means.exercise_hours);
    println!("Mean study: {:.2}", means.study_hours);
}

/// Print habit means conditioned on productivity tier. Empty subsets are
/// skipped entirely rather than printed as zeros.
pub fn print_habit_comparison(summary: &Summary) {
    heading("HABIT COMPARISON");
    if let Some(productive) = &summary.productive {
        print_subset("Productive days (4 or more):", productive);
    }
    if let Some(unproductive) = &summary.unproductive {
        if summary.productive.is_some() {
            println!();
        }
        print_subset("Unproductive days (2 or less):", unproductive);
    }
    println!();
}

pub fn print_conclusions(conclusions: &Conclusions) {
    heading("CONCLUSIONS");
    match conclusions.productivity {
        ProductivityLevel::High => println!("Overall, your productivity level is high."),
        ProductivityLevel::Low => println!("Overall, your productivity level is low."),
        ProductivityLevel::Moderate => println!("Your mean productivity is moderate."),
    }

    println!("\nHABIT ASSESSMENT");
    match conclusions.sleep {
        HabitAssessment::NeedsImprovement => println!(
            "- You should improve your sleep hours. Sleeping more could raise your productivity."
        ),
        HabitAssessment::Adequate => println!("- Your sleep habit is adequate."),
    }
    match conclusions.exercise {
        HabitAssessment::NeedsImprovement => {
            println!("- Exercise is low on average. Try to move more during the week.")
        }
        HabitAssessment::Adequate => {
            println!("- You keep a good level of physical activity. Keep it up!")
        }
    }
    match conclusions.study {
        HabitAssessment::NeedsImprovement => {
            println!("- The time spent studying could be higher.")
        }
        HabitAssessment::Adequate => println!("- Your study dedication is consistent."),
    }
    println!();
}

/// Render the text report: header, mean productivity, per-habit mean
/// scores, and conditional conclusion bullets.
///
/// The congratulation for all-adequate habits goes into the report file
/// next to the other conclusions, not to the console.
pub fn render_report(summary: &Summary, conclusions: &Conclusions) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "DAILY HABITS REPORT");
    let _ = writeln!(out, "-------------------");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Mean productivity: {:.2}",
        summary.overall.reported_productivity
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "MEAN HABIT SCORES");
    let _ = writeln!(out, "- Sleep: {:.2}", summary.mean_sleep_score);
    let _ = writeln!(out, "- Exercise: {:.2}", summary.mean_exercise_score);
    let _ = writeln!(out, "- Study: {:.2}", summary.mean_study_score);
    let _ = writeln!(out);
    let _ = writeln!(out, "CONCLUSIONS");

    match conclusions.productivity {
        ProductivityLevel::High => {
            let _ = writeln!(out, "- Your mean productivity is high.");
        }
        ProductivityLevel::Low => {
            let _ = writeln!(out, "- Your mean productivity is low.");
        }
        ProductivityLevel::Moderate => {
            let _ = writeln!(out, "- Your mean productivity is moderate.");
        }
    }

    if conclusions.sleep == HabitAssessment::NeedsImprovement {
        let _ = writeln!(out, "- You should improve your sleep hours.");
    }
    if conclusions.exercise == HabitAssessment::NeedsImprovement {
        let _ = writeln!(out, "- You should raise your exercise level.");
    }
    if conclusions.study == HabitAssessment::NeedsImprovement {
        let _ = writeln!(out, "- You could spend more time studying.");
    }
    if conclusions.all_adequate() {
        let _ = writeln!(out, "- You keep very good habits. Keep it up!");
    }

    out
}

/// Write the rendered report to a UTF-8 text file
pub fn write_report(path: &Path, summary: &Summary, conclusions: &Conclusions) -> crate::Result<()> {
    std::fs::write(path, render_report(summary, conclusions))?;
    Ok(())
}
