//! Chart rendering using Plotters

use chrono::{Duration, NaiveDate};
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::prelude::*;

use crate::error::AnalysisError;
use crate::model::ScoredRecord;
use crate::stats::Summary;

const HABIT_NAMES: [&str; 3] = ["Sleep", "Exercise", "Study"];
const HABIT_COLORS: [RGBColor; 3] = [BLUE, GREEN, RED];

/// Date span of the table, padded by a day on each side so single-day
/// tables still produce a drawable axis
fn date_range(records: &[ScoredRecord]) -> crate::Result<(NaiveDate, NaiveDate)> {
    let min = records.iter().map(|r| r.day.date).min();
    let max = records.iter().map(|r| r.day.date).max();
    match (min, max) {
        (Some(min), Some(max)) => Ok((min - Duration::days(1), max + Duration::days(1))),
        _ => Err(AnalysisError::EmptyDataset("no records to chart".into()).into()),
    }
}

/// Records sorted by date for line drawing; input order is untouched
fn by_date(records: &[ScoredRecord]) -> Vec<&ScoredRecord> {
    let mut sorted: Vec<&ScoredRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.day.date);
    sorted
}

/// Line chart of reported vs estimated productivity over time
pub fn productivity_chart(
    records: &[ScoredRecord],
    output_path: &str,
    plot_title: Option<&str>,
) -> crate::Result<()> {
    let title = plot_title.unwrap_or("Reported vs Estimated Productivity");
    let (from, to) = date_range(records)?;
    let days = by_date(records);

    let root = BitMapBackend::new(output_path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(from..to, 0f64..5.5f64)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Productivity (1-5)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            days.iter().map(|r| (r.day.date, r.day.reported_productivity)),
            &BLUE,
        ))?
        .label("Reported")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            days.iter().map(|r| (r.day.date, r.estimated_productivity)),
            &RED,
        ))?
        .label("Estimated")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().draw()?;
    root.present()?;
    println!("Productivity chart saved to: {}", output_path);

    Ok(())
}

/// Line chart of raw habit hours over time
pub fn habits_chart(records: &[ScoredRecord], output_path: &str) -> crate::Result<()> {
    let (from, to) = date_range(records)?;
    let days = by_date(records);

    let root = BitMapBackend::new(output_path, (1000, 500)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Habits Over Time", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(from..to, 0f64..13f64)?;

    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Hours")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            days.iter().map(|r| (r.day.date, r.day.sleep_hours)),
            &BLUE,
        ))?
        .label("Sleep hours")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            days.iter().map(|r| (r.day.date, r.day.exercise_hours)),
            &GREEN,
        ))?
        .label("Exercise hours")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(LineSeries::new(
            days.iter().map(|r| (r.day.date, r.day.study_hours)),
            &RED,
        ))?
        .label("Study hours")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart.configure_series_labels().draw()?;
    root.present()?;
    println!("Habits chart saved to: {}", output_path);

    Ok(())
}

/// Bar chart of the mean score per habit
pub fn score_bar_chart(summary: &Summary, output_path: &str) -> crate::Result<()> {
    let means = [
        summary.mean_sleep_score,
        summary.mean_exercise_score,
        summary.mean_study_score,
    ];

    let root = BitMapBackend::new(output_path, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Mean Score per Habit", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((0usize..3usize).into_segmented(), 0f64..5f64)?;

    chart
        .configure_mesh()
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                HABIT_NAMES.get(*i).copied().unwrap_or("").to_string()
            }
            SegmentValue::Last => String::new(),
        })
        .y_desc("Score (1-5)")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (i, &mean) in means.iter().enumerate() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), mean),
            ],
            HABIT_COLORS[i].filled(),
        )))?;
    }

    root.present()?;
    println!("Habit score chart saved to: {}", output_path);

    Ok(())
}

/// Render all three charts, deriving sibling paths from the base path
pub fn render_all(
    records: &[ScoredRecord],
    summary: &Summary,
    base_output_path: &str,
) -> crate::Result<()> {
    productivity_chart(records, base_output_path, None)?;

    let habits_path = base_output_path.replace(".png", "_habits.png");
    habits_chart(records, &habits_path)?;

    let scores_path = base_output_path.replace(".png", "_scores.png");
    score_bar_chart(summary, &scores_path)?;

    Ok(())
}
