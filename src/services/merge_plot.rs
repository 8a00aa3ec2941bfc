use plotters::prelude::*;
use thiserror::Error;

use crate::domain::merge_counts::DailyMerges;

#[derive(Error, Debug)]
pub enum MergePlotError {
    #[error("no merge counts to plot")]
    EmptyCounts,
    #[error("failed to render merge chart: {0}")]
    Render(String),
}

/// Renders the day series as a PNG line chart with point markers.
pub fn write_merge_plot_png(
    output_path: &str,
    repo_label: &str,
    counts: &[DailyMerges],
) -> Result<(), MergePlotError> {
    if counts.is_empty() {
        return Err(MergePlotError::EmptyCounts);
    }

    let max_merges = counts.iter().map(|day| day.merges).max().unwrap_or(0);
    let max_y = max_merges.saturating_add(1).max(1) as i32;
    let max_x = counts.len().saturating_sub(1).max(1) as i32;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| MergePlotError::Render(e.to_string()))?;

    let caption = format!("Daily merge count - {repo_label} (past {} days)", counts.len());
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| MergePlotError::Render(e.to_string()))?;

    let label_count = counts.len().min(10).max(1);
    chart
        .configure_mesh()
        .x_desc("Date")
        .y_desc("Number of merges")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            counts
                .get(*index as usize)
                .map(|day| day.date.format("%m/%d").to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| MergePlotError::Render(e.to_string()))?;

    let line_color = RGBColor(30, 122, 204);
    chart
        .draw_series(LineSeries::new(
            counts
                .iter()
                .enumerate()
                .map(|(idx, day)| (idx as i32, day.merges as i32)),
            ShapeStyle::from(&line_color).stroke_width(2),
        ))
        .map_err(|e| MergePlotError::Render(e.to_string()))?;
    chart
        .draw_series(counts.iter().enumerate().map(|(idx, day)| {
            Circle::new((idx as i32, day.merges as i32), 3, line_color.filled())
        }))
        .map_err(|e| MergePlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| MergePlotError::Render(e.to_string()))?;
    Ok(())
}
