use crate::domain::weekly_record::WeeklyRecord;
use crate::services::plan_yaml::{PlanYamlError, load_plan_from_yaml_file};
use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VolumePlotError {
    #[error("failed to load plan: {0}")]
    LoadPlan(#[from] PlanYamlError),
    #[error("plan has no weekly records")]
    EmptyWeeklyRecords,
    #[error("failed to render weekly volume plot: {0}")]
    Plot(String),
}

pub async fn plot_weekly_volume_from_plan_file(
    input_path: &str,
    output_path: &str,
) -> Result<(), VolumePlotError> {
    let plan = load_plan_from_yaml_file(input_path)?;
    if plan.weekly_records().is_empty() {
        return Err(VolumePlotError::EmptyWeeklyRecords);
    }
    write_plot_png(output_path, plan.weekly_records()).await
}

async fn write_plot_png(
    output_path: &str,
    records: &[WeeklyRecord],
) -> Result<(), VolumePlotError> {
    let output_path = output_path.to_string();
    let records = records.to_vec();
    tokio::task::spawn_blocking(move || render_plot_png(&output_path, &records))
        .await
        .map_err(|e| VolumePlotError::Plot(e.to_string()))??;
    Ok(())
}

/// Weekly volume as bars with intensity (0-100%) scaled onto the same axis as a line.
fn render_plot_png(output_path: &str, records: &[WeeklyRecord]) -> Result<(), VolumePlotError> {
    if records.is_empty() {
        return Ok(());
    }

    let max_volume = records.iter().map(|r| r.volume).max().unwrap_or(0);
    let max_y = axis_value(max_volume.saturating_add(max_volume / 10)).max(1);
    let max_x = i32::try_from(records.len()).unwrap_or(i32::MAX);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Weekly Training Volume", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;

    let label_count = records.len().clamp(1, 13);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Week")
        .y_desc("Volume")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            records
                .get(*index as usize)
                .map(|r| r.label())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;

    let bar_color = RGBColor(59, 130, 246);
    let bar_style = ShapeStyle::from(&bar_color).filled().stroke_width(1);
    chart
        .draw_series(records.iter().enumerate().map(|(idx, r)| {
            Rectangle::new(
                [(idx as i32, 0), (idx as i32 + 1, axis_value(r.volume))],
                bar_style,
            )
        }))
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;

    let line_color = RGBColor(239, 68, 68);
    chart
        .draw_series(LineSeries::new(
            records.iter().enumerate().map(|(idx, r)| {
                let scaled = i64::from(r.intensity.min(100)) * i64::from(max_y) / 100;
                (idx as i32, i32::try_from(scaled).unwrap_or(i32::MAX))
            }),
            line_color.stroke_width(2),
        ))
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| VolumePlotError::Plot(e.to_string()))?;
    Ok(())
}

/// Volumes past the `i32` chart coordinate space are drawn at the top of the axis.
fn axis_value(volume: u32) -> i32 {
    i32::try_from(volume).unwrap_or(i32::MAX)
}
