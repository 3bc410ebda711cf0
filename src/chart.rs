//! Chart rendering
//!
//! Renders aggregate query results as SVG files with `plotters`. The SVG
//! backend is the only one compiled in: it is pure Rust and needs no
//! system font stack, so renders are reproducible in headless
//! environments.

use std::path::Path;

use plotters::prelude::*;
use plotters::style::RGBColor;

use crate::{Error, Result};

/// Bar fill for the revenue chart.
pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
/// Bar fill for the quantity chart.
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
/// Bar fill for the average-price chart.
pub const GREEN: RGBColor = RGBColor(0, 128, 0);

/// Slice colors for pie charts, cycled when there are more slices.
const PIE_PALETTE: [RGBColor; 6] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
];

const CHART_SIZE: (u32, u32) = (640, 480);
const PIE_SIZE: (u32, u32) = (480, 480);

fn chart_err(err: impl std::fmt::Display) -> Error {
    Error::Chart(err.to_string())
}

fn validate(labels: &[String], values: &[f64]) -> Result<()> {
    if labels.is_empty() {
        return Err(Error::Chart("no data to plot".to_string()));
    }
    if labels.len() != values.len() {
        return Err(Error::Chart(format!(
            "{} labels but {} values",
            labels.len(),
            values.len()
        )));
    }
    Ok(())
}

/// Render one bar per label into an SVG file.
///
/// The y axis spans from zero to just above the largest value; a floor of
/// 1.0 keeps the axis well-formed when every bar is zero.
///
/// # Errors
/// Returns error on empty or mismatched data, or if drawing fails.
pub fn render_bar_chart(
    labels: &[String],
    values: &[f64],
    title: &str,
    y_label: &str,
    color: RGBColor,
    path: &Path,
) -> Result<()> {
    validate(labels, values)?;

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let y_max = values.iter().copied().fold(0.0_f64, f64::max).max(1.0) * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(52)
        .build_cartesian_2d((0..labels.len()).into_segmented(), 0.0..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .y_desc(y_label)
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(values.iter().enumerate().map(|(i, v)| {
            Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), *v)],
                color.filled(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}

/// Render a labelled pie chart with per-slice percentages into an SVG file.
///
/// # Errors
/// Returns error on empty or mismatched data, a negative slice, a zero
/// total, or if drawing fails.
pub fn render_pie_chart(
    labels: &[String],
    values: &[f64],
    title: &str,
    path: &Path,
) -> Result<()> {
    validate(labels, values)?;
    if values.iter().any(|v| *v < 0.0) {
        return Err(Error::Chart("pie slices must be non-negative".to_string()));
    }
    if values.iter().sum::<f64>() <= 0.0 {
        return Err(Error::Chart("pie total must be positive".to_string()));
    }

    let root = SVGBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;
    let root = root
        .titled(title, ("sans-serif", 24))
        .map_err(chart_err)?;

    let (width, height) = root.dim_in_pixel();
    let center = (i32::try_from(width / 2).unwrap_or(0), i32::try_from(height / 2).unwrap_or(0));
    let radius = f64::from(width.min(height)) * 0.35;
    let colors: Vec<RGBColor> = (0..values.len())
        .map(|i| PIE_PALETTE[i % PIE_PALETTE.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, values, &colors, labels);
    pie.start_angle(140.0);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 13).into_font().color(&BLACK));

    root.draw(&pie).map_err(chart_err)?;
    root.present().map_err(chart_err)?;
    Ok(())
}
