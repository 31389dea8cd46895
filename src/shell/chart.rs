//! Semilog charts of an enrichment profile.
//!
//! The console gets a character-grid chart; [`render_svg`] draws the same
//! profile with `plotters` for export.

use std::{fmt::Display, path::Path};

use plotters::{
    coord::{CoordTranslate, cartesian::Cartesian2d, combinators::LogCoord, types::RangedCoordf64},
    prelude::*,
};
use thiserror::Error;

use crate::models::enrichment::EnrichmentProfile;

/// Errors that can occur while drawing or exporting a chart.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The profile has no points to draw.
    #[error("profile has no points")]
    Empty,

    /// The plotting backend failed.
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// Writing the exported chart failed.
    #[error("failed to write chart")]
    Io(#[from] std::io::Error),
}

/// Labels and dimensions shared by the text and SVG charts.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,

    /// Plot area width of the text chart, in characters.
    pub text_width: usize,

    /// Plot area height of the text chart, in lines.
    pub text_height: usize,

    /// SVG image size in pixels.
    pub svg_size: (u32, u32),
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Simplified Cascade Enrichment Profile".to_owned(),
            x_label: "Stage Number".to_owned(),
            y_label: "Light Isotope %".to_owned(),
            text_width: 60,
            text_height: 15,
            svg_size: (800, 600),
        }
    }
}

/// Width of the y-axis label column, including the axis bar.
const LABEL_WIDTH: usize = 11;

/// Cell coordinates of a text chart: stage number by log-scaled percent.
type TextCoord = Cartesian2d<RangedCoordf64, LogCoord<f64>>;

/// Renders the profile as a semilog-y character chart.
///
/// Stage numbers run along the x axis and light-isotope percentages along a
/// logarithmic y axis, mapped onto character cells with the same `plotters`
/// coordinates the SVG chart uses. The highest and lowest percentages label
/// the top and bottom rows.
#[must_use]
pub fn render_text(profile: &EnrichmentProfile, config: &ChartConfig) -> String {
    let mut out = format!("{}\n{} (log scale)\n", config.title, config.y_label);

    let percents = profile.percents();
    let (Some(low), Some(high)) = (
        percents.iter().copied().reduce(f64::min),
        percents.iter().copied().reduce(f64::max),
    ) else {
        out.push_str("(no data)\n");
        return out;
    };

    let width = config.text_width.max(2);
    let height = config.text_height.max(2);
    let coord = text_coord(percents.len(), low, high, width, height);

    let mut grid = vec![vec![' '; width]; height];
    for (stage, percent) in profile.points() {
        let (col, row) = coord.translate(&(stage as f64, percent));
        let col = cell(col, width);
        let row = cell(row, height);
        grid[row][col] = '*';
    }

    for (i, line) in grid.iter().enumerate() {
        let label = match i {
            0 => format!("{high:>9.4}"),
            i if i == height - 1 => format!("{low:>9.4}"),
            _ => String::new(),
        };
        let cells: String = line.iter().collect();
        out.push_str(&format!("{label:>9} |{}\n", cells.trim_end()));
    }

    out.push_str(&format!("{:>LABEL_WIDTH$}{}\n", "+", "-".repeat(width)));
    out.push_str(&x_axis_labels(percents.len().saturating_sub(1), &config.x_label, width));
    out
}

/// Renders the profile as an SVG document.
///
/// # Errors
///
/// Returns [`ChartError::Empty`] for an empty profile and
/// [`ChartError::Render`] if `plotters` fails to draw.
pub fn render_svg(
    profile: &EnrichmentProfile,
    config: &ChartConfig,
) -> Result<String, ChartError> {
    let percents = profile.percents();
    let (Some(low), Some(high)) = (
        percents.iter().copied().reduce(f64::min),
        percents.iter().copied().reduce(f64::max),
    ) else {
        return Err(ChartError::Empty);
    };

    let x_max = percents.len().saturating_sub(1).max(1) as f64;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, config.svg_size).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&config.title, ("sans-serif", 20))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, (low * 0.9..high * 1.1).log_scale())
            .map_err(render_error)?;

        chart
            .configure_mesh()
            .x_desc(config.x_label.as_str())
            .y_desc(config.y_label.as_str())
            .draw()
            .map_err(render_error)?;

        chart
            .draw_series(LineSeries::new(
                profile.points().map(|(stage, percent)| (stage as f64, percent)),
                &BLUE,
            ))
            .map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    Ok(svg)
}

/// Renders the profile as SVG and writes it to `path`.
///
/// # Errors
///
/// Returns a [`ChartError`] if rendering or writing fails.
pub fn export_svg(
    profile: &EnrichmentProfile,
    config: &ChartConfig,
    path: &Path,
) -> Result<(), ChartError> {
    let svg = render_svg(profile, config)?;
    std::fs::write(path, svg)?;
    Ok(())
}

fn render_error(err: impl Display) -> ChartError {
    ChartError::Render(err.to_string())
}

/// Maps stage numbers onto columns `0..width` and percentages onto rows
/// `0..height`, with the highest percentage in row zero.
#[allow(clippy::cast_precision_loss)]
fn text_coord(points: usize, low: f64, high: f64, width: usize, height: usize) -> TextCoord {
    let last_stage = points.saturating_sub(1).max(1) as f64;
    // A flat profile still needs a non-empty log range.
    let high = if high > low { high } else { low * 10.0 };
    let last_cell = |cells: usize| i32::try_from(cells - 1).unwrap_or(i32::MAX);

    Cartesian2d::new(
        0.0..last_stage,
        (low..high).log_scale(),
        (0..last_cell(width), 0..last_cell(height)),
    )
}

/// Clamps a backend coordinate onto a cell index in `0..cells`.
fn cell(coord: i32, cells: usize) -> usize {
    usize::try_from(coord).unwrap_or(0).min(cells - 1)
}

fn x_axis_labels(last_stage: usize, label: &str, width: usize) -> String {
    let right = last_stage.to_string();
    let mut axis = vec![' '; width];

    axis[0] = '0';
    let start = width.saturating_sub(label.chars().count()) / 2;
    for (i, c) in label.chars().enumerate() {
        if let Some(cell) = axis.get_mut(start + i) {
            *cell = c;
        }
    }
    if last_stage > 0 {
        let offset = width.saturating_sub(right.len());
        for (i, c) in right.chars().enumerate() {
            if let Some(cell) = axis.get_mut(offset + i) {
                *cell = c;
            }
        }
    }

    let line: String = axis.into_iter().collect();
    format!("{:LABEL_WIDTH$}{}\n", "", line.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        models::enrichment::ProfileConfig,
        support::{constraint::ConstraintResult, isotope::Assay},
    };

    fn profile(stages: f64) -> ConstraintResult<EnrichmentProfile> {
        Ok(EnrichmentProfile::new(
            Assay::from_percent(0.25)?,
            Assay::from_percent(4.5)?,
            stages,
            &ProfileConfig::default(),
        ))
    }

    #[test]
    fn text_chart_spans_the_grid() -> ConstraintResult<()> {
        let config = ChartConfig::default();
        let text = render_text(&profile(8.59)?, &config);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Simplified Cascade Enrichment Profile");
        assert_eq!(lines[1], "Light Isotope % (log scale)");

        // Highest assay in the top-right corner, lowest in the bottom-left.
        let top = lines[2];
        let bottom = lines[1 + config.text_height];
        assert!(top.starts_with("   4.5000 |"));
        assert!(top.ends_with('*'));
        assert!(bottom.starts_with("   0.2500 |*"));

        let stars = text.matches('*').count();
        assert_eq!(stars, 8);
        assert!(text.contains("Stage Number"));
        Ok(())
    }

    #[test]
    fn text_chart_of_single_point() -> ConstraintResult<()> {
        let text = render_text(&profile(f64::INFINITY)?, &ChartConfig::default());
        assert_eq!(text.matches('*').count(), 1);
        Ok(())
    }

    #[test]
    fn narrow_text_chart() -> ConstraintResult<()> {
        let config = ChartConfig {
            text_width: 2,
            ..ChartConfig::default()
        };
        let text = render_text(&profile(673.6)?, &config);

        assert!(text.contains('*'));
        for line in text.lines().skip(2) {
            assert!(line.chars().count() <= LABEL_WIDTH + 2, "{line:?}");
        }
        Ok(())
    }

    #[test]
    fn svg_chart() -> Result<(), Box<dyn std::error::Error>> {
        let svg = render_svg(&profile(75.6)?, &ChartConfig::default())?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        Ok(())
    }

    #[test]
    fn export_writes_file() -> Result<(), Box<dyn std::error::Error>> {
        let path =
            std::env::temp_dir().join(format!("isotope-profile-{}.svg", std::process::id()));
        export_svg(&profile(14.3)?, &ChartConfig::default(), &path)?;

        let written = std::fs::read_to_string(&path)?;
        std::fs::remove_file(&path)?;
        assert!(written.contains("<svg"));
        Ok(())
    }
}
