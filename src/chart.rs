//! SVG payoff diagram.
//!
//! Draws the call and put payoff legs of a [`PayoffCurve`], a dashed marker at
//! the strike, the zero line and the moneyness annotations around the strike.

use anyhow::{bail, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

use crate::models::payoff::PayoffCurve;
use crate::scenario::config::ChartConfig;
use crate::scenario::types::OptionType;

const CALL_COLOR: RGBColor = RGBColor(31, 119, 180);
const PUT_COLOR: RGBColor = RGBColor(255, 127, 14);

/// Text placed on the chart, anchored at `(x, y)` in data coordinates.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub lines: Vec<&'static str>,
    pub x: f64,
    pub y: f64,
    pub color: RGBColor,
    pub font_size: u32,
}

/// Moneyness labels: "ATM" on the strike, put ITM region to the left, call ITM to the right.
pub fn moneyness_annotations(strike: f64) -> Vec<Annotation> {
    vec![
        Annotation {
            lines: vec!["ATM"],
            x: strike,
            y: 5.0,
            color: BLACK,
            font_size: 16,
        },
        Annotation {
            lines: vec!["Put ITM", "Call OTM"],
            x: strike - 20.0,
            y: 10.0,
            color: RED,
            font_size: 14,
        },
        Annotation {
            lines: vec!["Call ITM", "Put OTM"],
            x: strike + 20.0,
            y: 10.0,
            color: BLUE,
            font_size: 14,
        },
    ]
}

/// Split the vertical segment `x` from `y_from` to `y_to` into `dashes` dashes
/// separated by gaps of the same length.
pub fn dashed_vertical(x: f64, y_from: f64, y_to: f64, dashes: usize) -> Vec<[(f64, f64); 2]> {
    if dashes == 0 || y_to <= y_from {
        return Vec::new();
    }
    // n dashes and n - 1 gaps
    let unit = (y_to - y_from) / (2 * dashes - 1) as f64;
    (0..dashes)
        .map(|i| {
            let start = y_from + 2.0 * unit * i as f64;
            [(x, start), (x, (start + unit).min(y_to))]
        })
        .collect()
}

/// Render `curve` to an SVG file at `path`.
pub fn render_payoff_chart<P: AsRef<Path>>(
    curve: &PayoffCurve,
    config: &ChartConfig,
    path: P,
) -> Result<()> {
    config.validate()?;
    if curve.len() < 2 {
        bail!("Payoff curve needs at least 2 points, got {}", curve.len());
    }
    let path = path.as_ref();

    let x_min = curve.spots[0];
    let x_max = curve.spots[curve.len() - 1];
    let y_max = (curve.max_payoff() * 1.1).max(12.0);
    let y_min = -0.05 * y_max;
    let strike = curve.strike;

    let root = SVGBackend::new(path, (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(&config.title, ("sans-serif", 30))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(config.x_desc.clone())
        .y_desc(config.y_desc.clone())
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, 0.0), (x_max, 0.0)],
        BLACK.stroke_width(1),
    )))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            curve.points(OptionType::Call),
            CALL_COLOR.stroke_width(2),
        )))?
        .label("call payoff")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CALL_COLOR.stroke_width(2)));

    chart
        .draw_series(std::iter::once(PathElement::new(
            curve.points(OptionType::Put),
            PUT_COLOR.stroke_width(2),
        )))?
        .label("put payoff")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PUT_COLOR.stroke_width(2)));

    if (x_min..=x_max).contains(&strike) {
        chart
            .draw_series(
                dashed_vertical(strike, y_min, y_max, 30)
                    .into_iter()
                    .map(|dash| PathElement::new(dash.to_vec(), BLACK.stroke_width(1))),
            )?
            .label("Strike (K)")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));
    }

    let line_height = (y_max - y_min) * 0.04;
    for note in moneyness_annotations(strike) {
        if !(x_min..=x_max).contains(&note.x) {
            continue;
        }
        let style = ("sans-serif", note.font_size)
            .into_font()
            .color(&note.color)
            .pos(Pos::new(HPos::Center, VPos::Center));
        chart.draw_series(note.lines.iter().enumerate().map(|(i, line)| {
            Text::new(
                line.to_string(),
                (note.x, note.y - line_height * i as f64),
                style.clone(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    tracing::info!(path = %path.display(), points = curve.len(), "Rendered payoff chart");
    Ok(())
}
