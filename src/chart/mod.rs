//! PNG bar chart of a [`GainTable`].
//!
//! Text is rasterized with `ab_glyph`, so a TrueType font has to be registered before
//! drawing. [`ensure_font`] looks at `MARKETBRIEF_FONT` first, then probes common
//! system locations and finally falls back to a bundled DejaVu Sans.

mod font;

use std::path::{Path, PathBuf};

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;

use crate::{GainTable, MarketError};

pub use font::{FONT_ENV_VAR, FontSource, ensure_font};

/// File name written in the working directory when no output path is given.
pub const DEFAULT_CHART_FILE: &str = "ytd_stock_gains.png";

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Layout and destination of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
}

impl ChartSpec {
    /// The year-to-date gains chart: `"YTD Stock Gains for A and B (YEAR)"`, 1000x600,
    /// written to [`DEFAULT_CHART_FILE`].
    pub fn ytd<S: AsRef<str>>(symbols: &[S], year: i32) -> Self {
        Self {
            title: format!("YTD Stock Gains for {} ({year})", join_symbols(symbols)),
            x_desc: "Ticker".into(),
            y_desc: "Percent Gain (%)".into(),
            width: 1000,
            height: 600,
            output: PathBuf::from(DEFAULT_CHART_FILE),
        }
    }

    /// Writes to `path` instead of the default file.
    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }
}

/// `["A"]` -> `A`, `["A", "B"]` -> `A and B`, `["A", "B", "C"]` -> `A, B and C`.
fn join_symbols<S: AsRef<str>>(symbols: &[S]) -> String {
    match symbols {
        [] => String::new(),
        [one] => one.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

fn chart_err<E: std::fmt::Display>(e: E) -> MarketError {
    MarketError::Chart(e.to_string())
}

/// Value axis bounds: always includes zero, padded by 10% of the span.
fn value_bounds(table: &GainTable) -> (f64, f64) {
    let (lo, hi) = table
        .iter()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), (_, g)| (lo.min(g), hi.max(g)));
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (-1.0, 1.0);
    }
    let pad = span * 0.1;
    (if lo < 0.0 { lo - pad } else { 0.0 }, if hi > 0.0 { hi + pad } else { 0.0 })
}

/// Draws one bar per row of `table`, in table order, and saves the PNG to `spec.output`.
///
/// # Errors
///
/// Returns [`MarketError::InvalidParams`] for an empty table and [`MarketError::Chart`] when
/// drawing or encoding fails.
#[tracing::instrument(
    skip(table),
    err(level = "debug"),
    fields(output = %spec.output.display())
)]
pub fn render_bar_chart(table: &GainTable, spec: &ChartSpec) -> Result<PathBuf, MarketError> {
    if table.is_empty() {
        return Err(MarketError::InvalidParams("no gains to plot".into()));
    }
    ensure_font()?;

    let labels: Vec<&str> = table.symbols().collect();
    // Integer ranges are inclusive: `0..last` has `last + 1` segments.
    let last = i32::try_from(labels.len() - 1)
        .map_err(|_| MarketError::InvalidParams("too many bars".into()))?
        .max(1);
    let (y_min, y_max) = value_bounds(table);

    let root = BitMapBackend::new(&spec.output, (spec.width, spec.height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d((0..last).into_segmented(), y_min..y_max)
        .map_err(chart_err)?;

    let label_of = |v: &SegmentValue<i32>| match v {
        SegmentValue::CenterOf(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| labels.get(i))
            .map(|s| (*s).to_string())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .x_label_formatter(&label_of)
        .y_label_formatter(&|v| format!("{v:.0}"))
        .axis_desc_style(("sans-serif", 18))
        .label_style(("sans-serif", 15))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(table.iter().enumerate().filter_map(|(i, (_, gain))| {
            let i = i32::try_from(i).ok()?;
            let (lo, hi) = if gain >= 0.0 { (0.0, gain) } else { (gain, 0.0) };
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), lo), (SegmentValue::Exact(i + 1), hi)],
                BAR_COLOR.filled(),
            );
            bar.set_margin(0, 0, 40, 40);
            Some(bar)
        }))
        .map_err(chart_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (SegmentValue::Exact(0), 0.0),
                (SegmentValue::Exact(last + 1), 0.0),
            ],
            BLACK,
        )))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    tracing::info!(path = %spec.output.display(), bars = table.len(), "chart written");

    Ok(spec.output.clone())
}

/// Opens `path` in the platform image viewer.
///
/// Headless sessions have no viewer; the failure is logged and swallowed so the saved file
/// remains the result of the run.
pub fn show(path: &Path) {
    match open::that(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "opened chart"),
        Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not display chart"),
    }
}
