//! Plotters-powered chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - less manual work for ticks/labels
//! - easy to extend later (legend, annotations, exportable PNG/SVG backends, etc.)
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// How one series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Connected line (time series per country).
    Line,
    /// Individual points (GDP vs growth).
    Scatter,
    /// Vertical bars anchored at zero (per-country means).
    Bars,
}

/// One named series with its palette color.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub kind: SeriesKind,
    pub color: RGBColor,
    pub points: Vec<(f64, f64)>,
}

/// A lightweight, render-only chart description.
///
/// The widget is intentionally data-driven: all series and bounds are computed
/// outside the render call. This keeps `render()` focused on drawing and makes
/// it easy to test/benchmark the data prep separately.
pub struct GdpPlottersChart<'a> {
    pub series: &'a [ChartSeries],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    /// Axis labels (kept simple for terminal rendering).
    pub x_label: &'a str,
    pub y_label: &'a str,
    /// Category labels for bar charts; tick values index into this list.
    /// When set, it takes precedence over `fmt_x`.
    pub x_categories: Option<&'a [String]>,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for GdpPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let x0 = self.x_bounds[0];
        let x1 = self.x_bounds[1];
        let y0 = self.y_bounds[0];
        let y1 = self.y_bounds[1];

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite())
            || x1 <= x0
            || y1 <= y0
        {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        //
        // We delegate rendering to the crate-provided widget helper to avoid
        // coupling our code to its internal backend types.
        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                // Small margins keep the chart readable without wasting space.
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 8)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            // Axes + tick labels.
            //
            // We disable the mesh lines to reduce visual clutter in
            // low-resolution terminal rendering; the axes + labels are enough.
            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(self.x_label_count())
                .y_labels(5)
                .x_label_formatter(&|v| self.format_x(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            for series in self.series {
                match series.kind {
                    SeriesKind::Line => {
                        chart.draw_series(LineSeries::new(
                            series.points.iter().copied(),
                            &series.color,
                        ))?;
                    }
                    // We intentionally avoid `Circle` markers for scatter
                    // points. The underlying `plotters-ratatui-backend`
                    // currently maps circle radii incorrectly (pixel radius ->
                    // normalized canvas units), producing huge circles.
                    //
                    // A colored `Pixel` gives a clean "dot" that looks good in
                    // terminals.
                    SeriesKind::Scatter => {
                        chart.draw_series(
                            series
                                .points
                                .iter()
                                .map(|&(x, y)| Pixel::new((x, y), series.color)),
                        )?;
                    }
                    SeriesKind::Bars => {
                        // Bars grow from the zero baseline (clamped into the
                        // visible range so negative means still render).
                        let base = 0.0_f64.clamp(y0, y1);
                        chart.draw_series(series.points.iter().map(|&(x, y)| {
                            let (lo, hi) = if y >= base { (base, y) } else { (y, base) };
                            Rectangle::new([(x - 0.35, lo), (x + 0.35, hi)], series.color.filled())
                        }))?;
                    }
                }
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

impl<'a> GdpPlottersChart<'a> {
    fn x_label_count(&self) -> usize {
        match self.x_categories {
            // One tick per category, capped for narrow terminals.
            Some(labels) => labels.len().clamp(1, 8),
            None => 5,
        }
    }

    fn format_x(&self, v: f64) -> String {
        if let Some(labels) = self.x_categories {
            let idx = v.round();
            if idx >= 0.0 && (idx - v).abs() < 0.25 && (idx as usize) < labels.len() {
                return labels[idx as usize].clone();
            }
            return String::new();
        }
        (self.fmt_x)(v)
    }
}
