//! SVG Chart Renderer
//!
//! Draws a `Figure` as a self-contained `<svg>` element: title, horizontal
//! grid with y-axis labels, one category slot per point on the x axis, and
//! the series itself as a polyline (with optional markers) or as bars.

use super::figure::{ChartKind, Figure};
use crate::format::{escape_html, group_thousands};

/// Series color (primary)
const SERIES_COLOR: &str = "#636efa";
const GRID_COLOR: &str = "#e5ecf6";
const AXIS_TEXT_COLOR: &str = "#444444";
const PLOT_BACKGROUND: &str = "#ffffff";

/// Number of horizontal grid intervals
const GRID_LINES: usize = 5;

/// Canvas size and margins
#[derive(Debug, Clone, Copy)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 420.0,
            margin_left: 80.0,
            margin_right: 30.0,
            margin_top: 60.0,
            margin_bottom: 60.0,
        }
    }
}

impl SvgOptions {
    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// Render a figure to an SVG string
pub fn render_svg(figure: &Figure, opts: &SvgOptions) -> String {
    let (y_min, y_max) = y_range(figure);
    let plot_w = opts.plot_width();
    let plot_h = opts.plot_height();

    let scale_y = |value: f64| opts.margin_top + ((y_max - value) / (y_max - y_min)) * plot_h;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}" font-family="Arial, sans-serif">"#,
        w = opts.width,
        h = opts.height,
        title = escape_html(&figure.title),
    ));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        opts.width, opts.height, PLOT_BACKGROUND
    ));

    // Title
    svg.push_str(&format!(
        r#"<text x="{:.1}" y="{:.1}" font-size="18" fill="{}">{}</text>"#,
        opts.margin_left,
        opts.margin_top / 2.0 + 6.0,
        AXIS_TEXT_COLOR,
        escape_html(&figure.title)
    ));

    // Horizontal grid lines with y-axis labels
    for i in 0..=GRID_LINES {
        let fraction = i as f64 / GRID_LINES as f64;
        let y = opts.margin_top + fraction * plot_h;
        let value = y_max - fraction * (y_max - y_min);
        svg.push_str(&format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            opts.margin_left,
            y,
            opts.width - opts.margin_right,
            y,
            GRID_COLOR
        ));
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="end" fill="{}">{}</text>"#,
            opts.margin_left - 8.0,
            y + 4.0,
            AXIS_TEXT_COLOR,
            group_thousands(value.round() as i64)
        ));
    }

    // Axis titles
    if !figure.x_label.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="14" text-anchor="middle" fill="{}">{}</text>"#,
            opts.margin_left + plot_w / 2.0,
            opts.height - 12.0,
            AXIS_TEXT_COLOR,
            escape_html(&figure.x_label)
        ));
    }
    if !figure.y_label.is_empty() {
        let cy = opts.margin_top + plot_h / 2.0;
        svg.push_str(&format!(
            r#"<text x="16" y="{cy:.1}" font-size="14" text-anchor="middle" fill="{color}" transform="rotate(-90 16 {cy:.1})">{label}</text>"#,
            cy = cy,
            color = AXIS_TEXT_COLOR,
            label = escape_html(&figure.y_label)
        ));
    }

    if figure.is_empty() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="16" text-anchor="middle" fill="{}">No data</text>"#,
            opts.margin_left + plot_w / 2.0,
            opts.margin_top + plot_h / 2.0,
            AXIS_TEXT_COLOR
        ));
        svg.push_str("</svg>");
        return svg;
    }

    let slot = plot_w / figure.len() as f64;
    let center_x = |i: usize| opts.margin_left + slot * (i as f64 + 0.5);

    // Category labels
    for (i, point) in figure.points.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{:.1}" y="{:.1}" font-size="12" text-anchor="middle" fill="{}">{}</text>"#,
            center_x(i),
            opts.margin_top + plot_h + 18.0,
            AXIS_TEXT_COLOR,
            escape_html(&point.label)
        ));
    }

    match figure.kind {
        ChartKind::Line => {
            let path: Vec<String> = figure
                .points
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let cmd = if i == 0 { 'M' } else { 'L' };
                    format!("{}{:.1},{:.1}", cmd, center_x(i), scale_y(p.value))
                })
                .collect();
            svg.push_str(&format!(
                r#"<path d="{}" fill="none" stroke="{}" stroke-width="2"/>"#,
                path.join(" "),
                SERIES_COLOR
            ));

            if figure.markers {
                for (i, p) in figure.points.iter().enumerate() {
                    svg.push_str(&format!(
                        r#"<circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"/>"#,
                        center_x(i),
                        scale_y(p.value),
                        SERIES_COLOR
                    ));
                }
            }
        }
        ChartKind::Bar => {
            let bar_w = slot * 0.6;
            let zero_y = scale_y(0.0);
            for (i, p) in figure.points.iter().enumerate() {
                let value_y = scale_y(p.value);
                let top = value_y.min(zero_y);
                let height = (value_y - zero_y).abs();
                svg.push_str(&format!(
                    r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                    center_x(i) - bar_w / 2.0,
                    top,
                    bar_w,
                    height,
                    SERIES_COLOR
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

/// Y-axis range with 10% padding; bars always include zero
fn y_range(figure: &Figure) -> (f64, f64) {
    let (mut lo, mut hi) = figure.value_bounds().unwrap_or((0.0, 1.0));

    if figure.kind == ChartKind::Bar {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }

    let span = hi - lo;
    let padding = if span > 0.0 { span * 0.1 } else { 1.0 };

    match figure.kind {
        ChartKind::Line => {
            lo -= padding;
            hi += padding;
        }
        ChartKind::Bar => {
            // Bars grow from zero, so only pad away from it
            if lo < 0.0 {
                lo -= padding;
            }
            if hi > 0.0 || lo >= 0.0 {
                hi += padding;
            }
        }
    }

    (lo, hi)
}
