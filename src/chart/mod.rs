//! Charts
//!
//! Figure specifications produced by the update handler and their rendering
//! to inline SVG for the dashboard page.
//!
//! - **figure**: `Figure`, `ChartKind`, `ChartPoint`
//! - **svg**: Server-side SVG renderer

pub mod figure;
pub mod svg;

pub use figure::{ChartKind, ChartPoint, Figure};
pub use svg::{render_svg, SvgOptions};
