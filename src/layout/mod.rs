//! Page Layout
//!
//! The dashboard page as a static element tree, built once at startup:
//!
//! - **element**: `Element` tree and inline `Style`
//! - **builder**: Assembles the dashboard layout from the dataset
//! - **render**: HTML rendering of the tree, the full page and the
//!   per-output fragments sent on each region change
//!
//! ```text
//! div (page)
//! ├── h1 heading
//! ├── div: label + dropdown#region-dropdown
//! ├── br
//! ├── div (flex): div#total-sales, div#total-profit
//! ├── br
//! ├── graph#sales-line-chart
//! └── graph#profit-bar-chart
//! ```

pub mod builder;
pub mod element;
pub mod render;

pub use builder::{build_layout, card_style, Layout};
pub use element::{DropdownOption, Element, Style};
pub use render::{render_element, render_fragments, render_page};

/// Ids of the selector and the four outputs
pub mod ids {
    pub const REGION_DROPDOWN: &str = "region-dropdown";
    pub const TOTAL_SALES: &str = "total-sales";
    pub const TOTAL_PROFIT: &str = "total-profit";
    pub const SALES_LINE_CHART: &str = "sales-line-chart";
    pub const PROFIT_BAR_CHART: &str = "profit-bar-chart";

    /// Every output recomputed on a region change
    pub const OUTPUTS: [&str; 4] = [SALES_LINE_CHART, PROFIT_BAR_CHART, TOTAL_SALES, TOTAL_PROFIT];
}
