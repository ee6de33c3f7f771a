//! Dashboard Update Handler
//!
//! Maps a selected region to the four dashboard outputs:
//!
//! 1. Sales trend line chart (month → sales)
//! 2. Profit distribution bar chart (month → profit)
//! 3. Total sales card
//! 4. Total profit card
//!
//! The update is a pure function of the dataset, the region and the display
//! settings. An unknown region is not an error: it produces empty charts and
//! zero totals.
//!
//! # Example
//!
//! ```rust
//! use sales_dashboard::dashboard::{update_dashboard, DashboardSettings};
//! use sales_dashboard::data::Dataset;
//!
//! let dataset = Dataset::sample();
//! let update = update_dashboard(&dataset, "East", &DashboardSettings::default());
//!
//! assert_eq!(update.total_sales.amount, 29_000);
//! assert_eq!(update.total_sales.display, "₹ 29,000");
//! assert_eq!(update.sales_chart.len(), 2);
//! ```

pub mod settings;
pub mod update;

pub use settings::DashboardSettings;
pub use update::{update_dashboard, Dashboard, DashboardUpdate, SummaryCard};
