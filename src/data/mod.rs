//! Sales Dataset
//!
//! The in-memory table the dashboard is built from:
//!
//! - **types**: `SalesRecord`, one row of the table
//! - **dataset**: `Dataset`, the ordered, immutable collection of records
//!
//! The dataset is created once at startup and shared read-only for the
//! lifetime of the process.
//!
//! # Example
//!
//! ```rust
//! use sales_dashboard::data::Dataset;
//!
//! let dataset = Dataset::sample();
//! let east = dataset.filter_region("East");
//!
//! assert_eq!(east.len(), 2);
//! assert_eq!(dataset.regions(), vec!["East", "West", "North", "South"]);
//! ```

pub mod dataset;
pub mod types;

pub use dataset::Dataset;
pub use types::SalesRecord;
