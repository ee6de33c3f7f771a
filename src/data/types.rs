//! Core data types for the sales dataset

use serde::{Deserialize, Serialize};

/// A single row of the sales table
///
/// `sales` is never negative; `profit` may be.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SalesRecord {
    /// Month label (e.g. "Jan"), used as the chart x-axis category
    pub month: String,
    /// Sales amount in whole currency units
    pub sales: u64,
    /// Profit amount in whole currency units
    pub profit: i64,
    /// Region the record belongs to
    pub region: String,
}

impl SalesRecord {
    /// Create a new record
    pub fn new(
        month: impl Into<String>,
        sales: u64,
        profit: i64,
        region: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            sales,
            profit,
            region: region.into(),
        }
    }

    /// Check whether this record belongs to `region` (exact, case-sensitive)
    pub fn in_region(&self, region: &str) -> bool {
        self.region == region
    }
}
