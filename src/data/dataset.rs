//! The immutable sales table

use serde::Serialize;

use super::types::SalesRecord;

/// Ordered, read-only collection of sales records
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Build a dataset from records, keeping their order
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// The built-in six-month sample table
    pub fn sample() -> Self {
        Self::new(vec![
            SalesRecord::new("Jan", 12_000, 3_000, "East"),
            SalesRecord::new("Feb", 15_000, 4_000, "West"),
            SalesRecord::new("Mar", 17_000, 4_500, "East"),
            SalesRecord::new("Apr", 16_000, 4_200, "North"),
            SalesRecord::new("May", 20_000, 6_000, "South"),
            SalesRecord::new("Jun", 22_000, 6_500, "West"),
        ])
    }

    /// All records in table order
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions in order of first appearance
    pub fn regions(&self) -> Vec<&str> {
        let mut regions: Vec<&str> = Vec::new();
        for record in &self.records {
            if !regions.contains(&record.region.as_str()) {
                regions.push(&record.region);
            }
        }
        regions
    }

    /// Check whether any record belongs to `region`
    pub fn has_region(&self, region: &str) -> bool {
        self.records.iter().any(|r| r.in_region(region))
    }

    /// Records of one region, table order preserved
    ///
    /// An unknown region yields an empty vector.
    pub fn filter_region(&self, region: &str) -> Vec<&SalesRecord> {
        self.records.iter().filter(|r| r.in_region(region)).collect()
    }

    /// Sum of sales over the whole table
    pub fn total_sales(&self) -> u64 {
        self.records.iter().map(|r| r.sales).sum()
    }

    /// Sum of profit over the whole table
    pub fn total_profit(&self) -> i64 {
        self.records.iter().map(|r| r.profit).sum()
    }
}
