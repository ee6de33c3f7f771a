//! Region update rule and the outputs it produces

use serde::Serialize;
use std::sync::Arc;

use super::settings::DashboardSettings;
use crate::chart::Figure;
use crate::data::Dataset;
use crate::format::format_currency;
use crate::layout::Element;

/// One summary card: a heading and a formatted total
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SummaryCard {
    pub heading: String,
    /// Raw total in whole currency units
    pub amount: i64,
    /// Total formatted with currency symbol and thousands separators
    pub display: String,
}

impl SummaryCard {
    pub fn new(heading: impl Into<String>, amount: i64, currency_symbol: &str) -> Self {
        Self {
            heading: heading.into(),
            amount,
            display: format_currency(currency_symbol, amount),
        }
    }

    /// Card content as layout elements: `h4` heading over `h2` value
    pub fn to_elements(&self) -> Vec<Element> {
        vec![
            Element::heading(4, self.heading.clone()),
            Element::heading(2, self.display.clone()),
        ]
    }
}

/// The four outputs recomputed on every region change
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardUpdate {
    /// Region the outputs were computed for
    pub region: String,
    pub sales_chart: Figure,
    pub profit_chart: Figure,
    pub total_sales: SummaryCard,
    pub total_profit: SummaryCard,
}

/// Compute the dashboard outputs for `region`
///
/// Records are matched by exact region equality in table order. No match
/// yields empty series and zero totals.
pub fn update_dashboard(
    dataset: &Dataset,
    region: &str,
    settings: &DashboardSettings,
) -> DashboardUpdate {
    let records = dataset.filter_region(region);

    let sales_chart = Figure::line(format!("Sales Trend - {}", region))
        .axes("Month", "Sales")
        .with_markers()
        .points(records.iter().map(|r| (r.month.as_str(), r.sales as f64)));

    let profit_chart = Figure::bar(format!("Profit Distribution - {}", region))
        .axes("Month", "Profit")
        .points(records.iter().map(|r| (r.month.as_str(), r.profit as f64)));

    let total_sales: u64 = records.iter().map(|r| r.sales).sum();
    let total_profit: i64 = records.iter().map(|r| r.profit).sum();

    DashboardUpdate {
        region: region.to_string(),
        sales_chart,
        profit_chart,
        total_sales: SummaryCard::new(
            "Total Sales",
            i64::try_from(total_sales).unwrap_or(i64::MAX),
            &settings.currency_symbol,
        ),
        total_profit: SummaryCard::new("Total Profit", total_profit, &settings.currency_symbol),
    }
}

/// Dataset plus display settings, shared read-only by all requests
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    settings: DashboardSettings,
    initial_region: String,
}

impl Dashboard {
    /// Bind settings to a dataset and resolve the initially selected region
    ///
    /// A configured default region that does not occur in the dataset falls
    /// back to the first region.
    pub fn new(dataset: Arc<Dataset>, settings: DashboardSettings) -> Self {
        let first = dataset.regions().first().map(|r| r.to_string());

        let initial_region = match settings.default_region.as_deref() {
            Some(region) if dataset.has_region(region) => region.to_string(),
            Some(region) => {
                tracing::warn!(
                    region = %region,
                    fallback = ?first,
                    "Configured default region not in dataset"
                );
                first.unwrap_or_default()
            }
            None => first.unwrap_or_default(),
        };

        if initial_region.is_empty() {
            tracing::warn!("Dataset has no regions, selector will be empty");
        }

        Self {
            dataset,
            settings,
            initial_region,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Region selected when the page first loads
    pub fn initial_region(&self) -> &str {
        &self.initial_region
    }

    /// Values offered by the selector
    pub fn regions(&self) -> Vec<&str> {
        self.dataset.regions()
    }

    /// Run the update rule for `region`
    pub fn update(&self, region: &str) -> DashboardUpdate {
        let update = update_dashboard(&self.dataset, region, &self.settings);

        tracing::debug!(
            region = %region,
            points = update.sales_chart.len(),
            total_sales = update.total_sales.amount,
            total_profit = update.total_profit.amount,
            "Dashboard updated"
        );

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartKind;
    use crate::data::SalesRecord;

    fn sample() -> Dataset {
        Dataset::sample()
    }

    #[test]
    fn test_east_totals() {
        let update = update_dashboard(&sample(), "East", &DashboardSettings::default());
        assert_eq!(update.total_sales.amount, 29_000);
        assert_eq!(update.total_sales.display, "₹ 29,000");
        assert_eq!(update.total_profit.amount, 7_500);
        assert_eq!(update.total_profit.display, "₹ 7,500");
        assert_eq!(update.total_sales.heading, "Total Sales");
        assert_eq!(update.total_profit.heading, "Total Profit");
    }

    #[test]
    fn test_series_match_records() {
        let update = update_dashboard(&sample(), "West", &DashboardSettings::default());

        assert_eq!(update.sales_chart.kind, ChartKind::Line);
        assert!(update.sales_chart.markers);
        assert_eq!(update.sales_chart.title, "Sales Trend - West");
        assert_eq!(update.sales_chart.len(), 2);
        assert_eq!(update.sales_chart.points[0].label, "Feb");
        assert_eq!(update.sales_chart.points[0].value, 15_000.0);
        assert_eq!(update.sales_chart.points[1].label, "Jun");

        assert_eq!(update.profit_chart.kind, ChartKind::Bar);
        assert_eq!(update.profit_chart.title, "Profit Distribution - West");
        assert_eq!(update.profit_chart.len(), 2);
        assert_eq!(update.profit_chart.points[1].value, 6_500.0);
    }

    #[test]
    fn test_partition_of_totals() {
        let dataset = sample();
        let settings = DashboardSettings::default();

        let sales: i64 = dataset
            .regions()
            .iter()
            .map(|r| update_dashboard(&dataset, r, &settings).total_sales.amount)
            .sum();
        let profit: i64 = dataset
            .regions()
            .iter()
            .map(|r| update_dashboard(&dataset, r, &settings).total_profit.amount)
            .sum();

        assert_eq!(sales, dataset.total_sales() as i64);
        assert_eq!(profit, dataset.total_profit());
    }

    #[test]
    fn test_series_length_equals_record_count() {
        let dataset = sample();
        let settings = DashboardSettings::default();
        for region in dataset.regions() {
            let update = update_dashboard(&dataset, region, &settings);
            let expected = dataset.filter_region(region).len();
            assert_eq!(update.sales_chart.len(), expected);
            assert_eq!(update.profit_chart.len(), expected);
        }
    }

    #[test]
    fn test_unknown_region_is_empty() {
        let update = update_dashboard(&sample(), "Central", &DashboardSettings::default());
        assert!(update.sales_chart.is_empty());
        assert!(update.profit_chart.is_empty());
        assert_eq!(update.total_sales.amount, 0);
        assert_eq!(update.total_profit.amount, 0);
        assert_eq!(update.total_sales.display, "₹ 0");
    }

    #[test]
    fn test_update_is_deterministic() {
        let dataset = sample();
        let settings = DashboardSettings::default();
        let first = update_dashboard(&dataset, "North", &settings);
        let second = update_dashboard(&dataset, "North", &settings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_profit_formatting() {
        let dataset = Dataset::new(vec![
            SalesRecord::new("Jan", 1_000, -2_500, "Loss"),
            SalesRecord::new("Feb", 2_000, 1_300, "Loss"),
        ]);
        let settings = DashboardSettings {
            currency_symbol: "$".to_string(),
            ..Default::default()
        };
        let update = update_dashboard(&dataset, "Loss", &settings);
        assert_eq!(update.total_profit.display, "$ -1,200");
        assert_eq!(update.total_sales.display, "$ 3,000");
    }

    #[test]
    fn test_card_elements() {
        let card = SummaryCard::new("Total Sales", 29_000, "₹");
        let elements = card.to_elements();
        assert_eq!(elements.len(), 2);
        assert!(matches!(&elements[0], Element::Heading { level: 4, text, .. } if text == "Total Sales"));
        assert!(matches!(&elements[1], Element::Heading { level: 2, text, .. } if text == "₹ 29,000"));
    }

    #[test]
    fn test_dashboard_initial_region() {
        let dataset = Arc::new(sample());

        let dashboard = Dashboard::new(Arc::clone(&dataset), DashboardSettings::default());
        assert_eq!(dashboard.initial_region(), "East");

        let settings = DashboardSettings {
            default_region: Some("South".to_string()),
            ..Default::default()
        };
        let dashboard = Dashboard::new(Arc::clone(&dataset), settings);
        assert_eq!(dashboard.initial_region(), "South");

        let settings = DashboardSettings {
            default_region: Some("Atlantis".to_string()),
            ..Default::default()
        };
        let dashboard = Dashboard::new(dataset, settings);
        assert_eq!(dashboard.initial_region(), "East");
    }

    #[test]
    fn test_dashboard_empty_dataset() {
        let dashboard = Dashboard::new(Arc::new(Dataset::default()), DashboardSettings::default());
        assert_eq!(dashboard.initial_region(), "");
        assert!(dashboard.regions().is_empty());
        assert_eq!(dashboard.update("East").total_sales.amount, 0);
    }
}
