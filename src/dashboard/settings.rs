//! Display settings for the dashboard page

use crate::config::DashboardConfig;

/// Everything the layout and update handler need besides the data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Browser tab title
    pub title: String,
    /// Page heading
    pub heading: String,
    /// Region selected when the page loads (`None` = first region)
    pub default_region: Option<String>,
    /// Prefix for the total cards
    pub currency_symbol: String,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: "Sales Dashboard".to_string(),
            heading: "📊 Sales & Profit Dashboard".to_string(),
            default_region: None,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl From<&DashboardConfig> for DashboardSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            title: config.title.clone(),
            heading: config.heading.clone(),
            default_region: config.default_region.clone(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }
}
