//! Dashboard layout builder

use serde::Serialize;

use super::element::{DropdownOption, Element, Style};
use super::ids;
use crate::dashboard::{Dashboard, DashboardUpdate};

/// Style shared by both summary cards
pub fn card_style() -> Style {
    Style::new()
        .set("border", "1px solid #ddd")
        .set("borderRadius", "10px")
        .set("padding", "20px")
        .set("width", "250px")
        .set("textAlign", "center")
        .set("boxShadow", "2px 2px 10px rgba(0,0,0,0.1)")
        .set("backgroundColor", "#ffffff")
}

/// Build the page tree with empty outputs
pub fn build_layout(dashboard: &Dashboard) -> Element {
    let options = dashboard
        .regions()
        .into_iter()
        .map(DropdownOption::same)
        .collect();

    Element::div(
        Style::new()
            .set("fontFamily", "Arial")
            .set("padding", "20px")
            .set("backgroundColor", "#f4f6f9"),
        vec![
            Element::styled_heading(
                1,
                dashboard.settings().heading.clone(),
                Style::new()
                    .set("textAlign", "center")
                    .set("marginBottom", "30px"),
            ),
            Element::div(
                Style::new().set("width", "300px").set("margin", "auto"),
                vec![
                    Element::Label {
                        text: "Select Region".to_string(),
                        for_id: Some(ids::REGION_DROPDOWN.to_string()),
                    },
                    Element::Dropdown {
                        id: ids::REGION_DROPDOWN.to_string(),
                        options,
                        value: dashboard.initial_region().to_string(),
                        clearable: false,
                    },
                ],
            ),
            Element::LineBreak,
            Element::div(
                Style::new()
                    .set("display", "flex")
                    .set("justifyContent", "space-around"),
                vec![
                    Element::output(ids::TOTAL_SALES, card_style()),
                    Element::output(ids::TOTAL_PROFIT, card_style()),
                ],
            ),
            Element::LineBreak,
            Element::graph(ids::SALES_LINE_CHART),
            Element::graph(ids::PROFIT_BAR_CHART),
        ],
    )
}

/// The static page tree, built once and filled per update
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub root: Element,
}

impl Layout {
    pub fn new(dashboard: &Dashboard) -> Self {
        Self {
            title: dashboard.settings().title.clone(),
            root: build_layout(dashboard),
        }
    }

    /// Copy of the tree with the four outputs filled from `update`
    ///
    /// The selector's value follows the update's region.
    pub fn hydrate(&self, update: &DashboardUpdate) -> Element {
        let mut root = self.root.clone();

        if let Some(Element::Dropdown { value, .. }) = root.find_mut(ids::REGION_DROPDOWN) {
            *value = update.region.clone();
        }
        fill_card(&mut root, ids::TOTAL_SALES, update.total_sales.to_elements());
        fill_card(&mut root, ids::TOTAL_PROFIT, update.total_profit.to_elements());
        fill_graph(&mut root, ids::SALES_LINE_CHART, &update.sales_chart);
        fill_graph(&mut root, ids::PROFIT_BAR_CHART, &update.profit_chart);

        root
    }
}

fn fill_card(root: &mut Element, id: &str, content: Vec<Element>) {
    if let Some(Element::Div { children, .. }) = root.find_mut(id) {
        *children = content;
    }
}

fn fill_graph(root: &mut Element, id: &str, fig: &crate::chart::Figure) {
    if let Some(Element::Graph { figure, .. }) = root.find_mut(id) {
        *figure = Some(fig.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::DashboardSettings;
    use crate::data::Dataset;
    use std::sync::Arc;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(Dataset::sample()), DashboardSettings::default())
    }

    #[test]
    fn test_layout_has_all_outputs() {
        let root = build_layout(&dashboard());
        for id in ids::OUTPUTS {
            assert!(root.find(id).is_some(), "missing output {}", id);
        }
    }

    #[test]
    fn test_dropdown_populated_from_regions() {
        let root = build_layout(&dashboard());
        match root.find(ids::REGION_DROPDOWN) {
            Some(Element::Dropdown {
                options,
                value,
                clearable,
                ..
            }) => {
                let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                assert_eq!(values, vec!["East", "West", "North", "South"]);
                assert_eq!(value, "East");
                assert!(!clearable);
            }
            _ => panic!("Expected Dropdown"),
        }
    }

    #[test]
    fn test_outputs_start_empty() {
        let root = build_layout(&dashboard());
        match root.find(ids::TOTAL_SALES) {
            Some(Element::Div { children, style, .. }) => {
                assert!(children.is_empty());
                assert_eq!(style.get("borderRadius"), Some("10px"));
            }
            _ => panic!("Expected Div"),
        }
        assert!(matches!(
            root.find(ids::SALES_LINE_CHART),
            Some(Element::Graph { figure: None, .. })
        ));
    }

    #[test]
    fn test_hydrate_fills_outputs() {
        let dashboard = dashboard();
        let layout = Layout::new(&dashboard);
        let root = layout.hydrate(&dashboard.update("West"));

        match root.find(ids::REGION_DROPDOWN) {
            Some(Element::Dropdown { value, .. }) => assert_eq!(value, "West"),
            _ => panic!("Expected Dropdown"),
        }
        match root.find(ids::TOTAL_PROFIT) {
            Some(Element::Div { children, .. }) => assert_eq!(children.len(), 2),
            _ => panic!("Expected Div"),
        }
        match root.find(ids::PROFIT_BAR_CHART) {
            Some(Element::Graph {
                figure: Some(figure),
                ..
            }) => assert_eq!(figure.len(), 2),
            _ => panic!("Expected filled Graph"),
        }

        // The static tree is untouched
        assert!(matches!(
            layout.root.find(ids::PROFIT_BAR_CHART),
            Some(Element::Graph { figure: None, .. })
        ));
    }
}
