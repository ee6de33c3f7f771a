//! Layout element tree
//!
//! A small declarative model of the page: containers, text, the region
//! selector and chart placeholders. Styles are declared with camelCase keys
//! and rendered as kebab-case CSS.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::chart::Figure;

/// Inline style declarations, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style(Vec<(String, String)>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set a property, replacing an earlier value
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a CSS declaration list: `text-align: center; padding: 20px`
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| format!("{}: {}", kebab_case(k), v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// `borderRadius` → `border-radius`
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// One entry of a dropdown
#[derive(Debug, Clone, serde::Serialize, PartialEq, Eq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    /// Option whose label and value are the same text
    pub fn same(text: &str) -> Self {
        Self {
            label: text.to_string(),
            value: text.to_string(),
        }
    }
}

/// A node of the page layout
#[derive(Debug, Clone, serde::Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Generic container
    Div {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        style: Style,
        children: Vec<Element>,
    },
    /// `h1`..`h6`
    Heading {
        level: u8,
        text: String,
        style: Style,
    },
    Label {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        for_id: Option<String>,
    },
    /// Single-choice selector
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        value: String,
        clearable: bool,
    },
    LineBreak,
    /// Chart output region
    Graph {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        figure: Option<Figure>,
    },
}

impl Element {
    /// Container without id
    pub fn div(style: Style, children: Vec<Element>) -> Self {
        Element::Div {
            id: None,
            style,
            children,
        }
    }

    /// Container with an id and no children yet
    pub fn output(id: &str, style: Style) -> Self {
        Element::Div {
            id: Some(id.to_string()),
            style,
            children: Vec::new(),
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Element::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
            style: Style::new(),
        }
    }

    pub fn styled_heading(level: u8, text: impl Into<String>, style: Style) -> Self {
        Element::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
            style,
        }
    }

    pub fn graph(id: &str) -> Self {
        Element::Graph {
            id: id.to_string(),
            figure: None,
        }
    }

    /// Id of this node, if it has one
    pub fn id(&self) -> Option<&str> {
        match self {
            Element::Div { id, .. } => id.as_deref(),
            Element::Dropdown { id, .. } | Element::Graph { id, .. } => Some(id),
            _ => None,
        }
    }

    /// Depth-first search for the node with `id`
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Element::Div { children, .. } => children.iter().find_map(|c| c.find(id)),
            _ => None,
        }
    }

    /// Mutable depth-first search for the node with `id`
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Element::Div { children, .. } => children.iter_mut().find_map(|c| c.find_mut(id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_to_css() {
        let style = Style::new()
            .set("textAlign", "center")
            .set("borderRadius", "10px")
            .set("padding", "20px");
        assert_eq!(
            style.to_css(),
            "text-align: center; border-radius: 10px; padding: 20px"
        );
    }

    #[test]
    fn test_style_set_replaces() {
        let style = Style::new().set("width", "1px").set("width", "2px");
        assert_eq!(style.get("width"), Some("2px"));
        assert_eq!(style.to_css(), "width: 2px");
    }

    #[test]
    fn test_style_serializes_as_map() {
        let style = Style::new().set("marginBottom", "30px");
        let json = serde_json::to_string(&style).unwrap();
        assert_eq!(json, r#"{"marginBottom":"30px"}"#);
    }

    #[test]
    fn test_find_nested() {
        let mut tree = Element::div(
            Style::new(),
            vec![
                Element::heading(1, "Title"),
                Element::div(Style::new(), vec![Element::output("total-sales", Style::new())]),
                Element::graph("chart"),
            ],
        );

        assert!(tree.find("total-sales").is_some());
        assert!(matches!(tree.find("chart"), Some(Element::Graph { .. })));
        assert!(tree.find("missing").is_none());

        if let Some(Element::Div { children, .. }) = tree.find_mut("total-sales") {
            children.push(Element::heading(4, "Total Sales"));
        }
        match tree.find("total-sales") {
            Some(Element::Div { children, .. }) => assert_eq!(children.len(), 1),
            _ => panic!("Expected Div"),
        }
    }

    #[test]
    fn test_element_serialize_tagged() {
        let json = serde_json::to_string(&Element::LineBreak).unwrap();
        assert_eq!(json, r#"{"type":"line_break"}"#);

        let json = serde_json::to_string(&Element::graph("g")).unwrap();
        assert_eq!(json, r#"{"type":"graph","id":"g"}"#);
    }
}
