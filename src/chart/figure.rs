//! Figure specification types

use serde::Serialize;

/// How a series is drawn
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

/// One categorical x value and its y value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A single-series chart over categorical x values
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
    /// Draw a marker at each point (line charts only)
    pub markers: bool,
}

impl Figure {
    /// Create an empty line chart
    pub fn line(title: impl Into<String>) -> Self {
        Self::empty(ChartKind::Line, title)
    }

    /// Create an empty bar chart
    pub fn bar(title: impl Into<String>) -> Self {
        Self::empty(ChartKind::Bar, title)
    }

    fn empty(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_label: String::new(),
            y_label: String::new(),
            points: Vec::new(),
            markers: false,
        }
    }

    /// Builder method: set axis labels
    pub fn axes(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Builder method: enable point markers
    pub fn with_markers(mut self) -> Self {
        self.markers = true;
        self
    }

    /// Builder method: append many points
    pub fn points<I, L>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        self.points
            .extend(points.into_iter().map(|(l, v)| ChartPoint::new(l, v)));
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest y value, `None` when there are no points
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.points.iter().map(|p| p.value);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let fig = Figure::line("Sales")
            .axes("Month", "Sales")
            .with_markers()
            .points(vec![("Jan", 1.0)])
            .points(vec![("Feb", 2.0), ("Mar", 3.0)]);

        assert_eq!(fig.kind, ChartKind::Line);
        assert_eq!(fig.len(), 3);
        assert!(fig.markers);
        assert_eq!(fig.points[1].label, "Feb");
    }

    #[test]
    fn test_value_bounds() {
        let fig = Figure::bar("Profit").points(vec![("a", 5.0), ("b", -2.0), ("c", 3.0)]);
        assert_eq!(fig.value_bounds(), Some((-2.0, 5.0)));
        assert_eq!(Figure::bar("empty").value_bounds(), None);
    }

    #[test]
    fn test_serialize_kind() {
        let fig = Figure::bar("Profit");
        let json = serde_json::to_string(&fig).unwrap();
        assert!(json.contains("\"kind\":\"bar\""));
        assert!(json.contains("\"points\":[]"));
    }
}
