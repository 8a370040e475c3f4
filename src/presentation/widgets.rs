// Widget surfaces - the in-memory rendering targets the sinks draw into
use crate::domain::status::Severity;
use serde::Serialize;

const SEVERITY_CLASSES: [&str; 3] = ["success", "warning", "danger"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextField {
    pub text: String,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new("--")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBadge {
    pub text: String,
    pub classes: Vec<String>,
}

impl StatusBadge {
    pub fn new() -> Self {
        Self {
            text: "--".to_string(),
            classes: vec!["status-value".to_string()],
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Swap whatever severity class is present for `severity`.
    pub fn apply_severity(&mut self, severity: Severity) {
        self.classes
            .retain(|class| !SEVERITY_CLASSES.contains(&class.as_str()));
        self.classes.push(severity_class(severity).to_string());
    }
}

#[cfg(test)]
impl StatusBadge {
    pub fn severity(&self) -> Option<Severity> {
        self.classes.iter().find_map(|class| match class.as_str() {
            "success" => Some(Severity::Success),
            "warning" => Some(Severity::Warning),
            "danger" => Some(Severity::Danger),
            _ => None,
        })
    }
}

impl Default for StatusBadge {
    fn default() -> Self {
        Self::new()
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Warning => "warning",
        Severity::Danger => "danger",
    }
}

/// One entry of a feed. All strings are already escaped for markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub class: String,
    pub title: Option<String>,
    pub text: String,
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ItemList {
    pub items: Vec<ListItem>,
    /// Shown instead of items when the feed is empty.
    pub placeholder: Option<String>,
}

impl ItemList {
    pub fn replace(&mut self, items: Vec<ListItem>) {
        self.items = items;
        self.placeholder = None;
    }

    pub fn show_placeholder(&mut self, text: impl Into<String>) {
        self.items.clear();
        self.placeholder = Some(text.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub y_range: Option<(f64, f64)>,
    /// Bumped on every redraw.
    pub revision: u64,
}

impl Chart {
    pub fn new(kind: ChartKind, title: &str, series: &[&str]) -> Self {
        Self {
            kind,
            title: title.to_string(),
            labels: Vec::new(),
            datasets: series
                .iter()
                .map(|label| Dataset {
                    label: label.to_string(),
                    data: Vec::new(),
                })
                .collect(),
            y_range: None,
            revision: 0,
        }
    }

    /// Fixed index axis `0..n`.
    pub fn with_index_axis(mut self, n: usize) -> Self {
        self.labels = (0..n).map(|i| i.to_string()).collect();
        self
    }

    pub fn with_y_range(mut self, min: f64, max: f64) -> Self {
        self.y_range = Some((min, max));
        self
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.labels = labels;
    }

    /// Replace the whole buffer of one dataset. Unknown indices are ignored.
    pub fn set_series(&mut self, index: usize, data: Vec<f64>) {
        if let Some(dataset) = self.datasets.get_mut(index) {
            dataset.data = data;
        }
    }

    pub fn redraw(&mut self) {
        self.revision += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub label: String,
    pub points: Vec<Point>,
    pub revision: u64,
}

impl ScatterChart {
    pub fn new(title: &str, label: &str) -> Self {
        Self {
            title: title.to_string(),
            label: label.to_string(),
            points: Vec::new(),
            revision: 0,
        }
    }

    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn redraw(&mut self) {
        self.revision += 1;
    }
}

/// Diagram surface. Like the browser-side renderer, it remembers that its container
/// was processed and skips `process` until the marker is invalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Diagram {
    pub source: String,
    pub processed: bool,
    pub revision: u64,
}

impl Diagram {
    pub fn set_source(&mut self, source: String) {
        self.source = source;
    }

    pub fn invalidate(&mut self) {
        self.processed = false;
    }

    pub fn process(&mut self) {
        if self.processed {
            return;
        }
        self.processed = true;
        self.revision += 1;
    }
}
