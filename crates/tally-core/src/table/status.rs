//! Status badge styling.

use std::collections::BTreeMap;

/// Class used when a status has no entry in the map.
pub const DEFAULT_STATUS_CLASS: &str = "neutral";

/// Case-sensitive mapping from a record's `status` value to a style class,
/// with an explicit fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusStyles {
    classes: BTreeMap<String, String>,
    fallback: String,
}

impl Default for StatusStyles {
    fn default() -> Self {
        Self {
            classes: BTreeMap::new(),
            fallback: DEFAULT_STATUS_CLASS.to_string(),
        }
    }
}

impl StatusStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, status: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes.insert(status.into(), class.into());
        self
    }

    pub fn with_fallback(mut self, class: impl Into<String>) -> Self {
        self.fallback = class.into();
        self
    }

    pub fn insert(&mut self, status: impl Into<String>, class: impl Into<String>) {
        self.classes.insert(status.into(), class.into());
    }

    /// Class for `status`; unmatched values get the fallback.
    pub fn class_for(&self, status: &str) -> &str {
        self.classes
            .get(status)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.classes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StatusStyles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut styles = StatusStyles::default();
        for (status, class) in iter {
            styles.insert(status, class);
        }
        styles
    }
}

/// Colours a style class can name. Both renderers map from this one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleClass {
    Green,
    Yellow,
    Red,
    Blue,
    Cyan,
    Magenta,
    Muted,
}

impl StyleClass {
    /// Resolve a class name or one of its aliases (`success`, `danger`, ...).
    /// `bold` and unknown names are not colours.
    pub fn from_name(class: &str) -> Option<Self> {
        match class {
            "green" | "success" => Some(StyleClass::Green),
            "yellow" | "warning" => Some(StyleClass::Yellow),
            "red" | "danger" | "error" => Some(StyleClass::Red),
            "blue" | "info" => Some(StyleClass::Blue),
            "cyan" => Some(StyleClass::Cyan),
            "magenta" => Some(StyleClass::Magenta),
            "gray" | "grey" | "neutral" | "muted" => Some(StyleClass::Muted),
            _ => None,
        }
    }
}

/// A status rendered as a coloured badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, styles: &StatusStyles) -> Self {
        let label = label.into();
        let class = styles.class_for(&label).to_string();
        Self { label, class }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_uses_mapped_class() {
        let styles = StatusStyles::new().with("Paid", "green");
        assert_eq!(styles.class_for("Paid"), "green");
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let styles = StatusStyles::new().with("Paid", "green");
        assert_eq!(styles.class_for("Unknown"), DEFAULT_STATUS_CLASS);
        assert_eq!(styles.class_for(""), DEFAULT_STATUS_CLASS);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let styles = StatusStyles::new().with("Paid", "green");
        assert_eq!(styles.class_for("paid"), DEFAULT_STATUS_CLASS);
    }

    #[test]
    fn test_custom_fallback_and_collect() {
        let styles: StatusStyles = [("Overdue", "red"), ("Draft", "gray")]
            .into_iter()
            .collect::<StatusStyles>()
            .with_fallback("muted");
        assert_eq!(styles.class_for("Overdue"), "red");
        assert_eq!(styles.class_for("Void"), "muted");
        assert_eq!(styles.iter().count(), 2);
    }

    #[test]
    fn test_style_class_aliases() {
        assert_eq!(StyleClass::from_name("success"), Some(StyleClass::Green));
        assert_eq!(StyleClass::from_name("danger"), Some(StyleClass::Red));
        assert_eq!(
            StyleClass::from_name(DEFAULT_STATUS_CLASS),
            Some(StyleClass::Muted)
        );
        assert_eq!(StyleClass::from_name("bold"), None);
        assert_eq!(StyleClass::from_name("Green"), None);
    }

    #[test]
    fn test_badge() {
        let styles = StatusStyles::new().with("Pending", "yellow");
        let badge = Badge::new("Pending", &styles);
        assert_eq!(badge.class, "yellow");
        assert_eq!(Badge::new("Sent", &styles).class, "neutral");
    }
}
