//! Per-row dropdown actions.

use std::str::FromStr;

use crate::error::TableError;

/// A named action offered in every row's menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownAction {
    pub key: String,
    pub label: String,
}

impl DropdownAction {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// The view/edit/delete trio most list pages offer.
    pub fn standard() -> Vec<Self> {
        vec![
            DropdownAction::new("view", "View"),
            DropdownAction::new("edit", "Edit"),
            DropdownAction::new("delete", "Delete"),
        ]
    }

    pub fn find<'a>(actions: &'a [Self], key: &str) -> Option<&'a Self> {
        actions.iter().find(|action| action.key == key)
    }
}

/// Parses `key` or `key:Label`.
impl FromStr for DropdownAction {
    type Err = TableError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let spec = spec.trim();
        let (key, label) = match spec.split_once(':') {
            Some((key, label)) => (key.trim(), label.trim()),
            None => (spec, spec),
        };
        if key.is_empty() || label.is_empty() {
            return Err(TableError::InvalidColumnSpec {
                spec: spec.to_string(),
            });
        }
        Ok(DropdownAction::new(key, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_actions() {
        let actions = DropdownAction::standard();
        assert_eq!(actions.len(), 3);
        assert_eq!(
            DropdownAction::find(&actions, "edit").map(|a| a.label.as_str()),
            Some("Edit")
        );
        assert!(DropdownAction::find(&actions, "archive").is_none());
    }

    #[test]
    fn test_parse_action() {
        let action: DropdownAction = "mark_paid:Mark as paid".parse().expect("valid action");
        assert_eq!(action.key, "mark_paid");
        assert_eq!(action.label, "Mark as paid");

        let action: DropdownAction = "view".parse().expect("valid action");
        assert_eq!(action.label, "view");

        assert!("".parse::<DropdownAction>().is_err());
    }
}
