//! Column descriptors.
//!
//! A column binds a record field to a header label and optionally to a typed
//! renderer that produces the cell from the field value and the whole record.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;
use crate::record::{Fragment, Record, STATUS_FIELD, TableRecord};

/// Per-column rendering strategy.
pub type Renderer<R> = Box<dyn Fn(Option<Cow<'_, str>>, &R) -> Fragment>;

pub struct Column<R> {
    pub key: Option<String>,
    pub label: String,
    pub render: Option<Renderer<R>>,
    pub class_name: Option<String>,
}

impl<R: TableRecord> Column<R> {
    /// Column displaying a record field as-is.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            label: label.into(),
            render: None,
            class_name: None,
        }
    }

    /// Column whose content is synthesized from the whole record.
    pub fn computed(
        label: impl Into<String>,
        render: impl Fn(Option<Cow<'_, str>>, &R) -> Fragment + 'static,
    ) -> Self {
        Self {
            key: None,
            label: label.into(),
            render: Some(Box::new(render)),
            class_name: None,
        }
    }

    pub fn with_render(
        mut self,
        render: impl Fn(Option<Cow<'_, str>>, &R) -> Fragment + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// A status column without a custom renderer is drawn as a badge.
    pub fn is_status_badge(&self) -> bool {
        self.render.is_none() && self.key.as_deref() == Some(STATUS_FIELD)
    }

    pub(crate) fn validate(&self) -> Result<(), TableError> {
        if self.key.is_none() && self.render.is_none() {
            return Err(TableError::UnboundColumn {
                label: self.label.clone(),
            });
        }
        Ok(())
    }

    /// Produce the cell for `record`. Renderer panics propagate to the caller.
    pub fn render_cell(&self, record: &R) -> Fragment {
        let value = self.key.as_deref().and_then(|key| record.field(key));
        let mut fragment = match &self.render {
            Some(render) => render(value, record),
            None => match self.key.as_deref() {
                Some(key) => record.cell(key).unwrap_or_default(),
                None => Fragment::default(),
            },
        };
        if fragment.class.is_none() {
            fragment.class = self.class_name.clone();
        }
        fragment
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Textual column declaration, `key` or `key:Label`.
///
/// Used by configuration presets and the command line. Without a label the
/// key is title-cased (`due_date` becomes `Due Date`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: String,
    pub label: String,
}

impl ColumnSpec {
    pub fn into_column<R: TableRecord>(self) -> Column<R> {
        Column::new(self.key, self.label)
    }

    /// One spec per field of `record`, in field order. Without a record the
    /// table still needs a column, so a lone `id` column is returned.
    pub fn infer(record: Option<&Record>) -> Vec<Self> {
        let specs: Vec<Self> = record
            .map(|r| r.field_names().filter_map(|name| name.parse().ok()).collect())
            .unwrap_or_default();
        if specs.is_empty() {
            return vec![ColumnSpec {
                key: "id".to_string(),
                label: "Id".to_string(),
            }];
        }
        specs
    }

    /// Parse a comma separated list of specs.
    pub fn parse_list(input: &str) -> Result<Vec<Self>, TableError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for ColumnSpec {
    type Err = TableError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (key, label) = match spec.split_once(':') {
            Some((key, label)) => (key.trim(), label.trim().to_string()),
            None => (spec.trim(), title_case(spec.trim())),
        };
        if key.is_empty() || label.is_empty() {
            return Err(TableError::InvalidColumnSpec {
                spec: spec.to_string(),
            });
        }
        Ok(ColumnSpec {
            key: key.to_string(),
            label,
        })
    }
}

fn title_case(key: &str) -> String {
    key.split(['_', '-'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn test_plain_column_reads_field() {
        let record = Record::new(1).with("vendor", "Acme");
        let column: Column<Record> = Column::new("vendor", "Vendor");
        assert_eq!(column.render_cell(&record).text, "Acme");
    }

    #[test]
    fn test_missing_field_renders_empty() {
        let record = Record::new(1);
        let column: Column<Record> = Column::new("vendor", "Vendor").with_class("muted");
        let cell = column.render_cell(&record);
        assert_eq!(cell.text, "");
        assert_eq!(cell.class.as_deref(), Some("muted"));
    }

    #[test]
    fn test_renderer_receives_value_and_record() {
        let record = Record::new(9).with("amount", 1200);
        let column: Column<Record> = Column::new("amount", "Amount")
            .with_render(|value, record: &Record| {
                Fragment::plain(format!("#{} ${}", record.id(), value.unwrap_or_default()))
            });
        assert_eq!(column.render_cell(&record).text, "#9 $1200");
    }

    #[test]
    fn test_computed_column_needs_no_key() {
        let record = Record::new(2).with("first", "Ada").with("last", "Byron");
        let column: Column<Record> = Column::computed("Name", |_, r: &Record| {
            Fragment::styled(
                format!(
                    "{} {}",
                    r.field("first").unwrap_or_default(),
                    r.field("last").unwrap_or_default()
                ),
                "bold",
            )
        });
        assert!(column.validate().is_ok());
        let cell = column.render_cell(&record);
        assert_eq!(cell.text, "Ada Byron");
        assert_eq!(cell.class.as_deref(), Some("bold"));
    }

    #[test]
    fn test_unbound_column_is_invalid() {
        let column: Column<Record> = Column {
            key: None,
            label: "Ghost".to_string(),
            render: None,
            class_name: None,
        };
        assert_eq!(
            column.validate(),
            Err(TableError::UnboundColumn {
                label: "Ghost".to_string()
            })
        );
    }

    #[test]
    fn test_status_badge_detection() {
        let status: Column<Record> = Column::new("status", "Status");
        assert!(status.is_status_badge());
        let custom: Column<Record> =
            Column::new("status", "Status").with_render(|v, _| Fragment::plain(v.unwrap_or_default()));
        assert!(!custom.is_status_badge());
    }

    #[test]
    fn test_column_spec_parsing() {
        let spec: ColumnSpec = "amount:Total Due".parse().expect("valid spec");
        assert_eq!(spec.key, "amount");
        assert_eq!(spec.label, "Total Due");

        let spec: ColumnSpec = "due_date".parse().expect("valid spec");
        assert_eq!(spec.label, "Due Date");

        assert!(":Label".parse::<ColumnSpec>().is_err());

        let list = ColumnSpec::parse_list("id, vendor:Vendor ,amount,").expect("valid list");
        assert_eq!(list.len(), 3);
        assert_eq!(list[1].label, "Vendor");
    }

    #[test]
    fn test_infer_specs_from_record() {
        let record = Record::new(4).with("vendor", "Acme").with("due_date", "2024-05-01");
        let specs = ColumnSpec::infer(Some(&record));
        let labels: Vec<&str> = specs.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Id", "Vendor", "Due Date"]);

        let fallback = ColumnSpec::infer(None);
        assert_eq!(fallback.len(), 1);
        assert_eq!(fallback[0].key, "id");
    }
}
