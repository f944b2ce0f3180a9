//! Backend list responses.
//!
//! List endpoints answer with
//! `{ "data": { "<entity>": [...], "page", "totalPages", "limit", "totalDocs" } }`.
//! A bare JSON array is accepted as an unpaginated record list.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::Result;
use crate::error::{DataError, StorageError};
use crate::record::{Record, records_from_json};
use crate::table::PaginationDescriptor;

const PAGE_KEY: &str = "page";
const TOTAL_PAGES_KEY: &str = "totalPages";
const LIMIT_KEY: &str = "limit";
const TOTAL_DOCS_KEY: &str = "totalDocs";

/// One page of records as delivered by the backend.
#[derive(Debug, Clone)]
pub struct EnvelopePage {
    /// Name of the record array, `None` for a bare array
    pub entity: Option<String>,
    pub records: Vec<Record>,
    /// `None` when the response carries no paging metadata
    pub pagination: Option<PaginationDescriptor>,
}

impl EnvelopePage {
    /// Whether the backend already paged the data.
    pub fn is_paged(&self) -> bool {
        self.pagination.is_some()
    }
}

/// Parse a response body. `entity` names the record array; when absent the
/// single array inside `data` is used.
pub fn parse_envelope(json: &str, entity: Option<&str>) -> Result<EnvelopePage> {
    let value: Value = serde_json::from_str(json).map_err(DataError::from)?;
    from_value(&value, entity)
}

/// Read and parse a response saved to disk.
pub fn load_envelope(path: &Path, entity: Option<&str>) -> Result<EnvelopePage> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    let page = parse_envelope(&content, entity)?;
    log::debug!(
        "loaded {} records from {} (entity {:?})",
        page.records.len(),
        path.display(),
        page.entity
    );
    Ok(page)
}

pub fn from_value(value: &Value, entity: Option<&str>) -> Result<EnvelopePage> {
    match value {
        Value::Array(items) => Ok(EnvelopePage {
            entity: None,
            records: records_from_json(items)?,
            pagination: None,
        }),
        Value::Object(root) => match root.get("data") {
            Some(Value::Object(data)) => from_data(data, entity),
            Some(Value::Array(items)) => Ok(EnvelopePage {
                entity: None,
                records: records_from_json(items)?,
                pagination: None,
            }),
            _ => Err(DataError::MissingData.into()),
        },
        _ => Err(DataError::MissingData.into()),
    }
}

fn from_data(data: &Map<String, Value>, entity: Option<&str>) -> Result<EnvelopePage> {
    let (name, items) = select_entity(data, entity)?;
    let records = records_from_json(items)?;
    let pagination = read_pagination(data, records.len())?;
    Ok(EnvelopePage {
        entity: Some(name),
        records,
        pagination,
    })
}

fn select_entity<'a>(
    data: &'a Map<String, Value>,
    entity: Option<&str>,
) -> std::result::Result<(String, &'a [Value]), DataError> {
    if let Some(wanted) = entity {
        return match data.get(wanted) {
            Some(Value::Array(items)) => Ok((wanted.to_string(), items.as_slice())),
            _ => Err(DataError::MissingEntity {
                entity: wanted.to_string(),
            }),
        };
    }

    let arrays: Vec<(&String, &Vec<Value>)> = data
        .iter()
        .filter_map(|(name, value)| match value {
            Value::Array(items) => Some((name, items)),
            _ => None,
        })
        .collect();

    match arrays.as_slice() {
        [(name, items)] => Ok((name.to_string(), items.as_slice())),
        [] => Err(DataError::MissingEntity {
            entity: "<any>".to_string(),
        }),
        many => Err(DataError::AmbiguousEntity {
            candidates: many
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

fn read_count(data: &Map<String, Value>, key: &str) -> Option<usize> {
    data.get(key)
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
}

/// Paging metadata, present only when both `page` and `limit` are given.
fn read_pagination(
    data: &Map<String, Value>,
    record_count: usize,
) -> Result<Option<PaginationDescriptor>> {
    let (Some(page), Some(limit)) = (read_count(data, PAGE_KEY), read_count(data, LIMIT_KEY))
    else {
        return Ok(None);
    };
    let total_count = read_count(data, TOTAL_DOCS_KEY).unwrap_or(record_count);
    let pagination = match read_count(data, TOTAL_PAGES_KEY) {
        Some(total_pages) => PaginationDescriptor::new(page, total_pages, limit, total_count)?,
        None => PaginationDescriptor::for_total(page, limit, total_count)?,
    };
    Ok(Some(pagination))
}
