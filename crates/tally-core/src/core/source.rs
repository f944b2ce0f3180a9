//! Page sources.
//!
//! The table never fetches data. When it reports a page change, the caller
//! asks a [`PageSource`] for that page and hands the result back through
//! `RecordTable::set_data`.

use crate::Result;
use crate::error::TableError;
use crate::table::PaginationDescriptor;

/// A fetched page and its position in the full data set.
#[derive(Debug, Clone)]
pub struct Page<R> {
    pub records: Vec<R>,
    pub pagination: PaginationDescriptor,
}

pub trait PageSource<R> {
    /// Fetch `page` (1-based) with `page_size` records per page.
    fn fetch_page(&mut self, page: usize, page_size: usize) -> Result<Page<R>>;

    /// Number of records across all pages, when known up front.
    fn total_count(&self) -> Option<usize> {
        None
    }
}

/// Serves pages out of a complete record set held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource<R> {
    records: Vec<R>,
}

impl<R> MemorySource<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> PageSource<R> for MemorySource<R> {
    /// Out-of-range pages are clamped to the nearest valid page.
    fn fetch_page(&mut self, page: usize, page_size: usize) -> Result<Page<R>> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize.into());
        }
        let total = self.records.len();
        let last_page = total.div_ceil(page_size).max(1);
        let clamped = page.clamp(1, last_page);
        if clamped != page {
            log::warn!(
                "page {} is outside 1..={}, showing page {}",
                page,
                last_page,
                clamped
            );
        }

        let start = (clamped - 1) * page_size;
        let end = (start + page_size).min(total);
        let records = self.records[start.min(end)..end].to_vec();
        log::debug!(
            "serving page {} ({} records) of {} total",
            clamped,
            records.len(),
            total
        );

        Ok(Page {
            records,
            pagination: PaginationDescriptor::for_total(clamped, page_size, total)?,
        })
    }

    fn total_count(&self) -> Option<usize> {
        Some(self.records.len())
    }
}
