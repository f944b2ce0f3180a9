//! Pagination descriptor and pager controls.
//!
//! The descriptor is owned by the caller and recomputed on every fetch. The
//! table only reads it and turns pager interaction into page-change requests;
//! it never slices `data` itself.

use serde::Serialize;

use crate::error::TableError;

/// Current page position and total size, as reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDescriptor {
    /// 1-based current page
    pub page: usize,
    /// Number of pages; 0 only when there are no records
    pub total_pages: usize,
    pub page_size: usize,
    pub total_count: usize,
}

impl PaginationDescriptor {
    /// Create a descriptor, rejecting impossible positions.
    pub fn new(
        page: usize,
        total_pages: usize,
        page_size: usize,
        total_count: usize,
    ) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        if page == 0 {
            return Err(TableError::ZeroPage);
        }
        if total_pages > 0 && page > total_pages {
            return Err(TableError::PageOutOfRange { page, total_pages });
        }
        Ok(Self {
            page,
            total_pages,
            page_size,
            total_count,
        })
    }

    /// Derive `total_pages` from the record count.
    pub fn for_total(page: usize, page_size: usize, total_count: usize) -> Result<Self, TableError> {
        if page_size == 0 {
            return Err(TableError::ZeroPageSize);
        }
        Self::new(page, total_count.div_ceil(page_size), page_size, total_count)
    }

    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }

    pub fn can_previous(&self) -> bool {
        !self.is_first_page()
    }

    pub fn can_next(&self) -> bool {
        !self.is_last_page()
    }

    /// Target of the "previous" control, `None` when it is disabled.
    pub fn previous_page(&self) -> Option<usize> {
        self.can_previous().then(|| self.page - 1)
    }

    /// Target of the "next" control, `None` when it is disabled.
    pub fn next_page(&self) -> Option<usize> {
        self.can_next().then(|| self.page + 1)
    }

    pub fn contains_page(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages
    }

    /// 1-based inclusive range of records on the current page.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.total_count == 0 {
            return None;
        }
        // Positions come from the backend; saturate rather than overflow.
        let start = (self.page - 1)
            .saturating_mul(self.page_size)
            .saturating_add(1);
        if start > self.total_count {
            return None;
        }
        let end = self.page.saturating_mul(self.page_size).min(self.total_count);
        Some((start, end))
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages.max(1))
    }

    /// Page-size and count line shown under the pager.
    pub fn size_line(&self) -> String {
        match self.item_range() {
            Some((start, end)) if start == end => format!(
                "Showing {} of {} records | {} per page",
                start, self.total_count, self.page_size
            ),
            Some((start, end)) => format!(
                "Showing {}-{} of {} records | {} per page",
                start, end, self.total_count, self.page_size
            ),
            None if self.total_count == 0 => "No records".to_string(),
            None => format!("{} records | {} per page", self.total_count, self.page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: usize) -> PaginationDescriptor {
        PaginationDescriptor::new(page, 5, 10, 45).expect("valid descriptor")
    }

    #[test]
    fn test_next_and_previous_from_middle_page() {
        let pagination = page(2);
        assert_eq!(pagination.next_page(), Some(3));
        assert_eq!(pagination.previous_page(), Some(1));
    }

    #[test]
    fn test_boundaries_disable_controls() {
        assert_eq!(page(1).previous_page(), None);
        assert!(!page(1).can_previous());
        assert_eq!(page(5).next_page(), None);
        assert!(!page(5).can_next());
    }

    #[test]
    fn test_invalid_descriptors() {
        assert_eq!(
            PaginationDescriptor::new(1, 1, 0, 0),
            Err(TableError::ZeroPageSize)
        );
        assert_eq!(PaginationDescriptor::new(0, 1, 10, 3), Err(TableError::ZeroPage));
        assert_eq!(
            PaginationDescriptor::new(6, 5, 10, 45),
            Err(TableError::PageOutOfRange {
                page: 6,
                total_pages: 5
            })
        );
    }

    #[test]
    fn test_empty_data_set() {
        let pagination = PaginationDescriptor::for_total(1, 10, 0).expect("valid descriptor");
        assert_eq!(pagination.total_pages, 0);
        assert_eq!(pagination.next_page(), None);
        assert_eq!(pagination.previous_page(), None);
        assert_eq!(pagination.size_line(), "No records");
        assert_eq!(pagination.page_label(), "Page 1 of 1");
    }

    #[test]
    fn test_for_total_rounds_up() {
        let pagination = PaginationDescriptor::for_total(5, 10, 45).expect("valid descriptor");
        assert_eq!(pagination.total_pages, 5);
        assert_eq!(pagination.item_range(), Some((41, 45)));
    }

    #[test]
    fn test_size_line() {
        assert_eq!(
            page(2).size_line(),
            "Showing 11-20 of 45 records | 10 per page"
        );
        let single = PaginationDescriptor::for_total(1, 10, 1).expect("valid descriptor");
        assert_eq!(single.size_line(), "Showing 1 of 1 records | 10 per page");
    }

    #[test]
    fn test_huge_positions_saturate() {
        let huge = 1usize << (usize::BITS / 2);
        let pagination =
            PaginationDescriptor::new(huge, huge, huge, usize::MAX).expect("valid descriptor");
        let (start, end) = pagination.item_range().expect("page in range");
        assert_eq!(start, (huge - 1) * huge + 1);
        assert_eq!(end, usize::MAX);
        assert!(pagination.size_line().starts_with("Showing "));
    }

    #[test]
    fn test_contains_page() {
        let pagination = page(3);
        assert!(pagination.contains_page(1));
        assert!(pagination.contains_page(5));
        assert!(!pagination.contains_page(0));
        assert!(!pagination.contains_page(6));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(page(2)).expect("serializable");
        assert_eq!(value["totalPages"], 5);
        assert_eq!(value["totalCount"], 45);
    }
}
