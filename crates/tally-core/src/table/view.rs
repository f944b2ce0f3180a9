//! Render-ready snapshot of a record table.
//!
//! Front-ends (the comfy-table printer, the ratatui widget) draw a
//! [`TableView`] and never look at records or columns directly.

use crate::record::{Fragment, RecordId};

use super::actions::DropdownAction;
use super::selection::CheckState;
use super::status::Badge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub label: String,
    pub class: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub class: Option<String>,
    /// Drawn as a status badge rather than plain text
    pub badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: RecordId,
    pub checked: bool,
    pub cells: Vec<CellView>,
    pub status: Option<Badge>,
}

/// One item in card layout; content comes from the caller's item renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: RecordId,
    pub checked: bool,
    pub lines: Vec<Fragment>,
    pub status: Option<Badge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    Empty { message: String },
    Rows(Vec<RowView>),
    Cards(Vec<CardView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBar {
    pub placeholder: String,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerView {
    pub page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub label: String,
    /// Page-size and count line; `None` when suppressed
    pub size_line: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub search: Option<SearchBar>,
    pub select_all: CheckState,
    pub selected_count: usize,
    pub pager: Option<PagerView>,
    pub actions: Vec<DropdownAction>,
}

impl TableView {
    pub fn is_loading(&self) -> bool {
        matches!(self.body, TableBody::Loading)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.body, TableBody::Empty { .. })
    }

    /// Number of rows or cards on screen.
    pub fn visible_len(&self) -> usize {
        match &self.body {
            TableBody::Rows(rows) => rows.len(),
            TableBody::Cards(cards) => cards.len(),
            TableBody::Loading | TableBody::Empty { .. } => 0,
        }
    }

    /// Ids in display order.
    pub fn visible_ids(&self) -> Vec<&RecordId> {
        match &self.body {
            TableBody::Rows(rows) => rows.iter().map(|row| &row.id).collect(),
            TableBody::Cards(cards) => cards.iter().map(|card| &card.id).collect(),
            TableBody::Loading | TableBody::Empty { .. } => Vec::new(),
        }
    }
}
