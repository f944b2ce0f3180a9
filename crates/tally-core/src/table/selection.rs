//! Row selection.
//!
//! The selected ids are owned by the caller. [`SelectionController`] is the
//! reusable holder each list view keeps instead of splicing id arrays by hand;
//! the table only reads a [`SelectionSet`] and reports changes through its
//! handler.

use std::collections::{BTreeSet, HashSet};

use crate::record::RecordId;

/// Read-only view of the selected ids, as consumed by the table.
pub trait SelectionSet {
    fn contains_id(&self, id: &RecordId) -> bool;

    fn selected_count(&self) -> usize;
}

impl SelectionSet for [RecordId] {
    fn contains_id(&self, id: &RecordId) -> bool {
        self.contains(id)
    }

    fn selected_count(&self) -> usize {
        self.len()
    }
}

impl SelectionSet for Vec<RecordId> {
    fn contains_id(&self, id: &RecordId) -> bool {
        self.contains(id)
    }

    fn selected_count(&self) -> usize {
        self.len()
    }
}

impl SelectionSet for HashSet<RecordId> {
    fn contains_id(&self, id: &RecordId) -> bool {
        self.contains(id)
    }

    fn selected_count(&self) -> usize {
        self.len()
    }
}

impl SelectionSet for BTreeSet<RecordId> {
    fn contains_id(&self, id: &RecordId) -> bool {
        self.contains(id)
    }

    fn selected_count(&self) -> usize {
        self.len()
    }
}

/// Tri-state of the header "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    #[default]
    Unchecked,
    Partial,
    Checked,
}

impl CheckState {
    /// State of the header checkbox for the ids currently on screen.
    pub fn for_page<S: SelectionSet + ?Sized>(page_ids: &[&RecordId], selected: &S) -> Self {
        let checked = page_ids.iter().filter(|id| selected.contains_id(id)).count();
        match checked {
            0 => CheckState::Unchecked,
            n if n == page_ids.len() => CheckState::Checked,
            _ => CheckState::Partial,
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            CheckState::Unchecked => "[ ]",
            CheckState::Partial => "[-]",
            CheckState::Checked => "[x]",
        }
    }
}

impl From<bool> for CheckState {
    /// Row checkboxes have no partial state.
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

/// What "everything selected" means for this controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionScope {
    /// Exactly the ids that were checked.
    #[default]
    Explicit,
    /// Every record across all pages, minus explicit exclusions.
    AllRecords { total: usize },
}

/// Caller-side selection state for one list view.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: BTreeSet<RecordId>,
    excluded: BTreeSet<RecordId>,
    scope: SelectionScope,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scope(&self) -> SelectionScope {
        self.scope
    }

    pub fn is_all_records(&self) -> bool {
        matches!(self.scope, SelectionScope::AllRecords { .. })
    }

    pub fn has(&self, id: &RecordId) -> bool {
        match self.scope {
            SelectionScope::Explicit => self.selected.contains(id),
            SelectionScope::AllRecords { .. } => !self.excluded.contains(id),
        }
    }

    /// Check or uncheck a single id.
    pub fn set(&mut self, id: RecordId, checked: bool) {
        match (self.scope, checked) {
            (SelectionScope::Explicit, true) => {
                self.selected.insert(id);
            }
            (SelectionScope::Explicit, false) => {
                self.selected.remove(&id);
            }
            (SelectionScope::AllRecords { .. }, true) => {
                self.excluded.remove(&id);
            }
            (SelectionScope::AllRecords { .. }, false) => {
                self.excluded.insert(id);
            }
        }
    }

    /// Flip an id and return its new state.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        let checked = !self.has(&id);
        self.set(id, checked);
        checked
    }

    /// Check every id given, typically the rows of the current page.
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        for id in ids {
            self.set(id, true);
        }
    }

    /// Select every record of the data set, including pages not loaded.
    pub fn select_all_records(&mut self, total: usize) {
        log::debug!("selecting all {} records", total);
        self.selected.clear();
        self.excluded.clear();
        self.scope = SelectionScope::AllRecords { total };
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.excluded.clear();
        self.scope = SelectionScope::Explicit;
    }

    pub fn len(&self) -> usize {
        match self.scope {
            SelectionScope::Explicit => self.selected.len(),
            SelectionScope::AllRecords { total } => total.saturating_sub(self.excluded.len()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Explicitly selected ids, sorted. Empty in all-records scope; see [`Self::excluded`].
    pub fn ids(&self) -> Vec<RecordId> {
        match self.scope {
            SelectionScope::Explicit => self.selected.iter().cloned().collect(),
            SelectionScope::AllRecords { .. } => Vec::new(),
        }
    }

    /// Ids unchecked while in all-records scope.
    pub fn excluded(&self) -> Vec<RecordId> {
        self.excluded.iter().cloned().collect()
    }

    /// Drop explicit ids that are no longer visible. Returns how many were removed.
    pub fn retain_visible(&mut self, visible: &[RecordId]) -> usize {
        if self.is_all_records() {
            return 0;
        }
        let before = self.selected.len();
        self.selected.retain(|id| visible.contains(id));
        let removed = before - self.selected.len();
        if removed > 0 {
            log::debug!("pruned {} stale selected ids", removed);
        }
        removed
    }
}

impl SelectionSet for SelectionController {
    fn contains_id(&self, id: &RecordId) -> bool {
        self.has(id)
    }

    fn selected_count(&self) -> usize {
        self.len()
    }
}
