//! The record table component.
//!
//! [`RecordTable`] holds the caller's descriptors and the local search query.
//! Interaction arrives as [`TableEvent`]s; anything that changes caller-owned
//! state (page, selection, row actions) is forwarded to a [`TableHandler`].
//! Drawing goes through [`RecordTable::view`].

use crate::error::TableError;
use crate::record::{Fragment, RecordId, TableRecord};

use super::actions::DropdownAction;
use super::column::Column;
use super::pagination::PaginationDescriptor;
use super::search::{SearchState, filter_records};
use super::selection::{CheckState, SelectionController, SelectionSet};
use super::status::{Badge, StatusStyles};
use super::view::{
    CardView, CellView, HeaderCell, PagerView, RowView, SearchBar, TableBody, TableView,
};

pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No records found";

/// Card-mode content for one record.
pub trait ItemRenderer<R> {
    fn render_item(&self, record: &R) -> Vec<Fragment>;
}

impl<R, F> ItemRenderer<R> for F
where
    F: Fn(&R) -> Vec<Fragment>,
{
    fn render_item(&self, record: &R) -> Vec<Fragment> {
        self(record)
    }
}

/// Caller callbacks. Every method defaults to a no-op.
pub trait TableHandler<R> {
    /// A different page was requested; the caller fetches it and calls
    /// [`RecordTable::set_data`].
    fn on_page_change(&mut self, _page: usize) {}

    fn on_select_item(&mut self, _id: &RecordId, _checked: bool) {}

    /// `ids` are the records of the current page when checking, empty when
    /// unchecking.
    fn on_select_all(&mut self, _checked: bool, _ids: &[RecordId]) {}

    /// Every record of the data set, across pages, was selected.
    fn on_select_all_records(&mut self, _total: usize) {}

    fn on_row_action(&mut self, _action: &str, _record: &R) {}
}

impl<R> TableHandler<R> for () {}

impl<R> TableHandler<R> for SelectionController {
    fn on_select_item(&mut self, id: &RecordId, checked: bool) {
        self.set(id.clone(), checked);
    }

    fn on_select_all(&mut self, checked: bool, ids: &[RecordId]) {
        if checked {
            self.select_all(ids.iter().cloned());
        } else {
            self.clear();
        }
    }

    fn on_select_all_records(&mut self, total: usize) {
        self.select_all_records(total);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Replace the search query
    Search(String),
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    ToggleRow { id: RecordId, checked: bool },
    /// Header checkbox
    ToggleAll(bool),
    SelectAllRecords,
    NextPage,
    PreviousPage,
    GoToPage(usize),
    RowAction { action: String, id: RecordId },
}

pub struct RecordTable<R> {
    data: Vec<R>,
    columns: Vec<Column<R>>,
    search_fields: Vec<String>,
    search_placeholder: Option<String>,
    search: SearchState,
    pagination: Option<PaginationDescriptor>,
    show_data_size: bool,
    status_styles: StatusStyles,
    dropdown_actions: Vec<DropdownAction>,
    loading: bool,
    item_renderer: Option<Box<dyn ItemRenderer<R>>>,
    empty_message: String,
}

impl<R: TableRecord> RecordTable<R> {
    pub fn builder() -> RecordTableBuilder<R> {
        RecordTableBuilder::new()
    }

    pub fn data(&self) -> &[R] {
        &self.data
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    pub fn pagination(&self) -> Option<&PaginationDescriptor> {
        self.pagination.as_ref()
    }

    pub fn status_styles(&self) -> &StatusStyles {
        &self.status_styles
    }

    pub fn actions(&self) -> &[DropdownAction] {
        &self.dropdown_actions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_card_mode(&self) -> bool {
        self.item_renderer.is_some()
    }

    /// Replace the current page, typically after `on_page_change`. Clears the
    /// loading flag.
    pub fn set_data(&mut self, data: Vec<R>, pagination: Option<PaginationDescriptor>) {
        self.data = data;
        self.pagination = pagination;
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_show_data_size(&mut self, show: bool) {
        self.show_data_size = show;
    }

    pub fn set_item_renderer(&mut self, renderer: Box<dyn ItemRenderer<R>>) {
        self.item_renderer = Some(renderer);
    }

    /// Leave card mode, handing the renderer back so it can be restored.
    pub fn take_item_renderer(&mut self) -> Option<Box<dyn ItemRenderer<R>>> {
        self.item_renderer.take()
    }

    /// Records that survive the search, in input order. Empty while loading.
    pub fn visible_records(&self) -> Vec<&R> {
        if self.loading {
            return Vec::new();
        }
        filter_records(&self.data, &self.search_fields, self.search.query())
    }

    /// A visible record by id.
    pub fn record(&self, id: &RecordId) -> Option<&R> {
        self.visible_records()
            .into_iter()
            .find(|record| record.id() == id)
    }

    fn page_ids(&self) -> Vec<RecordId> {
        if self.loading {
            return Vec::new();
        }
        self.data.iter().map(|record| record.id().clone()).collect()
    }

    /// Apply `event`. Returns `false` when it was ignored.
    pub fn handle<H: TableHandler<R> + ?Sized>(&mut self, event: TableEvent, handler: &mut H) -> bool {
        match event {
            TableEvent::Search(query) => {
                self.search.set(query);
                true
            }
            TableEvent::SearchInput(c) => {
                self.search.push(c);
                true
            }
            TableEvent::SearchBackspace => {
                self.search.backspace();
                true
            }
            TableEvent::ClearSearch => {
                self.search.clear();
                true
            }
            TableEvent::ToggleRow { id, checked } => {
                if self.record(&id).is_none() {
                    log::debug!("ignoring toggle for record {} not on screen", id);
                    return false;
                }
                handler.on_select_item(&id, checked);
                true
            }
            TableEvent::ToggleAll(true) => {
                let ids = self.page_ids();
                handler.on_select_all(true, &ids);
                true
            }
            TableEvent::ToggleAll(false) => {
                handler.on_select_all(false, &[]);
                true
            }
            TableEvent::SelectAllRecords => {
                let total = self
                    .pagination
                    .map(|p| p.total_count)
                    .unwrap_or(self.data.len());
                handler.on_select_all_records(total);
                true
            }
            TableEvent::NextPage => {
                self.request_page(self.pagination.and_then(|p| p.next_page()), handler)
            }
            TableEvent::PreviousPage => {
                self.request_page(self.pagination.and_then(|p| p.previous_page()), handler)
            }
            TableEvent::GoToPage(page) => {
                let target = self
                    .pagination
                    .filter(|p| p.contains_page(page) && p.page != page)
                    .map(|_| page);
                self.request_page(target, handler)
            }
            TableEvent::RowAction { action, id } => {
                if DropdownAction::find(&self.dropdown_actions, &action).is_none() {
                    log::debug!("ignoring unknown row action {:?}", action);
                    return false;
                }
                match self.record(&id) {
                    Some(record) => {
                        handler.on_row_action(&action, record);
                        true
                    }
                    None => {
                        log::debug!("ignoring action {:?} for unknown record {}", action, id);
                        false
                    }
                }
            }
        }
    }

    fn request_page<H: TableHandler<R> + ?Sized>(&self, page: Option<usize>, handler: &mut H) -> bool {
        match page {
            Some(page) => {
                log::debug!("requesting page {}", page);
                handler.on_page_change(page);
                true
            }
            None => false,
        }
    }

    /// Snapshot for drawing, with checkboxes taken from `selected`.
    pub fn view<S: SelectionSet + ?Sized>(&self, selected: &S) -> TableView {
        let visible = self.visible_records();
        let visible_ids: Vec<&RecordId> = visible.iter().map(|record| record.id()).collect();

        let headers = if self.is_card_mode() {
            Vec::new()
        } else {
            self.columns
                .iter()
                .map(|column| HeaderCell {
                    label: column.label.clone(),
                    class: column.class_name.clone(),
                })
                .collect()
        };

        let body = if self.loading {
            TableBody::Loading
        } else if visible.is_empty() {
            TableBody::Empty {
                message: self.empty_text(),
            }
        } else if let Some(renderer) = &self.item_renderer {
            TableBody::Cards(
                visible
                    .iter()
                    .map(|record| CardView {
                        id: record.id().clone(),
                        checked: selected.contains_id(record.id()),
                        lines: renderer.render_item(record),
                        status: self.badge_for(*record),
                    })
                    .collect(),
            )
        } else {
            TableBody::Rows(
                visible
                    .iter()
                    .map(|record| RowView {
                        id: record.id().clone(),
                        checked: selected.contains_id(record.id()),
                        cells: self.columns.iter().map(|c| self.cell(c, *record)).collect(),
                        status: self.badge_for(*record),
                    })
                    .collect(),
            )
        };

        let search = (self.search_placeholder.is_some() || !self.search_fields.is_empty()).then(
            || SearchBar {
                placeholder: self
                    .search_placeholder
                    .clone()
                    .unwrap_or_else(|| DEFAULT_SEARCH_PLACEHOLDER.to_string()),
                query: self.search.query().to_string(),
            },
        );

        let pager = self.pagination.map(|p| PagerView {
            page: p.page,
            total_pages: p.total_pages,
            previous_enabled: p.can_previous(),
            next_enabled: p.can_next(),
            label: p.page_label(),
            size_line: self.show_data_size.then(|| p.size_line()),
        });

        TableView {
            headers,
            body,
            search,
            select_all: CheckState::for_page(&visible_ids, selected),
            selected_count: selected.selected_count(),
            pager,
            actions: self.dropdown_actions.clone(),
        }
    }

    fn cell(&self, column: &Column<R>, record: &R) -> CellView {
        if column.is_status_badge() {
            let text = record.status().map(|s| s.into_owned()).unwrap_or_default();
            let class = Some(self.status_styles.class_for(&text).to_string());
            return CellView {
                text,
                class,
                badge: true,
            };
        }
        let fragment = column.render_cell(record);
        CellView {
            text: fragment.text,
            class: fragment.class,
            badge: false,
        }
    }

    fn badge_for(&self, record: &R) -> Option<Badge> {
        record
            .status()
            .filter(|status| !status.is_empty())
            .map(|status| Badge::new(status.into_owned(), &self.status_styles))
    }

    fn empty_text(&self) -> String {
        if self.search.is_active() {
            format!("No records match \"{}\"", self.search.query().trim())
        } else {
            self.empty_message.clone()
        }
    }
}

pub struct RecordTableBuilder<R> {
    data: Vec<R>,
    columns: Vec<Column<R>>,
    search_fields: Vec<String>,
    search_placeholder: Option<String>,
    pagination: Option<PaginationDescriptor>,
    show_data_size: bool,
    status_styles: StatusStyles,
    dropdown_actions: Vec<DropdownAction>,
    loading: bool,
    item_renderer: Option<Box<dyn ItemRenderer<R>>>,
    empty_message: Option<String>,
}

impl<R: TableRecord> Default for RecordTableBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TableRecord> RecordTableBuilder<R> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            columns: Vec::new(),
            search_fields: Vec::new(),
            search_placeholder: None,
            pagination: None,
            show_data_size: true,
            status_styles: StatusStyles::default(),
            dropdown_actions: Vec::new(),
            loading: false,
            item_renderer: None,
            empty_message: None,
        }
    }

    pub fn data(mut self, data: Vec<R>) -> Self {
        self.data = data;
        self
    }

    pub fn columns(mut self, columns: Vec<Column<R>>) -> Self {
        self.columns = columns;
        self
    }

    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    pub fn search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self
    }

    pub fn pagination(mut self, pagination: PaginationDescriptor) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn show_data_size(mut self, show: bool) -> Self {
        self.show_data_size = show;
        self
    }

    pub fn status_styles(mut self, styles: StatusStyles) -> Self {
        self.status_styles = styles;
        self
    }

    pub fn dropdown_actions(mut self, actions: Vec<DropdownAction>) -> Self {
        self.dropdown_actions = actions;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn item_renderer(mut self, renderer: impl ItemRenderer<R> + 'static) -> Self {
        self.item_renderer = Some(Box::new(renderer));
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    pub fn build(self) -> Result<RecordTable<R>, TableError> {
        if self.columns.is_empty() && self.item_renderer.is_none() {
            return Err(TableError::NoColumns);
        }
        for column in &self.columns {
            column.validate()?;
        }
        Ok(RecordTable {
            data: self.data,
            columns: self.columns,
            search_fields: self.search_fields,
            search_placeholder: self.search_placeholder,
            search: SearchState::new(),
            pagination: self.pagination,
            show_data_size: self.show_data_size,
            status_styles: self.status_styles,
            dropdown_actions: self.dropdown_actions,
            loading: self.loading,
            item_renderer: self.item_renderer,
            empty_message: self
                .empty_message
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[derive(Default)]
    struct Recorder {
        pages: Vec<usize>,
        items: Vec<(RecordId, bool)>,
        select_all: Vec<(bool, Vec<RecordId>)>,
        all_records: Vec<usize>,
        actions: Vec<(String, RecordId)>,
    }

    impl TableHandler<Record> for Recorder {
        fn on_page_change(&mut self, page: usize) {
            self.pages.push(page);
        }

        fn on_select_item(&mut self, id: &RecordId, checked: bool) {
            self.items.push((id.clone(), checked));
        }

        fn on_select_all(&mut self, checked: bool, ids: &[RecordId]) {
            self.select_all.push((checked, ids.to_vec()));
        }

        fn on_select_all_records(&mut self, total: usize) {
            self.all_records.push(total);
        }

        fn on_row_action(&mut self, action: &str, record: &Record) {
            self.actions.push((action.to_string(), record.id().clone()));
        }
    }

    fn invoices() -> Vec<Record> {
        vec![
            Record::new(1)
                .with("vendor", "Acme")
                .with("amount", "$10")
                .with("status", "Paid"),
            Record::new(2)
                .with("vendor", "Globex")
                .with("amount", "$250")
                .with("status", "Unknown"),
            Record::new(3).with("vendor", "Initech").with("amount", "$75"),
        ]
    }

    fn table_at(page: usize) -> RecordTable<Record> {
        RecordTable::builder()
            .data(invoices())
            .columns(vec![
                Column::new("vendor", "Vendor"),
                Column::new("amount", "Amount"),
                Column::new("status", "Status"),
            ])
            .search_fields(["vendor"])
            .pagination(PaginationDescriptor::new(page, 5, 3, 15).expect("valid descriptor"))
            .status_styles(StatusStyles::new().with("Paid", "green"))
            .dropdown_actions(DropdownAction::standard())
            .build()
            .expect("valid table")
    }

    fn row_ids(view: &TableView) -> Vec<RecordId> {
        view.visible_ids().into_iter().cloned().collect()
    }

    #[test]
    fn test_build_requires_columns_or_renderer() {
        let result = RecordTable::<Record>::builder().build();
        assert!(matches!(result, Err(TableError::NoColumns)));

        let cards = RecordTable::<Record>::builder()
            .item_renderer(|r: &Record| vec![Fragment::plain(r.id().to_string())])
            .build();
        assert!(cards.is_ok());
    }

    #[test]
    fn test_build_rejects_unbound_column() {
        let result = RecordTable::<Record>::builder()
            .column(Column {
                key: None,
                label: "Ghost".to_string(),
                render: None,
                class_name: None,
            })
            .build();
        assert!(matches!(result, Err(TableError::UnboundColumn { .. })));
    }

    #[test]
    fn test_search_scenario_and_empty_state() {
        let mut table = table_at(1);

        table.handle(TableEvent::Search("acm".to_string()), &mut ());
        let view = table.view(&SelectionController::new());
        assert_eq!(row_ids(&view), vec![RecordId::Number(1)]);

        table.handle(TableEvent::Search("zzz".to_string()), &mut ());
        let view = table.view(&SelectionController::new());
        assert_eq!(view.visible_len(), 0);
        assert_eq!(
            view.body,
            TableBody::Empty {
                message: "No records match \"zzz\"".to_string()
            }
        );

        table.handle(TableEvent::ClearSearch, &mut ());
        assert_eq!(table.view(&SelectionController::new()).visible_len(), 3);
    }

    #[test]
    fn test_search_input_editing() {
        let mut table = table_at(1);
        for c in "glo".chars() {
            table.handle(TableEvent::SearchInput(c), &mut ());
        }
        assert_eq!(table.search_query(), "glo");
        assert_eq!(table.visible_records().len(), 1);
        table.handle(TableEvent::SearchBackspace, &mut ());
        assert_eq!(table.search_query(), "gl");
    }

    #[test]
    fn test_empty_data_shows_message() {
        let table: RecordTable<Record> = RecordTable::builder()
            .column(Column::new("vendor", "Vendor"))
            .build()
            .expect("valid table");
        let view = table.view(&Vec::<RecordId>::new());
        assert_eq!(
            view.body,
            TableBody::Empty {
                message: DEFAULT_EMPTY_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_toggle_all_reports_page_ids() {
        let mut table = table_at(1);
        let mut recorder = Recorder::default();
        table.handle(TableEvent::ToggleAll(true), &mut recorder);
        table.handle(TableEvent::ToggleAll(false), &mut recorder);
        assert_eq!(
            recorder.select_all,
            vec![
                (
                    true,
                    vec![RecordId::Number(1), RecordId::Number(2), RecordId::Number(3)]
                ),
                (false, Vec::new()),
            ]
        );
    }

    #[test]
    fn test_selection_controller_as_handler() {
        let mut table = table_at(1);
        let mut selection = SelectionController::new();

        table.handle(TableEvent::ToggleAll(true), &mut selection);
        assert_eq!(table.view(&selection).select_all, CheckState::Checked);

        table.handle(
            TableEvent::ToggleRow {
                id: RecordId::Number(2),
                checked: false,
            },
            &mut selection,
        );
        let view = table.view(&selection);
        assert_eq!(view.select_all, CheckState::Partial);
        assert_eq!(view.selected_count, 2);

        table.handle(TableEvent::ToggleAll(false), &mut selection);
        assert!(selection.is_empty());

        table.handle(TableEvent::SelectAllRecords, &mut selection);
        assert_eq!(selection.len(), 15);
    }

    #[test]
    fn test_toggle_row_for_unknown_id_is_ignored() {
        let mut table = table_at(1);
        let mut recorder = Recorder::default();
        let handled = table.handle(
            TableEvent::ToggleRow {
                id: RecordId::Number(42),
                checked: true,
            },
            &mut recorder,
        );
        assert!(!handled);
        assert!(recorder.items.is_empty());
    }

    #[test]
    fn test_pager_from_middle_page() {
        let mut table = table_at(2);
        let mut recorder = Recorder::default();
        table.handle(TableEvent::NextPage, &mut recorder);
        table.handle(TableEvent::PreviousPage, &mut recorder);
        assert_eq!(recorder.pages, vec![3, 1]);
    }

    #[test]
    fn test_pager_boundaries_are_noops() {
        let mut recorder = Recorder::default();
        let mut first = table_at(1);
        assert!(!first.handle(TableEvent::PreviousPage, &mut recorder));
        let mut last = table_at(5);
        assert!(!last.handle(TableEvent::NextPage, &mut recorder));
        assert!(recorder.pages.is_empty());

        let view = first.view(&SelectionController::new());
        let pager = view.pager.expect("pager shown");
        assert!(!pager.previous_enabled);
        assert!(pager.next_enabled);
        assert_eq!(pager.label, "Page 1 of 5");
    }

    #[test]
    fn test_go_to_page_validates_target() {
        let mut table = table_at(2);
        let mut recorder = Recorder::default();
        assert!(table.handle(TableEvent::GoToPage(4), &mut recorder));
        assert!(!table.handle(TableEvent::GoToPage(0), &mut recorder));
        assert!(!table.handle(TableEvent::GoToPage(6), &mut recorder));
        assert!(!table.handle(TableEvent::GoToPage(2), &mut recorder));
        assert_eq!(recorder.pages, vec![4]);
    }

    #[test]
    fn test_status_badges() {
        let table = table_at(1);
        let view = table.view(&SelectionController::new());
        let TableBody::Rows(rows) = &view.body else {
            panic!("expected rows");
        };
        let paid = &rows[0].cells[2];
        assert!(paid.badge);
        assert_eq!(paid.class.as_deref(), Some("green"));
        let unknown = &rows[1].cells[2];
        assert_eq!(unknown.class.as_deref(), Some("neutral"));
        assert_eq!(rows[2].status, None);
    }

    #[test]
    fn test_row_action_reaches_handler() {
        let mut table = table_at(1);
        let mut recorder = Recorder::default();
        assert!(table.handle(
            TableEvent::RowAction {
                action: "edit".to_string(),
                id: RecordId::Number(2),
            },
            &mut recorder,
        ));
        assert!(!table.handle(
            TableEvent::RowAction {
                action: "archive".to_string(),
                id: RecordId::Number(2),
            },
            &mut recorder,
        ));
        assert!(!table.handle(
            TableEvent::RowAction {
                action: "edit".to_string(),
                id: RecordId::Number(99),
            },
            &mut recorder,
        ));
        assert_eq!(
            recorder.actions,
            vec![("edit".to_string(), RecordId::Number(2))]
        );
    }

    #[test]
    fn test_loading_hides_rows() {
        let mut table = table_at(1);
        table.set_loading(true);
        let view = table.view(&SelectionController::new());
        assert!(view.is_loading());
        assert_eq!(view.visible_len(), 0);

        let mut recorder = Recorder::default();
        table.handle(TableEvent::ToggleAll(true), &mut recorder);
        assert_eq!(recorder.select_all, vec![(true, Vec::new())]);

        table.set_data(invoices(), None);
        assert!(!table.is_loading());
        assert!(table.view(&SelectionController::new()).pager.is_none());
    }

    #[test]
    fn test_card_mode_ignores_columns() {
        let mut table = table_at(1);
        table.set_item_renderer(Box::new(|r: &Record| {
            vec![
                Fragment::styled(r.field("vendor").unwrap_or_default(), "bold"),
                Fragment::plain(r.field("amount").unwrap_or_default()),
            ]
        }));
        let view = table.view(&SelectionController::new());
        assert!(view.headers.is_empty());
        let TableBody::Cards(cards) = &view.body else {
            panic!("expected cards");
        };
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].lines[0].text, "Acme");
        assert_eq!(cards[0].status.as_ref().map(|b| b.class.as_str()), Some("green"));

        assert!(table.take_item_renderer().is_some());
        assert_eq!(table.view(&SelectionController::new()).headers.len(), 3);
    }

    #[test]
    fn test_size_line_can_be_hidden() {
        let mut table = table_at(2);
        let pager = table.view(&SelectionController::new()).pager.expect("pager shown");
        assert_eq!(
            pager.size_line.as_deref(),
            Some("Showing 4-6 of 15 records | 3 per page")
        );
        table.set_show_data_size(false);
        let pager = table.view(&SelectionController::new()).pager.expect("pager shown");
        assert!(pager.size_line.is_none());
    }

    #[test]
    fn test_search_bar_visibility() {
        let table = table_at(1);
        let search = table.view(&SelectionController::new()).search.expect("search bar");
        assert_eq!(search.placeholder, DEFAULT_SEARCH_PLACEHOLDER);

        let plain: RecordTable<Record> = RecordTable::builder()
            .column(Column::new("vendor", "Vendor"))
            .build()
            .expect("valid table");
        assert!(plain.view(&SelectionController::new()).search.is_none());
    }
}
