//! Record table panel.
//!
//! Draws a [`TableView`] snapshot: search bar, rows or cards, and the pager.
//! The panel owns only the cursor; data, search and selection live in the
//! `RecordTable` held by the app.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};
use tally_core::record::RecordId;
use tally_core::table::{
    CardView, CellView, CheckState, DEFAULT_STATUS_CLASS, PagerView, RowView, SearchBar,
    TableBody, TableView,
};

use super::Component;
use super::styles::{
    HIGHLIGHT_SYMBOL, TEXT_DIM, TEXT_WARNING, badge_style, border_style, class_style,
    cursor_style, header_style, row_highlight_style,
};

const SEARCH_HEIGHT: u16 = 3;
const CHECKBOX_WIDTH: u16 = 3;
const CARD_INDENT: &str = "    ";

pub struct TablePanel {
    title: String,
    view: Option<TableView>,
    cursor: usize,
    editing_search: bool,
    table_state: TableState,
    list_state: ListState,
}

impl TablePanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            view: None,
            cursor: 0,
            editing_search: false,
            table_state: TableState::default(),
            list_state: ListState::default(),
        }
    }

    /// Replace the snapshot, keeping the cursor on screen.
    pub fn set_view(&mut self, view: TableView) {
        let len = view.visible_len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.view = Some(view);
    }

    pub fn view(&self) -> Option<&TableView> {
        self.view.as_ref()
    }

    pub fn set_editing_search(&mut self, editing: bool) {
        self.editing_search = editing;
    }

    pub fn is_editing_search(&self) -> bool {
        self.editing_search
    }

    /// Id of the record under the cursor, if any record is shown.
    pub fn selected_id(&self) -> Option<&RecordId> {
        self.view
            .as_ref()
            .and_then(|view| view.visible_ids().get(self.cursor).copied())
    }

    /// Whether the record under the cursor is checked.
    pub fn selected_checked(&self) -> bool {
        match self.view.as_ref().map(|view| &view.body) {
            Some(TableBody::Rows(rows)) => rows.get(self.cursor).is_some_and(|r| r.checked),
            Some(TableBody::Cards(cards)) => cards.get(self.cursor).is_some_and(|c| c.checked),
            _ => false,
        }
    }

    fn visible_len(&self) -> usize {
        self.view.as_ref().map_or(0, TableView::visible_len)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.visible_len() {
            self.cursor += 1;
        }
    }

    pub fn move_first(&mut self) {
        self.cursor = 0;
    }

    pub fn move_last(&mut self) {
        self.cursor = self.visible_len().saturating_sub(1);
    }

    /// Put the cursor back on the first row, e.g. after a page change.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.table_state = TableState::default();
        self.list_state = ListState::default();
    }
}

impl Component for TablePanel {
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let Some(view) = &self.view else {
            return;
        };

        let search_height = if view.search.is_some() { SEARCH_HEIGHT } else { 0 };
        let pager_height = view
            .pager
            .as_ref()
            .map_or(0, |p| if p.size_line.is_some() { 2 } else { 1 });
        let [search_area, body_area, pager_area] = Layout::vertical([
            Constraint::Length(search_height),
            Constraint::Min(0),
            Constraint::Length(pager_height),
        ])
        .areas(area);

        if let Some(search) = &view.search {
            render_search_bar(frame, search_area, search, self.editing_search);
        }

        let block = Block::default()
            .title(format!(" {} ({}) ", self.title, view.visible_len()))
            .borders(Borders::ALL)
            .border_style(border_style(focused));

        match &view.body {
            TableBody::Loading => {
                let paragraph = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled("  ⏳ Loading...", TEXT_WARNING)),
                ])
                .block(block);
                frame.render_widget(paragraph, body_area);
            }
            TableBody::Empty { message } => {
                let paragraph = Paragraph::new(vec![
                    Line::from(""),
                    Line::from(Span::styled(format!("  {}", message), TEXT_DIM)),
                ])
                .block(block);
                frame.render_widget(paragraph, body_area);
            }
            TableBody::Rows(rows) => {
                let table = rows_table(view, rows).block(block);
                self.table_state.select(Some(self.cursor));
                frame.render_stateful_widget(table, body_area, &mut self.table_state);
            }
            TableBody::Cards(cards) => {
                let list = cards_list(cards).block(block);
                self.list_state.select(Some(self.cursor));
                frame.render_stateful_widget(list, body_area, &mut self.list_state);
            }
        }

        if let Some(pager) = &view.pager {
            frame.render_widget(Paragraph::new(pager_lines(pager)), pager_area);
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.move_first(),
            KeyCode::End | KeyCode::Char('G') => self.move_last(),
            _ => return false,
        }
        true
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, search: &SearchBar, editing: bool) {
    let line = if editing {
        Line::from(vec![
            Span::styled(format!("/{}", search.query), TEXT_WARNING),
            Span::styled("_", cursor_style()),
        ])
    } else if search.query.is_empty() {
        Line::from(Span::styled(search.placeholder.clone(), TEXT_DIM))
    } else {
        Line::from(vec![
            Span::raw("Search: "),
            Span::styled(search.query.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" (Esc to clear)", TEXT_DIM),
        ])
    };

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing { TEXT_WARNING } else { border_style(false) })
            .title(" Search (/ to edit, Enter to apply, Esc to clear) "),
    );
    frame.render_widget(paragraph, area);
}

fn rows_table<'a>(view: &'a TableView, rows: &'a [RowView]) -> Table<'a> {
    let header_cells = std::iter::once(Cell::from(view.select_all.marker())).chain(
        view.headers
            .iter()
            .map(|header| Cell::from(header.label.as_str())),
    );
    let header = Row::new(header_cells).style(header_style()).bottom_margin(1);

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            let checkbox = Cell::from(CheckState::from(row.checked).marker());
            Row::new(std::iter::once(checkbox).chain(row.cells.iter().map(table_cell)))
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(CHECKBOX_WIDTH))
        .chain(view.headers.iter().map(|_| Constraint::Fill(1)))
        .collect();

    Table::new(body, widths)
        .header(header)
        .row_highlight_style(row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
}

fn table_cell(cell: &CellView) -> Cell<'_> {
    let style = if cell.badge && !cell.text.is_empty() {
        badge_style(cell.class.as_deref().unwrap_or(DEFAULT_STATUS_CLASS))
    } else {
        class_style(cell.class.as_deref())
    };
    Cell::from(Span::styled(cell.text.as_str(), style))
}

fn cards_list(cards: &[CardView]) -> List<'_> {
    let items: Vec<ListItem> = cards
        .iter()
        .map(|card| {
            let marker = CheckState::from(card.checked).marker();
            let mut lines: Vec<Line> = card
                .lines
                .iter()
                .enumerate()
                .map(|(i, fragment)| {
                    let prefix = if i == 0 {
                        format!("{} ", marker)
                    } else {
                        CARD_INDENT.to_string()
                    };
                    Line::from(vec![
                        Span::raw(prefix),
                        Span::styled(fragment.text.as_str(), class_style(fragment.class.as_deref())),
                    ])
                })
                .collect();
            if lines.is_empty() {
                lines.push(Line::from(marker));
            }
            if let Some(badge) = &card.status {
                lines.push(Line::from(vec![
                    Span::raw(CARD_INDENT),
                    Span::styled(badge.label.as_str(), badge_style(&badge.class)),
                ]));
            }
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    List::new(items)
        .highlight_style(row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
}

fn pager_lines(pager: &PagerView) -> Vec<Line<'_>> {
    let control = |label: &'static str, enabled: bool| {
        Span::styled(label, if enabled { Style::default() } else { TEXT_DIM })
    };
    let mut lines = vec![Line::from(vec![
        Span::raw(" "),
        control("◀ Prev (p)", pager.previous_enabled),
        Span::styled(" │ ", TEXT_DIM),
        Span::styled(pager.label.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" │ ", TEXT_DIM),
        control("Next (n) ▶", pager.next_enabled),
    ])];
    if let Some(size_line) = &pager.size_line {
        lines.push(Line::from(Span::styled(format!(" {}", size_line), TEXT_DIM)));
    }
    lines
}
