use crate::table::{
    CardView, CheckState, PagerView, RowView, SearchBar, StyleClass, TableBody, TableView,
};
use crate::utils::text::{truncate_text, wrap_text};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

const MAX_CELL_WIDTH: usize = 100;
const LOADING_TEXT: &str = "Loading...";

/// Map a style class to a terminal colour. Unknown classes stay uncoloured.
pub fn class_color(class: &str) -> Option<Color> {
    StyleClass::from_name(class).map(|class| match class {
        StyleClass::Green => Color::Green,
        StyleClass::Yellow => Color::Yellow,
        StyleClass::Red => Color::Red,
        StyleClass::Blue => Color::Blue,
        StyleClass::Cyan => Color::Cyan,
        StyleClass::Magenta => Color::Magenta,
        StyleClass::Muted => Color::DarkGrey,
    })
}

/// Plain-text renderer for a [`TableView`].
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl TableDisplay {
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _)) => {
                let width = cols as usize;
                Some(width.clamp(40, 200))
            }
            Err(_) => Some(80),
        }
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn bold_header(&self, text: &str, color: Color) -> Cell {
        if self.use_colors {
            Cell::new(text).add_attribute(Attribute::Bold).fg(color)
        } else {
            Cell::new(text).add_attribute(Attribute::Bold)
        }
    }

    fn styled_cell(&self, text: &str, class: Option<&str>) -> Cell {
        self.apply_class(Cell::new(truncate_text(text, MAX_CELL_WIDTH)), class)
    }

    fn apply_class(&self, cell: Cell, class: Option<&str>) -> Cell {
        if !self.use_colors {
            return cell;
        }
        match class {
            Some("bold") => cell.add_attribute(Attribute::Bold),
            Some(class) => match class_color(class) {
                Some(color) => cell.fg(color),
                None => cell,
            },
            None => cell,
        }
    }

    fn badge_cell(&self, text: &str, class: Option<&str>) -> Cell {
        if text.is_empty() {
            return Cell::new("");
        }
        if !self.use_colors {
            return Cell::new(format!("[{}]", text));
        }
        let cell = Cell::new(text).add_attribute(Attribute::Bold);
        match class.and_then(class_color) {
            Some(color) => cell.fg(color),
            None => cell,
        }
    }

    fn configure_table_width(&self, table: &mut Table) {
        let width = self
            .max_width
            .map(|w| if w > 20 { w - 6 } else { w.max(40) })
            .unwrap_or(80);
        table.set_width(width as u16);
    }

    fn new_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);
        table
    }

    /// Render the whole component: search bar, body, pager and footer lines.
    pub fn render(&self, view: &TableView) -> String {
        let mut sections = Vec::new();

        if let Some(search) = &view.search {
            sections.push(self.render_search_bar(search));
        }

        sections.push(match &view.body {
            TableBody::Loading => LOADING_TEXT.to_string(),
            TableBody::Empty { message } => message.clone(),
            TableBody::Rows(rows) => self.render_rows(view, rows),
            TableBody::Cards(cards) => self.render_cards(cards),
        });

        if let Some(pager) = &view.pager {
            sections.extend(self.render_pager(pager));
        }

        if view.selected_count > 0 {
            sections.push(format!("{} selected", view.selected_count));
        }

        if !view.actions.is_empty() && view.visible_len() > 0 {
            let labels: Vec<&str> = view.actions.iter().map(|a| a.label.as_str()).collect();
            sections.push(format!("Actions: {}", labels.join(", ")));
        }

        sections.join("\n")
    }

    fn render_search_bar(&self, search: &SearchBar) -> String {
        if search.query.is_empty() {
            format!("🔍 {}", search.placeholder)
        } else {
            format!("🔍 {}", search.query)
        }
    }

    fn render_rows(&self, view: &TableView, rows: &[RowView]) -> String {
        let mut table = self.new_table();

        let mut header = vec![self.bold_header(view.select_all.marker(), Color::Cyan)];
        header.extend(
            view.headers
                .iter()
                .map(|h| self.bold_header(&h.label, Color::Cyan)),
        );
        table.set_header(header);

        for row in rows {
            let mut cells = vec![Cell::new(CheckState::from(row.checked).marker())];
            cells.extend(row.cells.iter().map(|cell| {
                if cell.badge {
                    self.badge_cell(&cell.text, cell.class.as_deref())
                } else {
                    self.styled_cell(&cell.text, cell.class.as_deref())
                }
            }));
            table.add_row(cells);
        }

        table.to_string()
    }

    fn render_cards(&self, cards: &[CardView]) -> String {
        let mut table = self.new_table();

        // Lines are wrapped one by one so a long card keeps all of its lines.
        for card in cards {
            let mut lines: Vec<String> = card
                .lines
                .iter()
                .flat_map(|fragment| wrap_text(&fragment.text, MAX_CELL_WIDTH))
                .collect();
            if let Some(status) = &card.status {
                lines.push(format!("[{}]", status.label));
            }
            let class = card.status.as_ref().map(|s| s.class.as_str());
            table.add_row(vec![
                Cell::new(CheckState::from(card.checked).marker()),
                self.apply_class(Cell::new(lines.join("\n")), class),
            ]);
        }

        table.to_string()
    }

    fn render_pager(&self, pager: &PagerView) -> Vec<String> {
        let previous = if pager.previous_enabled { "< Prev" } else { "-" };
        let next = if pager.next_enabled { "Next >" } else { "-" };
        let mut lines = vec![format!("{} | {} | {}", previous, pager.label, next)];
        if let Some(size_line) = &pager.size_line {
            lines.push(size_line.clone());
        }
        lines
    }
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Fragment, Record, RecordId, TableRecord};
    use crate::table::{
        Column, DropdownAction, PaginationDescriptor, RecordTable, SelectionController,
        StatusStyles, TableEvent,
    };

    fn display() -> TableDisplay {
        TableDisplay::new().with_colors(false).with_max_width(120)
    }

    fn table() -> RecordTable<Record> {
        RecordTable::builder()
            .data(vec![
                Record::new(1).with("vendor", "Acme").with("status", "Paid"),
                Record::new(2).with("vendor", "Globex").with("status", "Overdue"),
            ])
            .columns(vec![
                Column::new("vendor", "Vendor"),
                Column::new("status", "Status"),
            ])
            .search_fields(["vendor"])
            .pagination(PaginationDescriptor::new(1, 5, 2, 10).expect("valid descriptor"))
            .status_styles(StatusStyles::new().with("Paid", "green"))
            .dropdown_actions(DropdownAction::standard())
            .build()
            .expect("valid table")
    }

    #[test]
    fn test_class_colors() {
        assert_eq!(class_color("green"), Some(Color::Green));
        assert_eq!(class_color("neutral"), Some(Color::DarkGrey));
        assert_eq!(class_color("sparkly"), None);
    }

    #[test]
    fn test_render_rows() {
        let mut selection = SelectionController::new();
        selection.set(RecordId::Number(1), true);
        let output = display().render(&table().view(&selection));

        assert!(output.contains("Search..."));
        assert!(output.contains("Vendor"));
        assert!(output.contains("Acme"));
        assert!(output.contains("[Paid]"));
        assert!(output.contains("[x]"));
        assert!(output.contains("[-]"));
        assert!(output.contains("- | Page 1 of 5 | Next >"));
        assert!(output.contains("Showing 1-2 of 10 records | 2 per page"));
        assert!(output.contains("1 selected"));
        assert!(output.contains("Actions: View, Edit, Delete"));
    }

    #[test]
    fn test_render_empty_search() {
        let mut table = table();
        table.handle(TableEvent::Search("zzz".to_string()), &mut ());
        let output = display().render(&table.view(&SelectionController::new()));
        assert!(output.contains("No records match \"zzz\""));
        assert!(!output.contains("Acme"));
        assert!(!output.contains("Actions:"));
    }

    #[test]
    fn test_render_loading() {
        let mut table = table();
        table.set_loading(true);
        let output = display().render(&table.view(&SelectionController::new()));
        assert!(output.contains(LOADING_TEXT));
        assert!(!output.contains("Globex"));
    }

    #[test]
    fn test_render_cards() {
        let mut table = table();
        table.set_item_renderer(Box::new(|r: &Record| {
            vec![Fragment::plain(format!(
                "{} #{}",
                r.field("vendor").unwrap_or_default(),
                r.id()
            ))]
        }));
        let output = display().render(&table.view(&SelectionController::new()));
        assert!(output.contains("Globex #2"));
        assert!(output.contains("[Overdue]"));
        assert!(!output.contains("Vendor"));
    }

    #[test]
    fn test_long_cards_keep_every_line() {
        let mut table = table();
        table.set_item_renderer(Box::new(|r: &Record| {
            vec![
                Fragment::plain(format!(
                    "vendor: {} Industrial Supply Cooperative",
                    r.field("vendor").unwrap_or_default()
                )),
                Fragment::plain(format!("memo: {}", "quarterly maintenance ".repeat(6))),
                Fragment::plain("amount: $12,500.00 due on receipt"),
                Fragment::plain("due: 2026-11-30"),
            ]
        }));
        let output = TableDisplay::new()
            .with_colors(false)
            .with_max_width(200)
            .render(&table.view(&SelectionController::new()));

        assert!(output.contains("Globex Industrial Supply Cooperative"));
        assert!(output.contains("$12,500.00 due on receipt"));
        assert!(output.contains("2026-11-30"));
        // the memo is wider than a cell line and wraps instead of being cut
        assert_eq!(output.matches("quarterly").count(), 12);
    }
}
