//! Row action menu.
//!
//! Lists the table's dropdown actions for the record under the cursor.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tally_core::record::RecordId;
use tally_core::table::DropdownAction;

use super::centered_rect;
use super::styles::{TEXT_DIM, TEXT_WARNING, modal_title_style, selected_style};

pub struct ActionMenu {
    record_id: RecordId,
    actions: Vec<DropdownAction>,
    selected: usize,
}

impl ActionMenu {
    pub fn new(record_id: RecordId, actions: Vec<DropdownAction>) -> Self {
        Self {
            record_id,
            actions,
            selected: 0,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        if self.selected + 1 < self.actions.len() {
            self.selected += 1;
        }
    }

    pub fn selected_action(&self) -> Option<&DropdownAction> {
        self.actions.get(self.selected)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(40, 40, area);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  Record {}", self.record_id),
                modal_title_style(),
            )),
            Line::from(""),
        ];

        for (i, action) in self.actions.iter().enumerate() {
            let is_selected = i == self.selected;
            let prefix = if is_selected { "  ► " } else { "    " };
            let style = if is_selected {
                selected_style()
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(action.label.as_str(), style),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  [", TEXT_DIM),
            Span::styled("↑↓", TEXT_WARNING),
            Span::styled(" Move] [", TEXT_DIM),
            Span::styled("Enter", TEXT_WARNING),
            Span::styled(" Run] [", TEXT_DIM),
            Span::styled("Esc", TEXT_WARNING),
            Span::styled(" Cancel]", TEXT_DIM),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .title(" Actions ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut menu = ActionMenu::new(RecordId::Number(7), DropdownAction::standard());
        assert_eq!(menu.selected_action().map(|a| a.key.as_str()), Some("view"));

        menu.select_up();
        assert_eq!(menu.selected_action().map(|a| a.key.as_str()), Some("view"));

        for _ in 0..5 {
            menu.select_down();
        }
        assert_eq!(menu.selected_action().map(|a| a.key.as_str()), Some("delete"));
        assert_eq!(menu.record_id(), &RecordId::Number(7));
    }

    #[test]
    fn test_empty_menu_has_no_action() {
        let mut menu = ActionMenu::new(RecordId::Number(1), Vec::new());
        menu.select_down();
        assert!(menu.selected_action().is_none());
    }
}
