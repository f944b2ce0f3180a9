//! Record detail overlay component.
//!
//! Opened by the `view` row action; lists every field of the record.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tally_core::record::{Record, RecordId, TableRecord};
use tally_core::utils::text::truncate_text;
use unicode_width::UnicodeWidthStr;

use super::centered_rect;
use super::styles::{TEXT_DIM, TEXT_WARNING};

/// Field names are right-aligned to this many columns at most.
const MAX_NAME_WIDTH: usize = 24;

pub struct RecordDetailOverlay {
    id: RecordId,
    names: Vec<String>,
    values: Vec<String>,
    selected_index: usize,
    scroll_offset: usize,
}

impl RecordDetailOverlay {
    pub fn new(record: &Record) -> Self {
        let (names, values) = record
            .fields()
            .map(|(name, value)| (name.to_string(), value.as_display().into_owned()))
            .unzip();
        Self {
            id: record.id().clone(),
            names,
            values,
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    #[cfg(test)]
    pub fn selected_field(&self) -> Option<(&str, &str)> {
        let name = self.names.get(self.selected_index)?;
        let value = self.values.get(self.selected_index)?;
        Some((name, value))
    }

    pub fn scroll_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.selected_index + 1 < self.names.len() {
            self.selected_index += 1;
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 80, area);
        frame.render_widget(Clear, popup_area);

        // borders, blank lines, position line and help line take 8 rows
        let visible_fields = (popup_area.height.saturating_sub(8) as usize).max(1);

        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_fields {
            self.scroll_offset = self.selected_index + 1 - visible_fields;
        }

        let name_width = self
            .names
            .iter()
            .map(|n| n.width())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH);
        let value_width = popup_area.width.saturating_sub(name_width as u16 + 10) as usize;

        let mut lines: Vec<Line> = vec![Line::from("")];

        let end_index = (self.scroll_offset + visible_fields).min(self.names.len());
        for i in self.scroll_offset..end_index {
            let name = truncate_text(&self.names[i], name_width);
            let padded = format!("{}{}", " ".repeat(name_width.saturating_sub(name.width())), name);
            let value = if self.values[i].is_empty() {
                "(empty)".to_string()
            } else {
                truncate_text(&self.values[i], value_width)
            };

            let (prefix, name_style, separator_style, value_style) = if i == self.selected_index {
                let highlight = Style::default().fg(Color::Black).bg(Color::Cyan);
                (
                    "► ",
                    highlight.add_modifier(Modifier::BOLD),
                    highlight,
                    highlight,
                )
            } else {
                (
                    "  ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                    TEXT_DIM,
                    Style::default(),
                )
            };

            lines.push(Line::from(vec![
                Span::styled(prefix, value_style),
                Span::styled(padded, name_style),
                Span::styled(" : ", separator_style),
                Span::styled(value, value_style),
            ]));
        }

        lines.push(Line::from(""));

        let total = self.names.len();
        let position = if total > visible_fields {
            format!(
                "  Field {}/{} (scroll {}-{}/{})",
                self.selected_index + 1,
                total,
                self.scroll_offset + 1,
                end_index,
                total
            )
        } else {
            format!("  Field {}/{}", self.selected_index + 1, total)
        };
        lines.push(Line::from(Span::styled(position, TEXT_DIM)));

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  [", TEXT_DIM),
            Span::styled("↑↓/jk", TEXT_WARNING),
            Span::styled(" Move] [", TEXT_DIM),
            Span::styled("Esc/Enter", TEXT_WARNING),
            Span::styled(" Close]", TEXT_DIM),
        ]));

        let detail = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(format!(" Record {} ", self.id))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(detail, popup_area);
    }
}
