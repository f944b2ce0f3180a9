//! Help overlay component.
//!
//! Displays a modal overlay showing all available keybindings.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;
use super::styles::TEXT_DIM;

pub struct HelpOverlay;

impl HelpOverlay {
    const GLOBAL_KEYS: &'static [(&'static str, &'static str)] = &[
        ("q / Ctrl+C", "Quit application"),
        ("?", "Toggle help"),
        ("v", "Toggle card view"),
    ];

    const TABLE_KEYS: &'static [(&'static str, &'static str)] = &[
        ("↑ / k", "Move up"),
        ("↓ / j", "Move down"),
        ("Home / g", "Go to first record"),
        ("End / G", "Go to last record"),
        ("n / p", "Next / previous page"),
        ("Enter", "Actions for the record"),
    ];

    const SELECTION_KEYS: &'static [(&'static str, &'static str)] = &[
        ("Space", "Check / uncheck the record"),
        ("a", "Check / uncheck the page"),
        ("A", "Check every record"),
    ];

    const SEARCH_KEYS: &'static [(&'static str, &'static str)] = &[
        ("/", "Start typing a search"),
        ("Enter", "Keep the search"),
        ("Esc", "Clear the search"),
    ];

    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        let sections = [
            ("Global", Self::GLOBAL_KEYS),
            ("Table", Self::TABLE_KEYS),
            ("Selection", Self::SELECTION_KEYS),
            ("Search", Self::SEARCH_KEYS),
        ];
        for (title, keys) in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}", title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from("  ──────────────────────────────────"));
            for (key, action) in keys {
                lines.push(Self::format_keybinding(key, action));
            }
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            TEXT_DIM,
        )));

        let help_text = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help_text, popup_area);
    }

    fn format_keybinding(key: &str, action: &str) -> Line<'static> {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{:<14}", key),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(action.to_string()),
        ])
    }
}
