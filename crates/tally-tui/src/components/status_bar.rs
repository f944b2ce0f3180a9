//! Status bar component.
//!
//! Displays keybindings, the selection count and status messages at the
//! bottom of the screen.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use super::styles::{TEXT_DIM, TEXT_SUCCESS, TEXT_WARNING};

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Status bar showing keybindings, the selection and messages.
pub struct StatusBar {
    message: String,
    bindings: Vec<KeyBinding>,
    /// Number of selected records
    selection_count: usize,
    /// Set while every record across pages is selected.
    all_records: bool,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default keybindings.
    pub fn new() -> Self {
        Self {
            message: String::new(),
            bindings: vec![
                KeyBinding::new("↑↓", "Nav"),
                KeyBinding::new("Space", "Select"),
                KeyBinding::new("/", "Search"),
                KeyBinding::new("n/p", "Page"),
                KeyBinding::new("Enter", "Actions"),
                KeyBinding::new("?", "Help"),
                KeyBinding::new("q", "Quit"),
            ],
            selection_count: 0,
            all_records: false,
        }
    }

    /// Set a status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Update the selection shown next to the keybindings.
    pub fn set_selection(&mut self, count: usize, all_records: bool) {
        self.selection_count = count;
        self.all_records = all_records;
    }
}

impl Component for StatusBar {
    fn draw(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut spans: Vec<Span> = Vec::new();

        // Add keybindings
        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", TEXT_DIM));
            }
            spans.push(Span::styled(format!(" {} ", binding.key), TEXT_WARNING));
            spans.push(Span::raw(binding.action));
        }

        if self.selection_count > 0 {
            let label = if self.all_records {
                format!(" all {} selected ", self.selection_count)
            } else {
                format!(" {} selected ", self.selection_count)
            };
            spans.push(Span::styled(" │ ", TEXT_DIM));
            spans.push(Span::styled(label, TEXT_WARNING));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled(" │ ", TEXT_DIM));
            spans.push(Span::styled(self.message.clone(), TEXT_SUCCESS));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> bool {
        false
    }
}
