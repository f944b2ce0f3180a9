//! UI components for tally-tui.
//!
//! The table panel and status bar implement [`Component`]; overlays render
//! on top of them while open.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};

mod action_menu;
mod help_overlay;
mod record_detail;
mod status_bar;
pub mod styles;
mod table_panel;

pub use action_menu::ActionMenu;
pub use help_overlay::HelpOverlay;
pub use record_detail::RecordDetailOverlay;
pub use status_bar::StatusBar;
pub use table_panel::TablePanel;

/// Common trait for all UI components.
pub trait Component {
    /// Draw the component within the given area.
    /// Takes `&mut self` to support stateful widgets like TableState.
    fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle keyboard input. Returns true if the event was consumed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;
}

/// Centered rect with percentage-based dimensions, for overlays.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{Terminal, backend::TestBackend};

    /// Buffer contents as text, one line per terminal row.
    pub(crate) fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width.max(1) as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(40, 50, area);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 30);
        assert!((12..=13).contains(&popup.y));
    }
}
