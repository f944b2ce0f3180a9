//! Shared style definitions for TUI components.

use ratatui::style::{Color, Modifier, Style};
use tally_core::table::StyleClass;

// === Border Styles ===

pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === Table Styles ===

pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the row under the cursor.
pub fn row_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub const HIGHLIGHT_SYMBOL: &str = "► ";

/// Colour for a record style class (`green`, `danger`, `muted`, ...).
/// Unknown classes fall back to the terminal's default colour.
pub fn class_color(class: &str) -> Option<Color> {
    StyleClass::from_name(class).map(|class| match class {
        StyleClass::Green => Color::Green,
        StyleClass::Yellow => Color::Yellow,
        StyleClass::Red => Color::Red,
        StyleClass::Blue => Color::Blue,
        StyleClass::Cyan => Color::Cyan,
        StyleClass::Magenta => Color::Magenta,
        StyleClass::Muted => Color::DarkGray,
    })
}

/// Style for a cell carrying an optional class. `bold` is a modifier, not a colour.
pub fn class_style(class: Option<&str>) -> Style {
    match class {
        Some("bold") => Style::default().add_modifier(Modifier::BOLD),
        Some(class) => match class_color(class) {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        },
        None => Style::default(),
    }
}

/// Status badges are bold and coloured by their class.
pub fn badge_style(class: &str) -> Style {
    class_style(Some(class)).add_modifier(Modifier::BOLD)
}

// === Text Styles ===

pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

pub const TEXT_WARNING: Style = Style::new().fg(Color::Yellow);

pub const TEXT_SUCCESS: Style = Style::new().fg(Color::Green);

// === Modal Styles ===

pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the selected entry of a menu.
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

// === Input Styles ===

pub fn cursor_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK)
}
