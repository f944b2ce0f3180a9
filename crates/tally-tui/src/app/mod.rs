//! Application state and the main run loop.
//!
//! ## Module Structure
//! - `mod.rs`: App struct definition, initialization, and rendering
//! - `data_handler.rs`: file loading, paging and row actions
//! - `input_handler.rs`: keyboard event processing

mod data_handler;
mod input_handler;

pub use data_handler::{Dataset, HandlerState, LoadOptions};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_core::core::source::PageSource;
use tally_core::record::Record;
use tally_core::table::{ColumnSpec, RecordTable};

use crate::components::{
    ActionMenu, Component, HelpOverlay, RecordDetailOverlay, StatusBar, TablePanel,
};
use crate::error::TuiResult;
use crate::event::{Event, EventHandler};

const HEADER_HEIGHT: u16 = 3;
const STATUS_BAR_HEIGHT: u16 = 3;
const TICK_RATE_MS: u64 = 250;

pub struct App {
    pub should_quit: bool,
    pub(crate) title: String,
    pub(crate) table: RecordTable<Record>,
    pub(crate) handler: HandlerState,
    pub(crate) source: Option<Box<dyn PageSource<Record>>>,
    pub(crate) page_size: usize,
    pub(crate) columns: Vec<ColumnSpec>,
    pub(crate) panel: TablePanel,
    pub(crate) status_bar: StatusBar,
    pub(crate) show_help: bool,
    pub(crate) action_menu: Option<ActionMenu>,
    pub(crate) record_detail: Option<RecordDetailOverlay>,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let Dataset {
            title,
            table,
            source,
            page_size,
            columns,
        } = dataset;

        let mut app = Self {
            should_quit: false,
            panel: TablePanel::new(title.clone()),
            title,
            table,
            handler: HandlerState::default(),
            source,
            page_size,
            columns,
            status_bar: StatusBar::new(),
            show_help: false,
            action_menu: None,
            record_detail: None,
        };
        app.refresh();
        app
    }

    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> TuiResult<()> {
        let event_handler = EventHandler::new(TICK_RATE_MS);

        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key.code, key.modifiers),
                Event::Resize(_, _) => {}
                Event::Tick => {}
            }
        }

        Ok(())
    }

    /// Re-snapshot the table after state changes.
    pub(crate) fn refresh(&mut self) {
        self.panel.set_view(self.table.view(&self.handler.selection));
        self.status_bar.set_selection(
            self.handler.selection.len(),
            self.handler.selection.is_all_records(),
        );
    }

    fn is_overlay_open(&self) -> bool {
        self.show_help || self.action_menu.is_some() || self.record_detail.is_some()
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let [header_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(size);

        self.draw_header(frame, header_area);

        let focused = !self.is_overlay_open();
        self.panel.draw(frame, main_area, focused);
        self.status_bar.draw(frame, status_area, false);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
        if let Some(menu) = &self.action_menu {
            menu.render(frame, size);
        }
        if let Some(detail) = &mut self.record_detail {
            detail.render(frame, size);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let mode = if self.table.is_card_mode() { "Cards" } else { "Rows" };
        let mut spans = vec![
            Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", Style::default().fg(Color::DarkGray)),
            Span::styled(format!(" {} ", mode), Style::default().fg(Color::Yellow)),
        ];
        if let Some(pagination) = self.table.pagination() {
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!(" {} ", pagination.page_label())));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" tally-tui ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}
