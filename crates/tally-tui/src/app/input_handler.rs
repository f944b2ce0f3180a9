//! Keyboard input handling for the application.
//!
//! Keys go to the open overlay first, then to the search input while it is
//! being edited, then to global and table bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally_core::table::{CheckState, TableEvent};

use crate::components::{ActionMenu, Component};

use super::App;
use super::data_handler::card_renderer;

impl App {
    pub(super) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let handled = self.handle_overlay_keys(code)
            || self.handle_search_keys(code)
            || self.handle_global_keys(code)
            || self.handle_table_keys(code);
        if !handled {
            self.panel.handle_key(KeyEvent::new(code, modifiers));
        }

        self.process_pending();
        self.refresh();
    }

    /// Returns true if an overlay is open; overlays swallow every key.
    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if let Some(detail) = self.record_detail.as_mut() {
            match code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.record_detail = None,
                KeyCode::Up | KeyCode::Char('k') => detail.scroll_up(),
                KeyCode::Down | KeyCode::Char('j') => detail.scroll_down(),
                _ => {}
            }
            return true;
        }

        if let Some(menu) = self.action_menu.as_mut() {
            match code {
                KeyCode::Esc => self.action_menu = None,
                KeyCode::Up | KeyCode::Char('k') => menu.select_up(),
                KeyCode::Down | KeyCode::Char('j') => menu.select_down(),
                KeyCode::Enter => {
                    let event = menu.selected_action().map(|action| TableEvent::RowAction {
                        action: action.key.clone(),
                        id: menu.record_id().clone(),
                    });
                    self.action_menu = None;
                    if let Some(event) = event {
                        self.table.handle(event, &mut self.handler);
                    }
                }
                _ => {}
            }
            return true;
        }

        if self.show_help {
            if matches!(code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return true;
        }

        false
    }

    /// Typing into the search bar filters the page as you type.
    fn handle_search_keys(&mut self, code: KeyCode) -> bool {
        if !self.panel.is_editing_search() {
            return false;
        }

        match code {
            KeyCode::Enter => {
                self.panel.set_editing_search(false);
                if !self.table.search_query().is_empty() {
                    self.status_bar
                        .set_message(format!("Search: {}", self.table.search_query()));
                }
            }
            KeyCode::Esc => {
                self.panel.set_editing_search(false);
                self.table.handle(TableEvent::ClearSearch, &mut self.handler);
            }
            KeyCode::Backspace => {
                self.table
                    .handle(TableEvent::SearchBackspace, &mut self.handler);
            }
            KeyCode::Char(c) => {
                self.table
                    .handle(TableEvent::SearchInput(c), &mut self.handler);
            }
            _ => {}
        }
        true
    }

    fn handle_global_keys(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('/') => {
                if self.panel.view().is_some_and(|v| v.search.is_some()) {
                    self.panel.set_editing_search(true);
                } else {
                    self.status_bar.set_message("No searchable fields");
                }
            }
            KeyCode::Esc if !self.table.search_query().is_empty() => {
                self.table.handle(TableEvent::ClearSearch, &mut self.handler);
            }
            KeyCode::Char('v') => self.toggle_card_mode(),
            _ => return false,
        }
        true
    }

    fn handle_table_keys(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(' ') => {
                if let Some(id) = self.panel.selected_id().cloned() {
                    let checked = !self.panel.selected_checked();
                    self.table
                        .handle(TableEvent::ToggleRow { id, checked }, &mut self.handler);
                }
            }
            KeyCode::Char('a') => {
                let checked = self
                    .panel
                    .view()
                    .is_none_or(|view| view.select_all != CheckState::Checked);
                self.table
                    .handle(TableEvent::ToggleAll(checked), &mut self.handler);
            }
            KeyCode::Char('A') => {
                let event = if self.handler.selection.is_all_records() {
                    TableEvent::ToggleAll(false)
                } else {
                    TableEvent::SelectAllRecords
                };
                self.table.handle(event, &mut self.handler);
            }
            KeyCode::Char('n') | KeyCode::Right => {
                if !self.table.handle(TableEvent::NextPage, &mut self.handler) {
                    self.status_bar.set_message("Already on the last page");
                }
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if !self.table.handle(TableEvent::PreviousPage, &mut self.handler) {
                    self.status_bar.set_message("Already on the first page");
                }
            }
            KeyCode::Enter => self.open_action_menu(),
            _ => return false,
        }
        true
    }

    fn open_action_menu(&mut self) {
        if self.table.actions().is_empty() {
            return;
        }
        if let Some(id) = self.panel.selected_id() {
            self.action_menu = Some(ActionMenu::new(id.clone(), self.table.actions().to_vec()));
        }
    }

    fn toggle_card_mode(&mut self) {
        if self.table.is_card_mode() {
            self.table.take_item_renderer();
        } else {
            self.table
                .set_item_renderer(Box::new(card_renderer(self.columns.clone())));
        }
        self.panel.reset_cursor();
    }
}
