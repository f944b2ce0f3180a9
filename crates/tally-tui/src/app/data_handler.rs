//! Record loading and paging.
//!
//! The table reports page changes and row actions through [`HandlerState`];
//! the app then fetches the page from its [`PageSource`] and hands it back.

use std::path::{Path, PathBuf};

use tally_core::AppError;
use tally_core::api::envelope::load_envelope;
use tally_core::core::source::{MemorySource, PageSource};
use tally_core::error::CliError;
use tally_core::record::{Fragment, Record, RecordId, TableRecord};
use tally_core::storage::config::{Config, ViewPreset};
use tally_core::table::{
    ColumnSpec, DropdownAction, RecordTable, SelectionController, TableHandler,
};

use crate::components::RecordDetailOverlay;
use crate::error::TuiResult;

use super::App;

/// Action key that opens the record detail overlay.
pub(crate) const VIEW_ACTION: &str = "view";

/// What to open and how to page it.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub file: PathBuf,
    pub entity: Option<String>,
    pub view: Option<String>,
    pub page_size: Option<usize>,
}

/// A loaded record list, ready to be shown.
pub struct Dataset {
    pub title: String,
    pub table: RecordTable<Record>,
    /// `None` when the file is a single page of a larger server-side list.
    pub source: Option<Box<dyn PageSource<Record>>>,
    pub page_size: usize,
    /// Columns reused as card lines in card mode.
    pub columns: Vec<ColumnSpec>,
}

impl Dataset {
    pub fn load(options: &LoadOptions, config: &Config) -> TuiResult<Self> {
        let preset = match &options.view {
            Some(name) => Some(config.view(name).ok_or_else(|| {
                AppError::Cli(CliError::UnknownView {
                    name: name.clone(),
                    available: config.view_names(),
                })
            })?),
            None => None,
        };

        let entity = options
            .entity
            .clone()
            .or_else(|| preset.and_then(|p| p.entity.clone()));
        let envelope = load_envelope(&options.file, entity.as_deref())?;
        log::info!(
            "loaded {} records from {}",
            envelope.records.len(),
            options.file.display()
        );

        let columns = match preset.filter(|p| !p.columns.is_empty()) {
            Some(p) => p.column_specs().map_err(AppError::from)?,
            None => ColumnSpec::infer(envelope.records.first()),
        };
        let actions = preset_actions(preset)?;
        let search_fields = match preset.filter(|p| !p.search_fields.is_empty()) {
            Some(p) => p.search_fields.clone(),
            None => columns.iter().map(|c| c.key.clone()).collect(),
        };
        let page_size = options
            .page_size
            .unwrap_or_else(|| config.effective_page_size());
        let title = envelope
            .entity
            .clone()
            .unwrap_or_else(|| file_title(&options.file));

        let builder = RecordTable::builder()
            .columns(columns.iter().cloned().map(ColumnSpec::into_column).collect())
            .search_fields(search_fields)
            .status_styles(config.status_styles())
            .dropdown_actions(actions);

        let (table, source) = match envelope.pagination {
            Some(pagination) => {
                let table = builder
                    .data(envelope.records)
                    .pagination(pagination)
                    .build()
                    .map_err(AppError::from)?;
                (table, None)
            }
            None => {
                let mut source = MemorySource::new(envelope.records);
                let page = source.fetch_page(1, page_size)?;
                let table = builder
                    .data(page.records)
                    .pagination(page.pagination)
                    .build()
                    .map_err(AppError::from)?;
                let source: Box<dyn PageSource<Record>> = Box::new(source);
                (table, Some(source))
            }
        };

        Ok(Self {
            title,
            table,
            source,
            page_size,
            columns,
        })
    }
}

fn preset_actions(preset: Option<&ViewPreset>) -> TuiResult<Vec<DropdownAction>> {
    match preset {
        Some(p) if !p.actions.is_empty() => Ok(p.dropdown_actions().map_err(AppError::from)?),
        _ => Ok(DropdownAction::standard()),
    }
}

fn file_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "records".to_string())
}

/// Card lines: one `Label: value` line per column.
pub(crate) fn card_renderer(columns: Vec<ColumnSpec>) -> impl Fn(&Record) -> Vec<Fragment> {
    move |record: &Record| {
        columns
            .iter()
            .map(|column| {
                Fragment::plain(format!(
                    "{}: {}",
                    column.label,
                    record.field(&column.key).unwrap_or_default()
                ))
            })
            .collect()
    }
}

/// Table callbacks, collected while a key is handled and applied afterwards.
#[derive(Default)]
pub struct HandlerState {
    pub selection: SelectionController,
    pub pending_page: Option<usize>,
    pub pending_action: Option<(String, Record)>,
}

impl TableHandler<Record> for HandlerState {
    fn on_page_change(&mut self, page: usize) {
        self.pending_page = Some(page);
    }

    fn on_select_item(&mut self, id: &RecordId, checked: bool) {
        log::debug!("record {} checked={}", id, checked);
        TableHandler::<Record>::on_select_item(&mut self.selection, id, checked);
    }

    fn on_select_all(&mut self, checked: bool, ids: &[RecordId]) {
        TableHandler::<Record>::on_select_all(&mut self.selection, checked, ids);
    }

    fn on_select_all_records(&mut self, total: usize) {
        TableHandler::<Record>::on_select_all_records(&mut self.selection, total);
    }

    fn on_row_action(&mut self, action: &str, record: &Record) {
        self.pending_action = Some((action.to_string(), record.clone()));
    }
}

impl App {
    /// Apply whatever the last table event asked for.
    pub(super) fn process_pending(&mut self) {
        if let Some(page) = self.handler.pending_page.take() {
            self.load_page(page);
        }
        if let Some((action, record)) = self.handler.pending_action.take() {
            self.run_action(&action, &record);
        }
    }

    pub(super) fn load_page(&mut self, page: usize) {
        let Some(source) = self.source.as_mut() else {
            let current = self.table.pagination().map_or(1, |p| p.page);
            self.status_bar
                .set_message(format!("This file holds page {} only", current));
            return;
        };

        self.table.set_loading(true);
        match source.fetch_page(page, self.page_size) {
            Ok(fetched) => {
                let label = fetched.pagination.page_label();
                self.table.set_data(fetched.records, Some(fetched.pagination));
                self.panel.reset_cursor();
                self.status_bar.set_message(label);
            }
            Err(err) => {
                log::error!("failed to load page {}: {}", page, err);
                self.table.set_loading(false);
                self.status_bar.set_message(format!("Error: {}", err));
            }
        }
    }

    fn run_action(&mut self, action: &str, record: &Record) {
        log::info!("action '{}' on record {}", action, record.id());
        if action == VIEW_ACTION {
            let detail = RecordDetailOverlay::new(record);
            self.status_bar
                .set_message(format!("Viewing record {}", detail.id()));
            self.record_detail = Some(detail);
            return;
        }
        let label = DropdownAction::find(self.table.actions(), action)
            .map_or(action, |a| a.label.as_str());
        self.status_bar
            .set_message(format!("{}: record {}", label, record.id()));
    }
}
