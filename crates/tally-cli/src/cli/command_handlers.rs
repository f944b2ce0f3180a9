use crate::cli::main_types::{ConfigCommands, ListArgs, OutputFormat};
use serde::Serialize;
use std::path::PathBuf;
use tally_core::api::envelope::load_envelope;
use tally_core::core::source::{MemorySource, PageSource};
use tally_core::display::TableDisplay;
use tally_core::error::{AppError, CliError, DisplayError};
use tally_core::record::{Fragment, Record, RecordId, TableRecord};
use tally_core::storage::config::{Config, ViewPreset};
use tally_core::table::{
    ColumnSpec, DropdownAction, PaginationDescriptor, RecordTable, SelectionController,
    SelectionScope, TableEvent, TableHandler,
};

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config: &mut Config,
        config_path: Option<PathBuf>,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                log::debug!("showing configuration");
                print!("{}", describe_config(config));
                Ok(())
            }
            ConfigCommands::Set {
                page_size,
                colors,
                status,
                default_class,
            } => {
                let updated = apply_settings(config, page_size, colors, &status, default_class)?;
                if updated.is_empty() {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "No configuration values provided. Use --page-size, --colors, --status or --default-class".to_string(),
                    )));
                }
                config.save(config_path)?;
                println!("✅ Set {}", updated.join(", "));
                println!("Configuration saved successfully.");
                Ok(())
            }
            ConfigCommands::Path => {
                let path = match config_path {
                    Some(path) => path,
                    None => Config::config_file_path()?,
                };
                println!("{}", path.display());
                Ok(())
            }
        }
    }
}

/// Apply `config set` options, returning a description of each change.
fn apply_settings(
    config: &mut Config,
    page_size: Option<usize>,
    colors: Option<bool>,
    status: &[String],
    default_class: Option<String>,
) -> Result<Vec<String>, AppError> {
    let mut updated = Vec::new();

    if let Some(size) = page_size {
        config.set_page_size(size)?;
        updated.push(format!("page size to {}", size));
    }

    if let Some(use_colors) = colors {
        config.use_colors = use_colors;
        updated.push(format!("colors to {}", use_colors));
    }

    for entry in status {
        let Some((name, class)) = entry
            .split_once('=')
            .filter(|(name, class)| !name.trim().is_empty() && !class.trim().is_empty())
        else {
            return Err(AppError::Cli(CliError::InvalidArguments(format!(
                "Expected Status=class, got '{}'",
                entry
            ))));
        };
        config
            .status_styles
            .insert(name.trim().to_string(), class.trim().to_string());
        updated.push(format!("status '{}' to {}", name.trim(), class.trim()));
    }

    if let Some(class) = default_class {
        updated.push(format!("default class to {}", class));
        config.default_class = Some(class);
    }

    Ok(updated)
}

fn describe_config(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("Current Configuration:\n");
    out.push_str("=====================\n");
    out.push_str(&format!("Page size: {}", config.page_size));
    let effective = config.effective_page_size();
    if effective != config.page_size {
        out.push_str(&format!(" (overridden to {} by environment)", effective));
    }
    out.push('\n');
    out.push_str(&format!(
        "Colors: {}\n",
        if config.use_colors { "on" } else { "off" }
    ));

    out.push_str("\nStatus badges:\n");
    for (status, class) in &config.status_styles {
        out.push_str(&format!("  {:<12} {}\n", status, class));
    }
    out.push_str(&format!(
        "  {:<12} {}\n",
        "(other)",
        config.status_styles().fallback()
    ));

    out.push_str("\nViews:\n");
    if config.views.is_empty() {
        out.push_str("  No views configured\n");
    }
    for (name, view) in &config.views {
        out.push_str(&format!("  [{}]\n", name));
        if let Some(entity) = &view.entity {
            out.push_str(&format!("    Entity: {}\n", entity));
        }
        if !view.columns.is_empty() {
            out.push_str(&format!("    Columns: {}\n", view.columns.join(", ")));
        }
        if !view.search_fields.is_empty() {
            out.push_str(&format!("    Search: {}\n", view.search_fields.join(", ")));
        }
        if !view.actions.is_empty() {
            out.push_str(&format!("    Actions: {}\n", view.actions.join(", ")));
        }
    }
    out
}

/// Caller-side state for one `list` invocation: the selection plus the row
/// action that was triggered, if any.
#[derive(Default)]
pub struct ListState {
    pub selection: SelectionController,
    pub invoked: Option<(String, Record)>,
}

impl TableHandler<Record> for ListState {
    fn on_select_item(&mut self, id: &RecordId, checked: bool) {
        TableHandler::<Record>::on_select_item(&mut self.selection, id, checked);
    }

    fn on_select_all(&mut self, checked: bool, ids: &[RecordId]) {
        TableHandler::<Record>::on_select_all(&mut self.selection, checked, ids);
    }

    fn on_select_all_records(&mut self, total: usize) {
        TableHandler::<Record>::on_select_all_records(&mut self.selection, total);
    }

    fn on_row_action(&mut self, action: &str, record: &Record) {
        log::info!("action '{}' on record {}", action, record.id());
        self.invoked = Some((action.to_string(), record.clone()));
    }
}

pub struct ListSession {
    pub entity: Option<String>,
    pub table: RecordTable<Record>,
    pub state: ListState,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    entity: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pagination: Option<&'a PaginationDescriptor>,
    search: &'a str,
    records: Vec<&'a Record>,
    selected: Vec<RecordId>,
    all_records_selected: bool,
}

#[derive(Default)]
pub struct ListHandler;

impl ListHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, args: ListArgs, config: &Config) -> Result<(), AppError> {
        let session = self.prepare(&args, config)?;

        if let Some((action, record)) = &session.state.invoked {
            println!("{}", self.render_action(action, record)?);
            return Ok(());
        }

        let display = TableDisplay::new().with_colors(config.use_colors && !args.no_color);
        println!("{}", self.render(&session, args.format, &display)?);
        Ok(())
    }

    /// Load the file, build the table and replay the command line as table events.
    pub fn prepare(&self, args: &ListArgs, config: &Config) -> Result<ListSession, AppError> {
        let preset = match &args.view {
            Some(name) => Some(config.view(name).ok_or_else(|| CliError::UnknownView {
                name: name.clone(),
                available: config.view_names(),
            })?),
            None => None,
        };

        let entity = args
            .entity
            .clone()
            .or_else(|| preset.and_then(|p| p.entity.clone()));
        let envelope = load_envelope(&args.file, entity.as_deref())?;

        let specs = column_specs(args, preset, &envelope.records)?;
        let search_fields = search_fields(args, preset, &specs);
        let actions = match preset {
            Some(p) if !p.actions.is_empty() => p.dropdown_actions()?,
            _ => DropdownAction::standard(),
        };

        let (records, pagination) = match envelope.pagination {
            Some(pagination) => {
                if args.page != 1 && args.page != pagination.page {
                    log::warn!(
                        "file holds page {} only; ignoring --page {}",
                        pagination.page,
                        args.page
                    );
                }
                (envelope.records, pagination)
            }
            None => {
                let page_size = args
                    .page_size
                    .unwrap_or_else(|| config.effective_page_size());
                let page = MemorySource::new(envelope.records).fetch_page(args.page, page_size)?;
                (page.records, page.pagination)
            }
        };

        let mut builder = RecordTable::builder()
            .data(records)
            .columns(specs.iter().cloned().map(ColumnSpec::into_column).collect())
            .search_fields(search_fields)
            .pagination(pagination)
            .show_data_size(!args.no_size)
            .status_styles(config.status_styles())
            .dropdown_actions(actions);
        if args.cards {
            builder = builder.item_renderer(card_renderer(specs));
        }
        let mut table = builder.build()?;

        let mut state = ListState::default();
        self.replay(args, &mut table, &mut state)?;

        Ok(ListSession {
            entity: envelope.entity,
            table,
            state,
        })
    }

    fn replay(
        &self,
        args: &ListArgs,
        table: &mut RecordTable<Record>,
        state: &mut ListState,
    ) -> Result<(), AppError> {
        if let Some(query) = &args.search {
            table.handle(TableEvent::Search(query.clone()), state);
        }

        if args.select_all {
            table.handle(TableEvent::ToggleAll(true), state);
        }
        if args.all_records {
            table.handle(TableEvent::SelectAllRecords, state);
        }

        for raw in &args.select {
            match find_id(table, raw) {
                Some(id) => {
                    table.handle(TableEvent::ToggleRow { id, checked: true }, state);
                }
                None => log::warn!("no record with id {} on this page", raw),
            }
        }

        if let (Some(action), Some(raw)) = (&args.action, &args.id) {
            let handled = match find_id(table, raw) {
                Some(id) => table.handle(
                    TableEvent::RowAction {
                        action: action.clone(),
                        id,
                    },
                    state,
                ),
                None => false,
            };
            if !handled {
                let keys: Vec<&str> = table.actions().iter().map(|a| a.key.as_str()).collect();
                return Err(AppError::Cli(CliError::InvalidArguments(format!(
                    "Cannot run '{}' on record {}: record not on this page or action not one of {}",
                    action,
                    raw,
                    keys.join(", ")
                ))));
            }
        }

        Ok(())
    }

    pub fn render(
        &self,
        session: &ListSession,
        format: OutputFormat,
        display: &TableDisplay,
    ) -> Result<String, AppError> {
        match format {
            OutputFormat::Table => {
                let view = session.table.view(&session.state.selection);
                Ok(display.render(&view))
            }
            OutputFormat::Json => render_json(session),
            OutputFormat::Csv => render_csv(&session.table),
        }
    }

    fn render_action(&self, action: &str, record: &Record) -> Result<String, AppError> {
        let body = serde_json::to_string_pretty(record)
            .map_err(|e| DisplayError::Export(format!("Failed to serialize record: {}", e)))?;
        Ok(format!("▶ {} record {}\n{}", action, record.id(), body))
    }
}

/// `--columns`, then the view preset, then every field of the first record.
fn column_specs(
    args: &ListArgs,
    preset: Option<&ViewPreset>,
    records: &[Record],
) -> Result<Vec<ColumnSpec>, AppError> {
    if let Some(columns) = &args.columns {
        return Ok(ColumnSpec::parse_list(columns)?);
    }
    if let Some(p) = preset.filter(|p| !p.columns.is_empty()) {
        return Ok(p.column_specs()?);
    }
    Ok(ColumnSpec::infer(records.first()))
}

/// `--fields`, then the view preset, then the displayed columns.
fn search_fields(args: &ListArgs, preset: Option<&ViewPreset>, specs: &[ColumnSpec]) -> Vec<String> {
    if let Some(fields) = &args.fields {
        return fields
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
    }
    if let Some(p) = preset.filter(|p| !p.search_fields.is_empty()) {
        return p.search_fields.clone();
    }
    specs.iter().map(|spec| spec.key.clone()).collect()
}

fn card_renderer(specs: Vec<ColumnSpec>) -> impl Fn(&Record) -> Vec<Fragment> {
    move |record: &Record| {
        specs
            .iter()
            .map(|spec| {
                Fragment::plain(format!(
                    "{}: {}",
                    spec.label,
                    record.field(&spec.key).unwrap_or_default()
                ))
            })
            .collect()
    }
}

/// Ids on the command line are strings; match them against the page.
fn find_id(table: &RecordTable<Record>, raw: &str) -> Option<RecordId> {
    table
        .data()
        .iter()
        .map(|record| record.id())
        .find(|id| id.to_string() == raw)
        .cloned()
}

fn render_json(session: &ListSession) -> Result<String, AppError> {
    let selection = &session.state.selection;
    let output = JsonOutput {
        entity: session.entity.as_deref(),
        pagination: session.table.pagination(),
        search: session.table.search_query(),
        records: session.table.visible_records(),
        selected: match selection.scope() {
            SelectionScope::Explicit => selection.ids(),
            SelectionScope::AllRecords { .. } => selection.excluded(),
        },
        all_records_selected: selection.is_all_records(),
    };
    serde_json::to_string_pretty(&output)
        .map_err(|e| DisplayError::Export(format!("Failed to serialize to JSON: {}", e)).into())
}

fn render_csv(table: &RecordTable<Record>) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let export_error = |e: csv::Error| DisplayError::Export(format!("Failed to write CSV: {}", e));

    writer
        .write_record(table.columns().iter().map(|c| c.label.as_str()))
        .map_err(export_error)?;
    for record in table.visible_records() {
        let cells: Vec<String> = table
            .columns()
            .iter()
            .map(|column| column.render_cell(record).text)
            .collect();
        writer.write_record(&cells).map_err(export_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| DisplayError::Export(format!("Failed to flush CSV: {}", e)))?;
    String::from_utf8(bytes)
        .map_err(|e| DisplayError::Export(format!("CSV is not valid UTF-8: {}", e)).into())
}
