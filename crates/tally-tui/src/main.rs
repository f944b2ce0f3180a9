//! tally-tui - Terminal UI for paginated business record lists
//!
//! Opens a saved API response (vendors, bills, invoices, ...) as a table
//! with search, selection, paging and row actions.

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::backend::CrosstermBackend;
use simplelog::{LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use tally_core::AppError;
use tally_core::error::TableError;
use tally_core::storage::config::Config;

mod app;
mod components;
mod error;
mod event;

use app::{App, Dataset, LoadOptions};
use error::{TuiError, TuiResult};

const LOG_FILE_NAME: &str = "tally-tui.log";

#[derive(Parser, Debug)]
#[command(name = "tally-tui")]
#[command(about = "Browse paginated business records in the terminal")]
#[command(version)]
struct Args {
    /// JSON file holding an API envelope or a plain array of records
    file: PathBuf,

    /// Name of the record array inside the envelope's data object
    #[arg(long)]
    entity: Option<String>,

    /// View preset from config.toml
    #[arg(long)]
    view: Option<String>,

    /// Records per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Custom configuration directory path
    #[arg(long)]
    config_dir: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long)]
    verbose: bool,
}

/// Log to a file so output never lands on the drawn screen.
fn init_logging(verbose: bool) -> TuiResult<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tally");
    fs::create_dir_all(&dir).map_err(|e| TuiError::Logging(e.to_string()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path).map_err(|e| TuiError::Logging(e.to_string()))?;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, simplelog::Config::default(), file)
        .map_err(|e| TuiError::Logging(e.to_string()))?;
    Ok(path)
}

fn load(args: &Args) -> TuiResult<Dataset> {
    if let Some(0) = args.page_size {
        return Err(TuiError::Data(AppError::Table(TableError::ZeroPageSize)));
    }
    let config_path = args.config_dir.as_deref().map(Config::path_in);
    let config = Config::load(config_path).map_err(AppError::from)?;

    let options = LoadOptions {
        file: args.file.clone(),
        entity: args.entity.clone(),
        view: args.view.clone(),
        page_size: args.page_size,
    };
    Dataset::load(&options, &config)
}

fn run(dataset: Dataset) -> TuiResult<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    // Restore the terminal even if drawing panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    let mut app = App::new(dataset);
    let result = app.run(&mut terminal);

    restore_terminal()?;
    result
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn report(err: &TuiError) {
    eprintln!("Error: {}", err);
    if let Some(hint) = err.hint() {
        eprintln!("💡 {}", hint);
    }
}

fn main() {
    let args = Args::parse();

    match init_logging(args.verbose) {
        Ok(path) => log::info!("tally-tui started, logging to {}", path.display()),
        Err(err) => eprintln!("Failed to initialize logger: {}", err),
    }

    // Load before touching the terminal so errors print normally
    let result = load(&args).and_then(run);
    if let Err(err) = result {
        log::error!("{}", err);
        report(&err);
        std::process::exit(1);
    }
}
