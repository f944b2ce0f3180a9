use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Browse paginated business records (vendors, bills, invoices) from saved API responses")]
#[command(version)]
#[command(after_help = "Examples:
  tally list invoices.json                      # First page, columns inferred
  tally list invoices.json --search acme        # Filter the page by text
  tally list invoices.json --view invoices      # Use a preset from config.toml
  tally list invoices.json --page 2 --format json
  tally config show                             # Show current configuration
  tally config set --page-size 25

Environment Variables:
  TALLY_PAGE_SIZE   Records per page when --page-size is not given")]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Custom configuration directory path
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management (show, set, path)
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Show one page of records as a table
    List(ListArgs),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration values
    #[command(after_help = "Examples:
  tally config set --page-size 25
  tally config set --status Void=gray --status Disputed=red
  tally config set --colors false")]
    Set {
        /// Records per page
        #[arg(long)]
        page_size: Option<usize>,
        /// Colour output (true/false)
        #[arg(long)]
        colors: Option<bool>,
        /// Badge class for a status, as Status=class (repeatable)
        #[arg(long, action = clap::ArgAction::Append)]
        status: Vec<String>,
        /// Badge class for statuses without a mapping
        #[arg(long)]
        default_class: Option<String>,
    },
    /// Print the configuration file location
    Path,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// Arguments for listing records
#[derive(Args, Debug, Clone)]
#[command(after_help = "Examples:
  tally list bills.json --columns vendor:Vendor,amount,status
  tally list bills.json --search acme --fields vendor,memo
  tally list bills.json --select 12 --select 14
  tally list bills.json --action view --id 12")]
pub struct ListArgs {
    /// JSON file holding an API envelope or a plain array of records
    pub file: PathBuf,

    /// Name of the record array inside the envelope's data object
    #[arg(long, help_heading = "Data Options")]
    pub entity: Option<String>,

    /// View preset from config.toml
    #[arg(long, help_heading = "Data Options")]
    pub view: Option<String>,

    /// Columns as key[:Label], comma-separated
    #[arg(long, help_heading = "Display Options")]
    pub columns: Option<String>,

    /// Search term applied to the current page
    #[arg(long, short = 's', help_heading = "Search Options")]
    pub search: Option<String>,

    /// Fields the search looks at, comma-separated
    #[arg(long, help_heading = "Search Options")]
    pub fields: Option<String>,

    /// Page to show (1-based)
    #[arg(long, default_value = "1", value_parser = parse_positive)]
    pub page: usize,

    /// Records per page
    #[arg(long, value_parser = parse_positive)]
    pub page_size: Option<usize>,

    /// Check a record by id (repeatable)
    #[arg(long, action = clap::ArgAction::Append, help_heading = "Selection Options")]
    pub select: Vec<String>,

    /// Check every record on the page
    #[arg(long, help_heading = "Selection Options")]
    pub select_all: bool,

    /// Check every record across all pages
    #[arg(long, help_heading = "Selection Options", conflicts_with = "select_all")]
    pub all_records: bool,

    /// Hide the page-size line
    #[arg(long, help_heading = "Display Options")]
    pub no_size: bool,

    /// Show records as cards instead of columns
    #[arg(long, help_heading = "Display Options")]
    pub cards: bool,

    /// Disable colours
    #[arg(long, help_heading = "Display Options")]
    pub no_color: bool,

    /// Row action to invoke, e.g. view
    #[arg(long, requires = "id", help_heading = "Action Options")]
    pub action: Option<String>,

    /// Record the action applies to
    #[arg(long, requires = "action", help_heading = "Action Options")]
    pub id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be 1 or greater".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["tally", "list", "bills.json"]).expect("valid args");
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.file, PathBuf::from("bills.json"));
        assert_eq!(args.page, 1);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.select.is_empty());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_full_options() {
        let cli = Cli::try_parse_from([
            "tally",
            "--verbose",
            "list",
            "bills.json",
            "--columns",
            "vendor:Vendor,amount",
            "--search",
            "acme",
            "--page",
            "3",
            "--page-size",
            "25",
            "--select",
            "12",
            "--select",
            "INV-7",
            "--format",
            "csv",
            "--action",
            "view",
            "--id",
            "12",
        ])
        .expect("valid args");
        assert!(cli.verbose);
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(args.page, 3);
        assert_eq!(args.page_size, Some(25));
        assert_eq!(args.select, vec!["12", "INV-7"]);
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.action.as_deref(), Some("view"));
    }

    #[test]
    fn test_invalid_list_args() {
        assert!(Cli::try_parse_from(["tally", "list", "b.json", "--page", "0"]).is_err());
        assert!(Cli::try_parse_from(["tally", "list", "b.json", "--action", "view"]).is_err());
        assert!(
            Cli::try_parse_from(["tally", "list", "b.json", "--select-all", "--all-records"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["tally", "list", "b.json", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_config_set() {
        let cli = Cli::try_parse_from([
            "tally",
            "config",
            "set",
            "--page-size",
            "20",
            "--status",
            "Void=gray",
        ])
        .expect("valid args");
        match cli.command {
            Commands::Config {
                command: ConfigCommands::Set {
                    page_size, status, ..
                },
            } => {
                assert_eq!(page_size, Some(20));
                assert_eq!(status, vec!["Void=gray"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
