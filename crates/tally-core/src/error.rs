use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("TableError: {0}")]
    Table(#[from] TableError),
    #[error("DataError: {0}")]
    Data(#[from] DataError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("DisplayError: {0}")]
    Display(#[from] DisplayError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Unknown view preset: {name}")]
    UnknownView { name: String, available: Vec<String> },
}

/// Invalid descriptors handed to the record table.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    #[error("Page size must be greater than 0")]
    ZeroPageSize,
    #[error("Page must be 1 or greater")]
    ZeroPage,
    #[error("Page {page} is beyond the last page {total_pages}")]
    PageOutOfRange { page: usize, total_pages: usize },
    #[error("Table mode needs at least one column")]
    NoColumns,
    #[error("Column '{label}' has neither a key nor a renderer")]
    UnboundColumn { label: String },
    #[error("Invalid column spec '{spec}'")]
    InvalidColumnSpec { spec: String },
}

/// Problems with record data supplied by the caller.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Record at position {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("Record at position {index} has no usable 'id' field")]
    MissingId { index: usize },
    #[error("Duplicate record id {id}")]
    DuplicateId { id: String },
    #[error("Envelope has no 'data' object")]
    MissingData,
    #[error("Envelope has no record array named '{entity}'")]
    MissingEntity { entity: String },
    #[error("Envelope holds several record arrays ({candidates}); pick one explicitly")]
    AmbiguousEntity { candidates: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
    #[error("Invalid configuration value for '{field}': {value}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Table formatting failed: {0}")]
    TableFormat(String),
    #[error("Export failed: {0}")]
    Export(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            ErrorSeverity::Critical => "🚨",
            ErrorSeverity::High => "❌",
            ErrorSeverity::Medium => "⚠️",
            ErrorSeverity::Low => "ℹ️",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Table(_) => ErrorSeverity::Medium,
            AppError::Data(data_error) => match data_error {
                DataError::Json(_) => ErrorSeverity::High,
                _ => ErrorSeverity::Medium,
            },
            AppError::Config(_) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
            AppError::Display(_) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Data(DataError::AmbiguousEntity { .. }) => {
                Some("pass --entity <name> to choose the record array".to_string())
            }
            AppError::Data(DataError::MissingId { .. }) => {
                Some("every record needs a string or integer 'id' field".to_string())
            }
            AppError::Table(TableError::PageOutOfRange { total_pages, .. }) => {
                Some(format!("choose a page between 1 and {}", total_pages))
            }
            AppError::Cli(CliError::UnknownView { available, .. }) if !available.is_empty() => {
                Some(format!("available views: {}", available.join(", ")))
            }
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("'tally config path' shows which file is being read".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_error_display() {
        let err = TableError::PageOutOfRange {
            page: 7,
            total_pages: 5,
        };
        assert_eq!(format!("{}", err), "Page 7 is beyond the last page 5");
        assert_eq!(
            format!("{}", TableError::ZeroPageSize),
            "Page size must be greater than 0"
        );
    }

    #[test]
    fn test_app_error_wraps_with_prefix() {
        let app_err = AppError::from(DataError::DuplicateId {
            id: "42".to_string(),
        });
        assert_eq!(format!("{}", app_err), "DataError: Duplicate record id 42");
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let app_err = AppError::Config(ConfigError::InvalidValue {
            field: "page_size".to_string(),
            value: "0".to_string(),
            reason: "must be positive".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(app_err.severity().emoji(), "❌");
    }

    #[test]
    fn test_troubleshooting_hints() {
        let app_err = AppError::Table(TableError::PageOutOfRange {
            page: 9,
            total_pages: 3,
        });
        assert_eq!(
            app_err.troubleshooting_hint(),
            Some("choose a page between 1 and 3".to_string())
        );

        let app_err = AppError::Cli(CliError::UnknownView {
            name: "bills".to_string(),
            available: vec!["invoices".to_string(), "vendors".to_string()],
        });
        assert_eq!(
            app_err.troubleshooting_hint(),
            Some("available views: invoices, vendors".to_string())
        );

        let app_err = AppError::Display(DisplayError::TableFormat("x".to_string()));
        assert!(app_err.troubleshooting_hint().is_none());
    }
}
