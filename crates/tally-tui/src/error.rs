//! Error types for tally-tui.

use std::io;
use tally_core::AppError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuiError {
    /// Terminal I/O error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// Loading or paging the record file failed.
    #[error(transparent)]
    Data(#[from] AppError),

    /// The log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(String),
}

pub type TuiResult<T> = Result<T, TuiError>;

impl TuiError {
    /// Hint shown after the terminal has been restored.
    pub fn hint(&self) -> Option<String> {
        match self {
            TuiError::Data(err) => err.troubleshooting_hint(),
            TuiError::Terminal(_) => Some("run tally-tui from an interactive terminal".to_string()),
            TuiError::Logging(_) => None,
        }
    }
}
