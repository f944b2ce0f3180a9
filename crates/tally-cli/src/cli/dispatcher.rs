use crate::cli::command_handlers::{ConfigHandler, ListHandler};
use crate::cli::main_types::Commands;
use std::path::PathBuf;
use tally_core::error::AppError;
use tally_core::storage::config::Config;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn dispatch(&mut self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Config { command } => {
                log::debug!("dispatching config command {:?}", command);
                ConfigHandler::new().handle(command, &mut self.config, self.config_path.clone())
            }
            Commands::List(args) => {
                log::debug!("listing records from {}", args.file.display());
                ListHandler::new().handle(args, &self.config)
            }
        }
    }
}
