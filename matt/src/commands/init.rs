//! Init command implementation.
//!
//! Writes a `matt.toml` holding the default configuration.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::commands::common::{error_messages, output_messages};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{MattError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Overwrite an existing configuration file.
    pub force: bool,
    /// Directory to write the file into (default: current directory).
    pub path: Option<PathBuf>,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    /// Create a new InitCommand.
    pub fn new(args: InitArgs) -> Self {
        Self { args }
    }

    /// Execute the command, returning the path of the written file.
    pub fn run(&self) -> Result<PathBuf> {
        let target_path = self
            .args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        self.validate_directory(&target_path)?;
        let config_path = target_path.join(CONFIG_FILE_NAME);
        self.create_config_file(&config_path)?;

        info!("{} {}", output_messages::CREATED_FILE, config_path.display());
        Ok(config_path)
    }

    /// Validate that the target directory exists, creating it if needed.
    fn validate_directory(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            if self.args.verbose {
                info!("Creating directory: {}", path.display());
            }
            std::fs::create_dir_all(path)?;
            return Ok(());
        }

        if !path.is_dir() {
            return Err(MattError::Validation(format!(
                "{} {}",
                error_messages::TARGET_NOT_DIR,
                path.display()
            )));
        }

        Ok(())
    }

    /// Create the configuration file.
    fn create_config_file(&self, config_path: &Path) -> Result<()> {
        if config_path.exists() && !self.args.force {
            return Err(MattError::Validation(format!(
                "{} {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(config_path)
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "init"
    }
}

impl CommandDescription for InitCommand {
    fn description() -> &'static str {
        "Write a default matt.toml"
    }
}
