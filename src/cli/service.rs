use std::{ffi::OsString, process::ExitCode, sync::Arc};

use tracing::info;

use crate::config_store::ConfigStore;

use super::{CliError, CommandRegistry, CommandResult, formatting::format_error};

/// High-level service for parsing and executing lotta's command line.
///
/// Owns the command registry and turns command results into process exit
/// codes: success (including help and version output) is 0, every failure
/// is 1.
pub struct CliService {
    registry: CommandRegistry,
}

impl CliService {
    /// Creates a new CLI service with the built-ins and every persisted
    /// command registered.
    ///
    /// # Arguments
    /// * `config_store` - Registry store shared by all commands
    pub fn new(config_store: ConfigStore) -> Self {
        let registry = CommandRegistry::build(Arc::new(config_store));

        CliService { registry }
    }

    /// Parses `argv` and executes the selected command.
    ///
    /// # Errors
    /// Returns the `CliError` produced by parsing or by the command itself.
    pub async fn execute<I, T>(&self, argv: I) -> CommandResult
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.registry.execute(argv).await
    }

    /// Executes `argv`, prints the outcome and maps it to an exit code.
    pub async fn run<I, T>(&self, argv: I) -> ExitCode
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.execute(argv).await {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output.trim_end());
                }
                ExitCode::SUCCESS
            }
            Err(CliError::Usage(e)) => {
                if e.print().is_err() {
                    eprintln!("{e}");
                }
                if e.use_stderr() {
                    ExitCode::FAILURE
                } else {
                    ExitCode::SUCCESS
                }
            }
            Err(e) => {
                info!("Command failed: {e}");
                eprintln!("{}", format_error(&format!("Error: {e}")));
                ExitCode::FAILURE
            }
        }
    }
}
