use std::{io, sync::Arc};

use async_trait::async_trait;
use clap::ArgMatches;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_command,
        types::CommandMetadata,
    },
    config_store::ConfigStore,
    wizard::{self, WizardOutcome},
};

/// Command that opens the interactive wizard to add or update an entry.
///
/// # Example Usage
///
/// ```bash
/// lotta add
/// ```
pub struct AddCommand {
    config_store: Arc<ConfigStore>,
}

impl AddCommand {
    /// Creates a new AddCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

#[async_trait]
impl Command for AddCommand {
    /// Runs the wizard on a blocking thread until it saves or is aborted.
    ///
    /// # Errors
    ///
    /// * `CliError::Wizard` - If the terminal cannot be driven
    /// * `CliError::IoError` - If the wizard thread panicked
    async fn execute(&self, _args: &ArgMatches) -> CommandResult {
        let store = self.config_store.clone();
        let outcome = tokio::task::spawn_blocking(move || wizard::run(store.as_ref()))
            .await
            .map_err(|e| CliError::IoError(io::Error::other(e)))??;

        match outcome {
            WizardOutcome::Saved(name) => {
                Ok(format!("Saved command '{}'", format_command(&name)))
            }
            WizardOutcome::Cancelled => Ok(String::new()),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "add".to_string(),
            description: "Add a new command to the palette".to_string(),
            args: vec![],
            examples: vec!["lotta add".to_string()],
        }
    }
}
