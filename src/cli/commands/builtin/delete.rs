use std::sync::Arc;

use async_trait::async_trait;
use clap::ArgMatches;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_command,
        types::{ArgKind, CommandArg, CommandMetadata, option_id},
    },
    config_store::{Commander, ConfigStore},
};

const NAME_ARG: &str = "name";

/// Command for removing an entry from the registry.
///
/// # Example Usage
///
/// ```bash
/// lotta delete --name greet
/// ```
pub struct DeleteCommand {
    config_store: Arc<ConfigStore>,
}

impl DeleteCommand {
    /// Creates a new DeleteCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }
}

#[async_trait]
impl Command for DeleteCommand {
    /// Deletes the named entry and persists the registry.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If `--name` is missing
    /// * `CliError::Config` - If the name is unknown or the file cannot be written
    async fn execute(&self, args: &ArgMatches) -> CommandResult {
        let name = args
            .get_one::<String>(&option_id(NAME_ARG))
            .ok_or_else(|| {
                CliError::InvalidArguments("Expected --name for 'delete' command".to_string())
            })?;

        self.config_store.delete_command(name)?;

        Ok(format!("Deleted command '{}'", format_command(name)))
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "delete".to_string(),
            description: "Delete a command from the palette".to_string(),
            args: vec![CommandArg {
                name: NAME_ARG.to_string(),
                description: "Name of the command to delete".to_string(),
                required: true,
                kind: ArgKind::Option { default: None },
            }],
            examples: vec!["lotta delete --name greet".to_string()],
        }
    }
}
