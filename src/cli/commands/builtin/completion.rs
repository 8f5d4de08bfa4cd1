use std::sync::Arc;

use async_trait::async_trait;
use clap::{ArgMatches, ValueEnum};
use clap_complete::{Shell, generate};

use crate::{
    cli::{
        APP_NAME, CliError, Command, CommandRegistry, CommandResult,
        types::{ArgKind, CommandArg, CommandMetadata},
    },
    config_store::ConfigStore,
};

const SHELL_ARG: &str = "shell";

/// Command that prints a shell completion script for every registered command.
///
/// # Example Usage
///
/// ```bash
/// lotta completion bash > ~/.local/share/bash-completion/completions/lotta
/// lotta completion zsh > "${fpath[1]}/_lotta"
/// ```
pub struct CompletionCommand {
    config_store: Arc<ConfigStore>,
}

impl CompletionCommand {
    /// Creates a new CompletionCommand with the provided config store.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self { config_store }
    }

    fn shell_names() -> Vec<String> {
        Shell::value_variants()
            .iter()
            .filter_map(ValueEnum::to_possible_value)
            .map(|value| value.get_name().to_string())
            .collect()
    }
}

#[async_trait]
impl Command for CompletionCommand {
    /// Generates the completion script for the requested shell.
    ///
    /// # Errors
    ///
    /// * `CliError::InvalidArguments` - If the shell is missing or unsupported
    async fn execute(&self, args: &ArgMatches) -> CommandResult {
        let shell: Shell = args
            .get_one::<String>(SHELL_ARG)
            .ok_or_else(|| {
                CliError::InvalidArguments("Expected <shell> for 'completion' command".to_string())
            })?
            .parse()
            .map_err(CliError::InvalidArguments)?;

        let mut cli = CommandRegistry::build(self.config_store.clone()).clap_command();
        let mut script = Vec::new();
        generate(shell, &mut cli, APP_NAME, &mut script);

        Ok(String::from_utf8_lossy(&script).into_owned())
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "completion".to_string(),
            description: "Generate a shell completion script".to_string(),
            args: vec![CommandArg {
                name: SHELL_ARG.to_string(),
                description: "Target shell".to_string(),
                required: true,
                kind: ArgKind::Positional {
                    choices: Self::shell_names(),
                },
            }],
            examples: vec![
                "lotta completion bash".to_string(),
                "lotta completion fish".to_string(),
            ],
        }
    }
}
