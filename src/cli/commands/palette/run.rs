use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use async_trait::async_trait;
use clap::ArgMatches;
use tracing::warn;

use crate::{
    cli::{
        CliError, Command, CommandResult,
        formatting::format_running,
        types::{ArgKind, CommandArg, CommandMetadata, option_id},
    },
    config::{self, Flag},
    config_store::ConfigStore,
    executor::{self, ProcessSpec, RunOutcome},
};

/// Positional that collects everything after the flags.
pub(crate) const PASSTHROUGH_ARG: &str = "args";

/// A registered command exposed as a sub-command.
///
/// Each flag becomes `--<flag>`; values given on the command line replace the
/// stored ones for this run only. Remaining arguments are appended to the
/// rendered command line.
///
/// # Example Usage
///
/// ```bash
/// lotta greet --msg bye ! now
/// ```
pub struct PaletteCommand {
    name: String,
    command: config::Command,
    cli_flags: Vec<Flag>,
    config_store: Arc<ConfigStore>,
}

impl PaletteCommand {
    /// Creates a sub-command for the registry entry `name`.
    ///
    /// Flags that cannot be spelled as `--<flag>`, and repeats of an earlier
    /// flag, are left out of the command line with a warning. Their stored
    /// values still reach the template.
    pub fn new(name: String, command: config::Command, config_store: Arc<ConfigStore>) -> Self {
        let mut seen = HashSet::new();
        let cli_flags = command
            .flags
            .iter()
            .filter(|flag| {
                let usable = config::Command::is_cli_flag_name(&flag.name)
                    && seen.insert(flag.name.clone());
                if !usable {
                    warn!(command = %name, flag = %flag.name, "Skipping unusable flag");
                }
                usable
            })
            .cloned()
            .collect();

        Self {
            name,
            command,
            cli_flags,
            config_store,
        }
    }

    fn overrides(&self, args: &ArgMatches) -> HashMap<String, String> {
        self.cli_flags
            .iter()
            .filter_map(|flag| {
                args.get_one::<String>(&option_id(&flag.name))
                    .map(|value| (flag.name.clone(), value.clone()))
            })
            .collect()
    }
}

#[async_trait]
impl Command for PaletteCommand {
    /// Renders the entry's template, launches it and waits for it.
    ///
    /// # Errors
    ///
    /// * `CliError::Exec` - If the entry cannot be resolved or launched
    /// * `CliError::ProcessFailed` - If the program exits unsuccessfully
    /// * `CliError::Interrupted` - If SIGINT/SIGTERM arrived and the program was killed
    async fn execute(&self, args: &ArgMatches) -> CommandResult {
        let extra_args: Vec<String> = args
            .get_many::<String>(PASSTHROUGH_ARG)
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let spec = ProcessSpec::resolve_with_overrides(
            &self.config_store.get_current(),
            &self.name,
            &self.overrides(args),
            &extra_args,
        )?;

        eprintln!("{}", format_running(&spec.display_line()));

        match executor::run(&spec).await? {
            RunOutcome::Exited(status) if status.success() => Ok(String::new()),
            RunOutcome::Exited(status) => Err(CliError::ProcessFailed {
                program: spec.program,
                status,
            }),
            RunOutcome::Interrupted(signal) => Err(CliError::Interrupted {
                program: spec.program,
                signal,
            }),
        }
    }

    fn metadata(&self) -> CommandMetadata {
        let mut args: Vec<CommandArg> = self
            .cli_flags
            .iter()
            .map(|flag| CommandArg {
                name: flag.name.clone(),
                description: format!("Value for {{{{.{}}}}}", flag.name),
                required: flag.required,
                kind: ArgKind::Option {
                    default: Some(flag.value.clone()).filter(|value| !value.is_empty()),
                },
            })
            .collect();

        args.push(CommandArg {
            name: PASSTHROUGH_ARG.to_string(),
            description: "Extra arguments appended to the command".to_string(),
            required: false,
            kind: ArgKind::Passthrough,
        });

        let description = if self.command.description.is_empty() {
            self.command.exec.clone()
        } else {
            self.command.description.clone()
        };

        CommandMetadata {
            name: self.name.clone(),
            description,
            args,
            examples: vec![],
        }
    }
}
