use std::{collections::BTreeMap, ffi::OsString, sync::Arc};

use clap::{Arg, ArgAction, builder::PossibleValuesParser};
use tracing::{debug, instrument};

use crate::config_store::ConfigStore;

use super::{
    CliError, Command, CommandResult,
    commands::{builtin, palette},
    types::{ArgKind, CommandArg, CommandMetadata},
};

/// Binary name used in usage lines and completion scripts.
pub const APP_NAME: &str = "lotta";

const ABOUT: &str = "Lotta Command Palette";
const LONG_ABOUT: &str = "Lotta Command Palette

Save the commands you keep retyping and run them by name. Every saved command
becomes a sub-command of lotta; its flags fill the {{.flag}} placeholders of
the stored command line.";

/// Registry of every sub-command lotta exposes.
///
/// Built-ins (`add`, `delete`, `completion`) are registered first; each entry
/// of the persisted registry then becomes its own sub-command. The clap tree
/// is derived from the registered commands' metadata, so help, usage errors,
/// and shell completion all follow the registry.
///
/// ```text
/// lotta
/// ├── add
/// ├── completion <shell>
/// ├── delete --name <name>
/// ├── greet --msg <msg> [args]...
/// └── ...
/// ```
pub struct CommandRegistry {
    commands: BTreeMap<String, Box<dyn Command>>,
    config_store: Arc<ConfigStore>,
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new(config_store: Arc<ConfigStore>) -> Self {
        Self {
            commands: BTreeMap::new(),
            config_store,
        }
    }

    /// Creates a registry with the built-ins and every persisted command.
    pub fn build(config_store: Arc<ConfigStore>) -> Self {
        let mut registry = Self::new(config_store);
        registry.register_all_commands();
        registry
    }

    /// Registers a command under the name from its metadata.
    ///
    /// A command with the same name is replaced.
    pub fn register_command(&mut self, command: Box<dyn Command>) {
        self.commands.insert(command.metadata().name, command);
    }

    /// Returns true if a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Lists registered command names alphabetically.
    pub fn list_commands(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    /// Builds the clap definition of the whole command line.
    pub fn clap_command(&self) -> clap::Command {
        let root = clap::Command::new(APP_NAME)
            .version(env!("CARGO_PKG_VERSION"))
            .about(ABOUT)
            .long_about(LONG_ABOUT)
            .subcommand_required(true)
            .arg_required_else_help(true);

        self.commands
            .values()
            .map(|command| build_subcommand(&command.metadata()))
            .fold(root, clap::Command::subcommand)
    }

    /// Parses `argv` (including the binary name) and runs the selected command.
    ///
    /// # Errors
    ///
    /// * `CliError::Usage` - If parsing fails or help/version was requested
    /// * `CliError::CommandNotFound` - If the parsed sub-command is not registered
    ///
    /// Other errors are returned by the command's execute method.
    #[instrument(skip_all)]
    pub async fn execute<I, T>(&self, argv: I) -> CommandResult
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.clap_command().try_get_matches_from(argv)?;

        let Some((name, sub_matches)) = matches.subcommand() else {
            return Err(CliError::InvalidArguments(
                "Expected a command to run".to_string(),
            ));
        };

        let command = self.commands.get(name).ok_or_else(|| {
            CliError::CommandNotFound(format!("Failed to find command '{name}'"))
        })?;

        debug!(command = name, "Dispatching command");
        command.execute(sub_matches).await
    }

    /// Registers the built-ins, then one command per persisted registry entry.
    pub fn register_all_commands(&mut self) {
        builtin::register_commands(self, self.config_store.clone());
        palette::register_commands(self, self.config_store.clone());
    }
}

fn build_subcommand(metadata: &CommandMetadata) -> clap::Command {
    let mut command = clap::Command::new(metadata.name.clone()).about(metadata.description.clone());

    if !metadata.examples.is_empty() {
        command = command.after_help(format!(
            "Examples:\n  {}",
            metadata.examples.join("\n  ")
        ));
    }

    metadata
        .args
        .iter()
        .map(build_arg)
        .fold(command, clap::Command::arg)
}

fn build_arg(arg: &CommandArg) -> Arg {
    let base = Arg::new(arg.id())
        .required(arg.required)
        .help(arg.description.clone());

    match &arg.kind {
        ArgKind::Option { default } => {
            let help = match default {
                Some(value) if !arg.required => {
                    format!("{} [default: {value}]", arg.description)
                }
                _ => arg.description.clone(),
            };
            base.long(arg.name.clone())
                .value_name(arg.name.to_uppercase())
                .action(ArgAction::Set)
                .help(help)
        }
        ArgKind::Positional { choices } if choices.is_empty() => {
            base.value_name(arg.name.to_uppercase())
        }
        ArgKind::Positional { choices } => base
            .value_name(arg.name.to_uppercase())
            .value_parser(PossibleValuesParser::new(choices.clone())),
        ArgKind::Passthrough => base
            .value_name(arg.name.to_uppercase())
            .num_args(0..)
            .action(ArgAction::Append)
            .trailing_var_arg(true)
            .allow_hyphen_values(true),
    }
}
