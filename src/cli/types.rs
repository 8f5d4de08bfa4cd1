use async_trait::async_trait;
use clap::ArgMatches;
use thiserror::Error;

use crate::{
    config::ConfigError,
    executor::{ExecError, ShutdownSignal},
    wizard::WizardError,
};

/// Errors that can occur during CLI command execution.
///
/// Every variant maps to process exit status 1, except a `Usage` error that
/// only carries help or version output.
#[derive(Error, Debug)]
pub enum CliError {
    /// A command was not found in the registry.
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    /// Invalid arguments were provided to a command.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Loading, validating, or persisting the registry failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Resolving or launching a registered command failed.
    #[error(transparent)]
    Exec(#[from] ExecError),

    /// The interactive wizard failed.
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// The launched program exited unsuccessfully.
    #[error("'{program}' exited with {status}")]
    ProcessFailed {
        /// Program that was launched
        program: String,
        /// Exit status as reported by the OS
        status: std::process::ExitStatus,
    },

    /// A termination signal arrived and the launched program was killed.
    #[error("'{program}' was killed after {signal}")]
    Interrupted {
        /// Program that was launched
        program: String,
        /// Signal received by lotta
        signal: ShutdownSignal,
    },

    /// Command-line parsing failed, or help/version output was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for command execution results.
///
/// Commands return the text to print on success.
pub type CommandResult = Result<String, CliError>;

/// How an argument appears on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgKind {
    /// `--name <value>`, with an optional default shown in help.
    Option {
        /// Stored default, shown in help only
        default: Option<String>,
    },

    /// A single positional value restricted to `choices` when non-empty.
    Positional {
        /// Accepted values
        choices: Vec<String>,
    },

    /// All remaining arguments, passed through verbatim.
    Passthrough,
}

/// Specification for a single command argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArg {
    /// The argument name; options use it as `--name`.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Whether the argument must be supplied.
    pub required: bool,

    /// How the argument is spelled on the command line.
    pub kind: ArgKind,
}

/// Complete metadata for a CLI command.
///
/// The registry builds the clap definition of the command from this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMetadata {
    /// The sub-command name.
    pub name: String,

    /// Brief description of what this command does.
    pub description: String,

    /// Arguments this command accepts.
    pub args: Vec<CommandArg>,

    /// Example usage strings to show in help text.
    pub examples: Vec<String>,
}

/// Trait defining the interface for all CLI commands.
///
/// Commands receive dependencies through their constructors and parsed
/// arguments through `execute`.
#[async_trait]
pub trait Command: Send + Sync {
    /// Executes the command with arguments already parsed against its metadata.
    ///
    /// # Errors
    ///
    /// Returns `CliError` for any execution failure.
    async fn execute(&self, args: &ArgMatches) -> CommandResult;

    /// Returns the complete metadata for this command.
    fn metadata(&self) -> CommandMetadata;
}

impl CommandArg {
    /// Identifier under which clap stores this argument's values.
    ///
    /// Options are keyed as `--name` so they never collide with positionals.
    pub fn id(&self) -> String {
        match self.kind {
            ArgKind::Option { .. } => option_id(&self.name),
            ArgKind::Positional { .. } | ArgKind::Passthrough => self.name.clone(),
        }
    }
}

/// Clap identifier of the `--name` option.
pub fn option_id(name: &str) -> String {
    format!("--{name}")
}
