//! Command-line interface for the command palette.
//!
//! Provides the built-in commands for managing the registry and turns each
//! registered command into a sub-command of its own. The clap tree, help
//! text, and shell completions are all generated from command metadata.

mod commands;
pub mod formatting;
mod registry;
mod service;
mod types;


pub use commands::{
    builtin::{AddCommand, CompletionCommand, DeleteCommand},
    palette::PaletteCommand,
};
pub use registry::{APP_NAME, CommandRegistry};
pub use service::CliService;
pub use types::{
    ArgKind, CliError, Command, CommandArg, CommandMetadata, CommandResult, option_id,
};
