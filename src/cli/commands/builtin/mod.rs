//! Commands that manage the registry itself.
mod add;
mod completion;
mod delete;

use std::sync::Arc;

pub use add::AddCommand;
pub use completion::CompletionCommand;
pub use delete::DeleteCommand;

use crate::{cli::CommandRegistry, config_store::ConfigStore};

/// Registers the built-in commands with the command registry.
///
/// Built-ins are registered before the persisted commands so that an entry
/// with a built-in name can be detected and skipped.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Shared registry store for the commands
pub fn register_commands(registry: &mut CommandRegistry, config_store: Arc<ConfigStore>) {
    registry.register_command(Box::new(AddCommand::new(config_store.clone())));
    registry.register_command(Box::new(DeleteCommand::new(config_store.clone())));
    registry.register_command(Box::new(CompletionCommand::new(config_store)));
}
