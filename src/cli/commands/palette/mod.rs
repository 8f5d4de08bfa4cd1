//! Sub-commands generated from the persisted registry.
mod run;

use std::sync::Arc;

pub use run::PaletteCommand;
use tracing::warn;

use crate::{
    cli::CommandRegistry,
    config::RESERVED_NAMES,
    config_store::ConfigStore,
};

/// Registers one sub-command per registry entry.
///
/// Entries whose name is reserved or already taken by a built-in are skipped
/// with a warning; they stay in the file untouched.
///
/// # Arguments
///
/// * `registry` - Mutable reference to the command registry
/// * `config_store` - Shared registry store for the commands
pub fn register_commands(registry: &mut CommandRegistry, config_store: Arc<ConfigStore>) {
    for (name, command) in config_store.get_current().commands {
        if RESERVED_NAMES.contains(&name.as_str()) || registry.contains(&name) {
            warn!(command = %name, "Skipping registered command shadowed by a built-in");
            continue;
        }

        registry.register_command(Box::new(PaletteCommand::new(
            name,
            command,
            config_store.clone(),
        )));
    }
}
