use crate::config::{Command, ConfigError};

/// Mutating operations on the command registry.
pub trait Commander: Send + Sync {
    /// Adds `command` under `name`, replacing any existing entry, and persists.
    ///
    /// The name is trimmed before use.
    ///
    /// # Errors
    /// * `ConfigError::InvalidName` - If the name is empty or reserved
    /// * `ConfigError::InvalidCommand` - If the command fails validation
    /// * `ConfigError::Write` - If the registry cannot be persisted
    fn add_command(&self, name: &str, command: Command) -> Result<(), ConfigError>;

    /// Removes the entry under `name` and persists.
    ///
    /// # Errors
    /// * `ConfigError::NotFound` - If no entry exists; nothing is written
    /// * `ConfigError::Write` - If the registry cannot be persisted
    fn delete_command(&self, name: &str) -> Result<(), ConfigError>;
}
