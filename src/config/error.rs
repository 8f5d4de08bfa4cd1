use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating, or persisting the command registry.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The user's home directory could not be determined.
    #[error("failed to resolve home directory: {0}")]
    HomeDirUnavailable(String),

    /// The config file or its directory could not be read.
    #[error("failed to read config '{path}': {details}")]
    Read {
        /// File that failed to read
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The config file exists but is not a valid registry document.
    #[error("failed to parse config '{path}': {details}")]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Parser error details
        details: String,
    },

    /// Writing the config file failed (permissions, disk full, ...).
    #[error("failed to write config '{path}': {details}")]
    Write {
        /// File that failed to write
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// The in-memory registry could not be serialized.
    #[error("failed to serialize config: {details}")]
    Serialization {
        /// Serializer error details
        details: String,
    },

    /// A command name was empty or reserved.
    #[error("invalid command name '{name}': {reason}")]
    InvalidName {
        /// The offending name, as supplied
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// A command definition failed validation.
    #[error("invalid command: {reason}")]
    InvalidCommand {
        /// Why the command was rejected
        reason: String,
    },

    /// No command is registered under the given name.
    #[error("no such command: {0}")]
    NotFound(String),

    /// Another thread panicked while holding the registry lock.
    #[error("config registry lock poisoned")]
    LockPoisoned,
}

impl ConfigError {
    /// Returns true for errors caused by rejected user input rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidName { .. } | ConfigError::InvalidCommand { .. }
        )
    }
}
