//! Command registry schema, validation, and on-disk persistence.
//!
//! The registry is a JSON document at `$HOME/.lotta/config.json`. Loading creates
//! it on first run; every save rewrites it in full through a temp file and rename.

mod command;
mod error;
mod loading;
mod paths;


use std::collections::BTreeMap;

pub use command::{Command, Flag, RESERVED_NAMES, validate_name};
pub use error::ConfigError;
pub use paths::{ConfigPaths, ENV_PREFIX, env_key};

use command::null_as_default;
use serde::{Deserialize, Serialize};

/// The persisted registry plus process-wide execution settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Registered commands keyed by name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub commands: BTreeMap<String, Command>,

    /// Whether spawned commands inherit the parent environment.
    #[serde(rename = "useSystemEnv", default = "default_use_system_env")]
    pub use_system_env: bool,

    /// Extra environment entries appended for every spawned command.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            commands: BTreeMap::new(),
            use_system_env: default_use_system_env(),
            env: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Explicit environment entries for spawned commands.
    pub fn env_entries(&self) -> Vec<(String, String)> {
        self.env
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}

fn default_use_system_env() -> bool {
    true
}
