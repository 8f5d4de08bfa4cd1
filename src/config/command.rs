use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::ConfigError;

/// Names that collide with built-in sub-commands and can never be registered.
pub const RESERVED_NAMES: [&str; 3] = ["add", "help", "completion"];

/// Flag name that clap claims on every sub-command.
const CLAP_HELP_FLAG: &str = "help";

/// A named parameter of a registered command.
///
/// `value` is the stored default substituted into the exec template; `required`
/// only controls whether the generated sub-command demands the flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Flag {
    /// Flag name, used both as `--<name>` and as the template key.
    pub name: String,

    /// Stored value substituted into the exec template.
    #[serde(default)]
    pub value: String,

    /// Whether callers must pass the flag explicitly.
    #[serde(default)]
    pub required: bool,
}

/// A registry entry: how to invoke an underlying program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Command {
    /// Short description shown in help output.
    #[serde(default)]
    pub description: String,

    /// Exec template, e.g. `docker logs -f {{.container}}`.
    pub exec: String,

    /// Flags in declaration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<Flag>,
}

impl Command {
    /// Normalizes and validates the command in place.
    ///
    /// Trims `exec` and every flag name.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidCommand` if `exec` is blank, or if a flag name is
    /// empty, duplicated, or `help`.
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.exec = self.exec.trim().to_string();
        if self.exec.is_empty() {
            return Err(ConfigError::InvalidCommand {
                reason: "exec can't be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for flag in &mut self.flags {
            flag.name = flag.name.trim().to_string();
            if flag.name.is_empty() {
                return Err(ConfigError::InvalidCommand {
                    reason: "flag name can't be empty".to_string(),
                });
            }
            if flag.name == CLAP_HELP_FLAG {
                return Err(ConfigError::InvalidCommand {
                    reason: format!("flag name '{CLAP_HELP_FLAG}' is reserved"),
                });
            }
            if !seen.insert(flag.name.clone()) {
                return Err(ConfigError::InvalidCommand {
                    reason: format!("duplicate flag '{}'", flag.name),
                });
            }
        }

        Ok(())
    }

    /// Maps each flag name to its stored value.
    pub fn flag_values(&self) -> HashMap<String, String> {
        self.flags
            .iter()
            .map(|flag| (flag.name.clone(), flag.value.clone()))
            .collect()
    }

    /// Returns true if `name` can be exposed as a `--name` CLI flag.
    pub fn is_cli_flag_name(name: &str) -> bool {
        !name.trim().is_empty() && name != CLAP_HELP_FLAG && !name.starts_with('-')
    }
}

/// Trims a command name and rejects empty or reserved names.
///
/// # Errors
/// Returns `ConfigError::InvalidName` when the trimmed name is empty or one of
/// [`RESERVED_NAMES`].
pub fn validate_name(name: &str) -> Result<String, ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason: "name can't be empty".to_string(),
        });
    }

    if RESERVED_NAMES.contains(&trimmed) {
        return Err(ConfigError::InvalidName {
            name: name.to_string(),
            reason: format!("'{trimmed}' is reserved"),
        });
    }

    Ok(trimmed.to_string())
}

/// Reads JSON `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
