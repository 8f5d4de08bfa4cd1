mod file_creation;
mod persist;

use super::{Config, ConfigError};
pub(crate) use file_creation::create_config_dir;
use file_creation::create_default_config_file;
use persist::write_atomically;
use std::{fs, io::ErrorKind, path::Path};
use tracing::{debug, instrument};

impl Config {
    /// Loads the registry from `path`, creating it on first run.
    ///
    /// A missing file is bootstrapped with an empty registry: the parent directory
    /// is created with mode 0700 and the file with mode 0644.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read (`ConfigError::Read`)
    /// - The file is not a valid registry document (`ConfigError::Parse`)
    /// - The first-run bootstrap cannot write the file (`ConfigError::Write`)
    #[instrument]
    pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return create_default_config_file(path);
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                });
            }
        };

        let config: Config = serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        debug!(commands = config.commands.len(), "Loaded command registry");
        Ok(config)
    }

    /// Serializes the full registry and replaces the file at `path`.
    ///
    /// The document is written to a sibling temp file and renamed into place, so
    /// readers never observe a half-written registry.
    ///
    /// # Errors
    /// Returns `ConfigError::Serialization` or `ConfigError::Write`.
    #[instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_json()?;
        write_atomically(path, content.as_bytes())
    }

    pub(crate) fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialization {
            details: e.to_string(),
        })
    }
}
