use std::{env, path::PathBuf};

use super::{ConfigError, loading::create_config_dir};

/// Namespace for environment variables read by lotta.
pub const ENV_PREFIX: &str = "LOTTA";

const CONFIG_DIR_NAME: &str = ".lotta";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_DIR_NAME: &str = "logs";

/// Builds the namespaced environment variable for a setting or flag name.
///
/// ```
/// assert_eq!(lotta::config::env_key("log-format"), "LOTTA_LOG_FORMAT");
/// ```
pub fn env_key(name: &str) -> String {
    format!("{ENV_PREFIX}_{}", name.replace('-', "_").to_uppercase())
}

/// Utility struct for locating lotta's files.
///
/// Everything lives under `$HOME/.lotta`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the user's home directory.
    ///
    /// # Errors
    /// Returns `ConfigError::HomeDirUnavailable` if `HOME` is unset or empty.
    pub fn home_dir() -> Result<PathBuf, ConfigError> {
        match env::var("HOME") {
            Ok(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            Ok(_) => Err(ConfigError::HomeDirUnavailable(
                "HOME environment variable is empty".to_string(),
            )),
            Err(e) => Err(ConfigError::HomeDirUnavailable(e.to_string())),
        }
    }

    /// Returns `$HOME/.lotta`.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be resolved.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        Ok(Self::home_dir()?.join(CONFIG_DIR_NAME))
    }

    /// Returns the path of the command registry file.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be resolved.
    pub fn main_config() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the log directory, without creating it.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be resolved.
    pub fn log_dir() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(LOG_DIR_NAME))
    }

    /// Returns the log directory, creating it (and `$HOME/.lotta`) if needed.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be resolved or the
    /// directory cannot be created.
    pub fn ensure_log_dir() -> Result<PathBuf, ConfigError> {
        let dir = Self::log_dir()?;
        create_config_dir(&dir).map_err(|e| ConfigError::Write {
            path: dir.clone(),
            details: format!("failed to create log directory: {e}"),
        })?;
        Ok(dir)
    }
}
