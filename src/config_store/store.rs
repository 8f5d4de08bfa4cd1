use std::{
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockWriteGuard},
};

use tracing::{info, instrument};

use crate::config::{Command, Config, ConfigError, ConfigPaths, validate_name};

use super::Commander;

/// A thread-safe handle on the command registry and the file it was loaded from.
///
/// Clones share the same registry. Every mutation writes the full registry to disk
/// before it becomes visible in memory, so a failed save leaves both unchanged.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    config: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Loads the registry from `$HOME/.lotta/config.json`, creating it if absent.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be resolved or the file cannot
    /// be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(ConfigPaths::main_config()?)
    }

    /// Loads the registry from an explicit path, creating it if absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or created.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let config = Config::load_or_create(&path)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            path,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a clone of the current registry, handling poisoned locks gracefully.
    pub fn get_current(&self) -> Config {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Looks up a single registered command.
    pub fn command(&self, name: &str) -> Option<Command> {
        self.get_current().commands.get(name).cloned()
    }

    /// Registered command names in sorted order.
    pub fn command_names(&self) -> Vec<String> {
        self.get_current().commands.keys().cloned().collect()
    }

    /// Writes the current registry to disk.
    ///
    /// # Errors
    /// Returns `ConfigError::Serialization` or `ConfigError::Write`.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.get_current().write_to(&self.path)
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<'_, Config>, ConfigError> {
        self.config.write().map_err(|_| ConfigError::LockPoisoned)
    }

    fn commit(&self, guard: &mut Config, updated: Config) -> Result<(), ConfigError> {
        updated.write_to(&self.path)?;
        *guard = updated;
        Ok(())
    }
}

impl Commander for ConfigStore {
    #[instrument(skip(self, command), fields(path = %self.path.display()))]
    fn add_command(&self, name: &str, mut command: Command) -> Result<(), ConfigError> {
        let name = validate_name(name)?;
        command.validate()?;

        let mut guard = self.write_lock()?;
        let mut updated = guard.clone();
        let replaced = updated.commands.insert(name.clone(), command).is_some();
        self.commit(&mut guard, updated)?;

        if replaced {
            info!(command = %name, "Updated command");
        } else {
            info!(command = %name, "Added command");
        }
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn delete_command(&self, name: &str) -> Result<(), ConfigError> {
        let mut guard = self.write_lock()?;
        if !guard.commands.contains_key(name) {
            return Err(ConfigError::NotFound(name.to_string()));
        }

        let mut updated = guard.clone();
        updated.commands.remove(name);
        self.commit(&mut guard, updated)?;

        info!(command = %name, "Deleted command");
        Ok(())
    }
}
