use super::{Config, ConfigError, write_atomically};
use std::{fs, path::Path};
use tracing::info;

#[cfg(unix)]
const CONFIG_DIR_MODE: u32 = 0o700;

/// Creates the config directory and an empty registry file.
pub fn create_default_config_file(path: &Path) -> Result<Config, ConfigError> {
    if let Some(parent) = path.parent() {
        create_config_dir(parent).map_err(|e| ConfigError::Write {
            path: parent.to_path_buf(),
            details: format!("failed to create config directory: {e}"),
        })?;
    }

    let config = Config::default();
    write_atomically(path, config.to_json()?.as_bytes())?;

    info!("Created empty command registry at {}", path.display());
    Ok(config)
}

/// Creates `dir` and any missing parents, private to the user on unix.
#[cfg(unix)]
pub(crate) fn create_config_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    fs::DirBuilder::new()
        .recursive(true)
        .mode(CONFIG_DIR_MODE)
        .create(dir)
}

#[cfg(not(unix))]
pub(crate) fn create_config_dir(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)
}
