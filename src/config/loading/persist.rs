use super::ConfigError;
use std::{
    ffi::OsString,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

#[cfg(unix)]
const CONFIG_FILE_MODE: u32 = 0o644;

/// Writes `content` to a sibling temp file, syncs it, and renames it over `path`.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<(), ConfigError> {
    let tmp_path = temp_path(path);
    let write_err = |e: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        details: e.to_string(),
    };

    let result = (|| {
        let mut file = open_options().open(&tmp_path)?;
        file.write_all(content)?;
        file.sync_all()?;
        fs::rename(&tmp_path, path)
    })();

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("config.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(CONFIG_FILE_MODE);
    }

    options
}
