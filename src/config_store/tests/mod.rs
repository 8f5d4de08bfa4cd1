//! Unit tests for config_store module
//!
//! Each test works against its own temp directory; no shared HOME.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::config::{Command, ConfigError, Flag};
use crate::config_store::{Commander, ConfigStore};

struct Fixture {
    _dir: TempDir,
    store: ConfigStore,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let store = ConfigStore::load_from(dir.path().join(".lotta").join("config.json")).unwrap();
        Self { _dir: dir, store }
    }

    fn file_bytes(&self) -> Vec<u8> {
        fs::read(self.store.path()).unwrap()
    }

    fn reload(&self) -> ConfigStore {
        ConfigStore::load_from(self.store.path()).unwrap()
    }
}

fn command(exec: &str) -> Command {
    Command {
        description: format!("runs {exec}"),
        exec: exec.to_string(),
        flags: vec![],
    }
}

#[test]
fn first_run_creates_empty_registry() {
    let fixture = Fixture::new();

    assert!(fixture.store.path().exists());
    assert!(fixture.store.command_names().is_empty());
}

#[test]
fn add_command_persists_and_reloads() {
    let fixture = Fixture::new();
    let build = Command {
        description: "Build the project".to_string(),
        exec: "cargo build --profile {{.profile}}".to_string(),
        flags: vec![
            Flag {
                name: "profile".to_string(),
                value: "dev".to_string(),
                required: false,
            },
            Flag {
                name: "target".to_string(),
                value: String::new(),
                required: true,
            },
        ],
    };

    fixture.store.add_command("build", build.clone()).unwrap();

    let reloaded = fixture.reload();
    assert_eq!(reloaded.command("build"), Some(build));
    assert_eq!(reloaded.get_current(), fixture.store.get_current());
}

#[test]
fn add_command_trims_name_and_exec() {
    let fixture = Fixture::new();

    fixture.store.add_command("  logs ", command("  tail -f x.log ")).unwrap();

    let stored = fixture.reload().command("logs").unwrap();
    assert_eq!(stored.exec, "tail -f x.log");
}

#[test]
fn add_command_overwrites_existing_entry() {
    let fixture = Fixture::new();
    fixture.store.add_command("ls", command("ls")).unwrap();

    fixture.store.add_command("ls", command("ls -la")).unwrap();

    assert_eq!(fixture.store.command_names(), ["ls"]);
    assert_eq!(fixture.reload().command("ls").unwrap().exec, "ls -la");
}

#[test]
fn reserved_names_are_rejected_without_writing() {
    let fixture = Fixture::new();
    let before = fixture.file_bytes();

    for name in ["add", "help", "completion"] {
        let err = fixture.store.add_command(name, command("echo hi")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }), "{name}");
    }

    assert_eq!(fixture.file_bytes(), before);
    assert!(fixture.store.command_names().is_empty());
}

#[test]
fn blank_exec_is_rejected_without_writing() {
    let fixture = Fixture::new();
    let before = fixture.file_bytes();

    let err = fixture.store.add_command("build", command("   ")).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidCommand { .. }));
    assert_eq!(fixture.file_bytes(), before);
    assert!(fixture.store.command("build").is_none());
}

#[test]
fn delete_missing_command_leaves_file_untouched() {
    let fixture = Fixture::new();
    fixture.store.add_command("ls", command("ls")).unwrap();
    let before = fixture.file_bytes();

    let err = fixture.store.delete_command("nope").unwrap_err();

    assert!(matches!(err, ConfigError::NotFound(ref name) if name == "nope"));
    assert_eq!(fixture.file_bytes(), before);
}

#[test]
fn delete_command_removes_and_persists() {
    let fixture = Fixture::new();
    fixture.store.add_command("ls", command("ls")).unwrap();
    fixture.store.add_command("pwd", command("pwd")).unwrap();

    fixture.store.delete_command("ls").unwrap();

    assert_eq!(fixture.store.command_names(), ["pwd"]);
    assert_eq!(fixture.reload().command_names(), ["pwd"]);
}

#[test]
fn clones_share_the_registry() {
    let fixture = Fixture::new();
    let clone = fixture.store.clone();

    clone.add_command("ls", command("ls")).unwrap();

    assert!(fixture.store.command("ls").is_some());
}

#[cfg(unix)]
#[test]
fn failed_write_keeps_memory_unchanged() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let dir = fixture.store.path().parent().unwrap().to_path_buf();
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o500)).unwrap();

    let probe = dir.join("probe");
    let writable = fs::write(&probe, "x").is_ok();
    let result = fixture.store.add_command("ls", command("ls"));
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o700)).unwrap();

    if writable {
        // Running as root; permissions are not enforced.
        let _ = fs::remove_file(probe);
        return;
    }
    assert!(matches!(result, Err(ConfigError::Write { .. })));
    assert!(fixture.store.command("ls").is_none());
}

#[test]
fn save_rewrites_current_state() {
    let fixture = Fixture::new();
    fixture.store.add_command("ls", command("ls")).unwrap();
    fs::write(fixture.store.path(), "{}").unwrap();

    fixture.store.save().unwrap();

    assert_eq!(fixture.reload().command_names(), ["ls"]);
}
