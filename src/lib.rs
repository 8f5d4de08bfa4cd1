//! Lotta - a personal command palette.
//!
//! Lotta keeps a small registry of named shell commands in
//! `$HOME/.lotta/config.json` and exposes every entry as a sub-command of its
//! own. The main features include:
//!
//! - Exec templates with `{{.flag}}` placeholders filled from stored or CLI values
//! - An interactive terminal wizard for adding commands
//! - Child processes that inherit stdio and are killed on SIGINT/SIGTERM
//! - Shell completion generated from the registry
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lotta::{config_store::ConfigStore, executor::ProcessSpec};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ConfigStore::load()?;
//! let spec = ProcessSpec::resolve(&store.get_current(), "greet", &["!".to_string()])?;
//! let outcome = lotta::executor::run(&spec).await?;
//! println!("exit code: {}", outcome.exit_code());
//! # Ok(())
//! # }
//! ```

/// Registry schema, validation, and file persistence.
pub mod config;

/// Shared in-memory registry bound to its backing file.
pub mod config_store;

/// Exec template rendering and child process lifecycle.
pub mod executor;

/// Interactive terminal wizard for adding commands.
pub mod wizard;

/// Command-line interface built from the registry.
pub mod cli;

/// Logging initialisation.
pub mod tracing_config;
