use std::io;

use thiserror::Error;

use super::TemplateError;

/// Errors raised while resolving or running a registered command.
#[derive(Error, Debug)]
pub enum ExecError {
    /// No command is registered under the name.
    #[error("no such command: {0}")]
    NotFound(String),

    /// The exec template could not be rendered.
    #[error("failed to render exec template of '{command}': {source}")]
    Template {
        /// Registered command name
        command: String,
        /// Underlying render error
        #[source]
        source: TemplateError,
    },

    /// The rendered exec string contained no program.
    #[error("command '{0}' renders to an empty command line")]
    NoExecutable(String),

    /// The child process could not be started.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        #[source]
        source: io::Error,
    },

    /// Waiting on the child process failed.
    #[error("failed to wait for child process: {0}")]
    Wait(#[source] io::Error),

    /// Shutdown signal handlers could not be installed.
    #[error("failed to install signal handlers: {0}")]
    Signal(#[source] io::Error),
}
