//! Interactive wizard for adding or updating a registry entry.
//!
//! Steps run in order: name → description → flags loop → exec. The flags loop
//! asks whether to add a flag, then collects its name, value, and whether it is
//! required, and asks again. Escape aborts without saving anything.
//!
//! Transition logic lives in [`WizardState::transition`] and rendering in
//! [`view::render`]; both are pure. Only `terminal.rs` touches the TTY.

mod state;
mod terminal;
/// Plain-text rendering of each wizard step.
pub mod view;

#[cfg(test)]
mod tests;

pub use state::{Choice, Effect, FlagStep, Step, TextInput, WizardEvent, WizardState};
pub use terminal::run;

use thiserror::Error;

/// How the wizard ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The command was saved under this name.
    Saved(String),
    /// The user aborted; nothing was written.
    Cancelled,
}

/// Errors raised by the terminal wizard.
#[derive(Error, Debug)]
pub enum WizardError {
    /// Reading input or drawing to the terminal failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
