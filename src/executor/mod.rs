//! Resolution and execution of registered commands.
//!
//! ## Files
//! - `template.rs`: `{{.flag}}` substitution into exec templates.
//! - `process_spec.rs`: registry lookup, rendering and splitting.
//! - `runner.rs`: spawn, merged wait/signal wake-up and forced kill.

mod error;
mod process_spec;
pub mod runner;
pub mod template;


pub use error::ExecError;
pub use process_spec::ProcessSpec;
pub use runner::{RunOutcome, ShutdownListener, ShutdownSignal, run, run_until};
pub use template::TemplateError;
