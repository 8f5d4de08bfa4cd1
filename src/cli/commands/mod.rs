//! Built-in and registry-backed sub-commands.
pub mod builtin;
pub mod palette;
