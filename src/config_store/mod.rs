//! Shared command registry bound to its backing file.
//!
//! `ConfigStore` owns the loaded registry for the lifetime of one invocation and
//! persists it on every mutation. Mutations go through the [`Commander`] trait so
//! the wizard and CLI handlers can be exercised against test doubles.

mod commander;
mod store;

#[cfg(test)]
mod tests;

pub use commander::Commander;
pub use store::ConfigStore;
