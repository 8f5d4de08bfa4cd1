//! Lotta entry point.
//!
//! Loads the command registry, builds the command line from it and runs the
//! selected command. Any failure exits with status 1.

use std::{env, process::ExitCode};

use lotta::{
    cli::{CliService, formatting::format_error},
    config_store::ConfigStore,
    tracing_config,
};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    let _log_guard = match tracing_config::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", format_error(&format!("Failed to initialise logging: {e}")));
            None
        }
    };

    let config_store = match ConfigStore::load() {
        Ok(store) => store,
        Err(e) => {
            info!("Failed to load command registry: {e}");
            eprintln!("{}", format_error(&format!("Error: {e}")));
            return ExitCode::FAILURE;
        }
    };

    CliService::new(config_store).run(env::args_os()).await
}
