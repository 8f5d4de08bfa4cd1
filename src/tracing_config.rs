use std::{env, error::Error, io};

use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{Builder, Rotation},
};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::{ConfigPaths, env_key};

const DAYS_TO_KEEP: usize = 7;
const DEFAULT_STDERR_LEVEL: &str = "warn";
const FILE_LEVEL: &str = "info";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing for the application
///
/// Logs go to stderr, filtered by `LOTTA_LOG` (EnvFilter syntax, `warn` by
/// default) and formatted per `LOTTA_LOG_FORMAT` (`json`, `pretty`, otherwise
/// compact). Stdout is left to the launched commands.
///
/// A daily rolling file under `~/.lotta/logs` additionally records `info` and
/// above. When that directory cannot be created the file layer is skipped.
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the lifetime of the process.
///
/// # Errors
/// Returns error if tracing subscriber initialization fails
pub fn init() -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    let mut layers: Vec<BoxedLayer> = vec![stderr_layer()];

    let mut file_error = None;
    let guard = match file_writer() {
        Ok((writer, guard)) => {
            layers.push(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(EnvFilter::new(FILE_LEVEL))
                    .boxed(),
            );
            Some(guard)
        }
        Err(e) => {
            file_error = Some(e.to_string());
            None
        }
    };

    tracing_subscriber::registry().with(layers).try_init()?;

    if let Some(e) = file_error {
        tracing::debug!("File logging disabled: {e}");
    }

    Ok(guard)
}

fn stderr_layer() -> BoxedLayer {
    let filter = EnvFilter::try_from_env(env_key("log"))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_STDERR_LEVEL));
    let format = env::var(env_key("log-format")).unwrap_or_default();

    match format.as_str() {
        "json" => fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
        "pretty" => fmt::layer()
            .pretty()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
        _ => fmt::layer()
            .compact()
            .with_target(false)
            .with_level(true)
            .with_writer(io::stderr)
            .with_filter(filter)
            .boxed(),
    }
}

fn file_writer() -> Result<(NonBlocking, WorkerGuard), Box<dyn Error>> {
    let log_dir = ConfigPaths::ensure_log_dir()?;

    let file_appender = Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("lotta")
        .filename_suffix("log")
        .build(&log_dir)?;

    Ok(tracing_appender::non_blocking(file_appender))
}
