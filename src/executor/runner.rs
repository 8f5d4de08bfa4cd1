//! Child process launch and lifecycle.
//!
//! The invoking process waits on whichever happens first: the child exiting or a
//! termination signal arriving. A signal that wins while the child is still
//! running kills it. The child is spawned with kill-on-drop, so any other exit
//! path (cancellation, panic) reaps it as well.

use std::{fmt, future::Future, process::ExitStatus};

use tracing::{info, instrument, warn};

use super::{ExecError, ProcessSpec};

/// Termination signal received by the invoking process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    /// SIGINT / Ctrl-C
    Interrupt,
    /// SIGTERM
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "SIGINT"),
            ShutdownSignal::Terminate => write!(f, "SIGTERM"),
        }
    }
}

/// How a launched command finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The child exited on its own.
    Exited(ExitStatus),
    /// A termination signal arrived first and the child was killed.
    Interrupted(ShutdownSignal),
}

impl RunOutcome {
    /// Exit code for the invoking process: 0 only for a successful child exit.
    pub fn exit_code(&self) -> u8 {
        match self {
            RunOutcome::Exited(status) if status.success() => 0,
            _ => 1,
        }
    }
}

/// Listens for SIGINT and SIGTERM.
///
/// Handlers are installed on construction, so signals delivered between
/// construction and the first `recv` are not lost.
pub struct ShutdownListener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl ShutdownListener {
    /// Installs the signal handlers.
    ///
    /// # Errors
    /// Returns `ExecError::Signal` if the OS refuses the registration.
    #[cfg(unix)]
    pub fn install() -> Result<Self, ExecError> {
        use tokio::signal::unix::{SignalKind, signal};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt()).map_err(ExecError::Signal)?,
            terminate: signal(SignalKind::terminate()).map_err(ExecError::Signal)?,
        })
    }

    /// Installs the signal handlers.
    ///
    /// # Errors
    /// Never fails on this platform; Ctrl-C is registered lazily.
    #[cfg(not(unix))]
    pub fn install() -> Result<Self, ExecError> {
        Ok(Self {})
    }

    /// Waits for the next termination signal.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> ShutdownSignal {
        tokio::select! {
            _ = self.interrupt.recv() => ShutdownSignal::Interrupt,
            _ = self.terminate.recv() => ShutdownSignal::Terminate,
        }
    }

    /// Waits for the next termination signal.
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> ShutdownSignal {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ShutdownSignal::Interrupt,
            Err(e) => {
                warn!("Ctrl-C handler unavailable: {e}");
                std::future::pending().await
            }
        }
    }
}

/// Launches `spec` and waits for it, killing it on SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the signal handlers cannot be installed, the program
/// cannot be started, or waiting on it fails.
pub async fn run(spec: &ProcessSpec) -> Result<RunOutcome, ExecError> {
    let mut listener = ShutdownListener::install()?;
    run_until(spec, listener.recv()).await
}

/// Launches `spec` and waits until it exits or `shutdown` resolves.
///
/// When `shutdown` wins and the child has not exited yet, the child is killed
/// without a grace period. When the child already exited, its real status is
/// reported and no kill is attempted.
///
/// # Errors
/// Returns `ExecError::Spawn` if the program cannot be started and
/// `ExecError::Wait` if its status cannot be collected.
#[instrument(skip(spec, shutdown), fields(program = %spec.program))]
pub async fn run_until<F>(spec: &ProcessSpec, shutdown: F) -> Result<RunOutcome, ExecError>
where
    F: Future<Output = ShutdownSignal>,
{
    let mut child = spec.command().spawn().map_err(|source| ExecError::Spawn {
        program: spec.program.clone(),
        source,
    })?;
    info!(pid = child.id(), "Started command");

    tokio::select! {
        biased;

        status = child.wait() => {
            let status = status.map_err(ExecError::Wait)?;
            info!(%status, "Command exited");
            Ok(RunOutcome::Exited(status))
        }

        signal = shutdown => {
            if let Ok(Some(status)) = child.try_wait() {
                info!(%status, %signal, "Command exited before signal was handled");
                return Ok(RunOutcome::Exited(status));
            }

            warn!(%signal, "Received shutdown signal, killing command");
            if let Err(e) = child.kill().await {
                warn!("Failed to kill command: {e}");
            }
            Ok(RunOutcome::Interrupted(signal))
        }
    }
}
