use std::{collections::HashMap, process::Stdio};

use tracing::{debug, instrument};

use crate::config::Config;

use super::{ExecError, template};

/// Everything needed to launch a registered command.
///
/// Stdio is always inherited from the invoking process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSpec {
    /// Program to execute, resolved through `PATH` by the OS.
    pub program: String,

    /// Base arguments from the exec template followed by caller arguments.
    pub args: Vec<String>,

    /// Whether the child starts from the parent's environment.
    pub inherit_env: bool,

    /// Entries applied on top of the (possibly empty) base environment.
    pub env: Vec<(String, String)>,
}

impl ProcessSpec {
    /// Resolves `name` against the registry using the stored flag values.
    ///
    /// # Errors
    /// See [`ProcessSpec::resolve_with_overrides`].
    pub fn resolve(
        config: &Config,
        name: &str,
        extra_args: &[String],
    ) -> Result<Self, ExecError> {
        Self::resolve_with_overrides(config, name, &HashMap::new(), extra_args)
    }

    /// Resolves `name` into a launchable process.
    ///
    /// Flag values start from the stored values; entries in `overrides` replace
    /// them for this resolution only. The rendered template is split on single
    /// spaces, the first token becomes the program and `extra_args` are
    /// appended verbatim after the template's own arguments.
    ///
    /// Empty tokens from consecutive spaces are dropped rather than passed on
    /// as empty arguments, so `echo  hi` runs `echo` with the single argument
    /// `hi`.
    ///
    /// # Errors
    ///
    /// * `ExecError::NotFound` - If `name` is not registered
    /// * `ExecError::Template` - If the exec template is malformed or references an
    ///   undefined flag
    /// * `ExecError::NoExecutable` - If the rendered command line is blank
    #[instrument(skip(config, overrides))]
    pub fn resolve_with_overrides(
        config: &Config,
        name: &str,
        overrides: &HashMap<String, String>,
        extra_args: &[String],
    ) -> Result<Self, ExecError> {
        let command = config
            .commands
            .get(name)
            .ok_or_else(|| ExecError::NotFound(name.to_string()))?;

        let mut values = command.flag_values();
        values.extend(
            overrides
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        let rendered =
            template::render(&command.exec, &values).map_err(|source| ExecError::Template {
                command: name.to_string(),
                source,
            })?;

        let mut tokens = rendered
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string);
        let program = tokens
            .next()
            .ok_or_else(|| ExecError::NoExecutable(name.to_string()))?;
        let args: Vec<String> = tokens.chain(extra_args.iter().cloned()).collect();

        debug!(%program, ?args, "Resolved command");

        Ok(Self {
            program,
            args,
            inherit_env: config.use_system_env,
            env: config.env_entries(),
        })
    }

    /// The command line as shown to the user.
    pub fn display_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Builds the child process with inherited stdio.
    ///
    /// The child is killed if the returned handle is dropped before it exits.
    pub fn command(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if !self.inherit_env {
            command.env_clear();
        }
        command.envs(self.env.iter().map(|(key, value)| (key, value)));

        command
    }
}
