use std::io;

use config::ConfigError;
use filters::FilterError;

use crate::ExitCode;

/// Failure that stops `skip-rm` before or while starting the command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration could not be loaded or applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The path context could not be captured.
    #[error(transparent)]
    Filter(#[from] FilterError),
    /// The wrapped command could not be started.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// Program name from the configuration.
        command: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Exit status reported for this failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Spawn { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                ExitCode::CommandNotFound
            }
            Self::Spawn { .. } => ExitCode::CannotExecute,
            Self::Config(_) | Self::Filter(_) => ExitCode::Startup,
        }
    }
}
