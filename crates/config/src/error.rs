use std::io;
use std::path::{Path, PathBuf};

use filters::{FilterError, FilterMode, UnknownModeError, UnknownSyntaxError};

/// Error produced while locating, parsing, or applying the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// None of the candidate files could be read.
    #[error("no config file found (searched {})", join_paths(.searched))]
    NotFound {
        /// Candidates in the order they were tried.
        searched: Vec<PathBuf>,
    },
    /// An explicitly named file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        /// File that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed config{}: {source}", describe_origin(.path.as_deref()))]
    Parse {
        /// File the document came from, when known.
        path: Option<PathBuf>,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The `matcher` field holds an unknown token.
    #[error(transparent)]
    InvalidMatcher(#[from] UnknownSyntaxError),
    /// The `mode` field holds an unknown token.
    #[error(transparent)]
    InvalidMode(#[from] UnknownModeError),
    /// The list selected by `mode` is absent or empty.
    #[error("mode '{mode}' requires a '{mode}' pattern list path")]
    MissingList {
        /// Active mode.
        mode: FilterMode,
    },
    /// The `command` field is empty.
    #[error("'command' must not be empty")]
    EmptyCommand,
    /// Building the matchers from the pattern list failed.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| format!("'{}'", path.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_origin(path: Option<&Path>) -> String {
    path.map(|path| format!(" file '{}'", path.display()))
        .unwrap_or_default()
}
