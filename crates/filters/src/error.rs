use std::io;
use std::path::PathBuf;

use crate::MatchSyntax;

/// Error produced while building matchers.
///
/// Every variant is a construction-time failure; a built
/// [`MatcherSet`](crate::MatcherSet) never fails when evaluated.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// The pattern, or its glob translation, is not a valid regular expression.
    #[error("failed to compile {syntax} pattern '{pattern}': {source}")]
    Compile {
        /// Pattern as written in the list.
        pattern: String,
        /// Syntax the pattern was interpreted with.
        syntax: MatchSyntax,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },
    /// A `~` prefix had to be expanded but no home directory is known.
    #[error("cannot expand '~' in '{text}': home directory is unknown")]
    UnknownHome {
        /// Text that carried the `~` prefix.
        text: String,
    },
    /// The pattern list could not be read.
    #[error("failed to read pattern list '{}': {source}", path.display())]
    ReadList {
        /// Path of the list file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The working directory used to absolutize candidates is unavailable.
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl FilterError {
    /// Returns the offending pattern for compile errors.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::Compile { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}
