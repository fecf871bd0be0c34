//! Exit codes reported by `skip-rm` itself.
//!
//! When the wrapped command runs to completion its own status is passed
//! through unchanged; the codes below only cover cases where `skip-rm`
//! decides the status. They follow the shell conventions for commands that
//! cannot be found or executed.

use std::fmt;
use std::process::ExitStatus;

/// Status codes chosen by the wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful completion.
    Ok = 0,

    /// Startup failure: configuration, pattern list, or matcher
    /// construction. The wrapped command was not started.
    Startup = 1,

    /// The wrapped command exists but could not be executed.
    CannotExecute = 126,

    /// The wrapped command was not found.
    CommandNotFound = 127,
}

/// Offset added to a signal number when the child was killed by a signal.
pub const SIGNAL_BASE: i32 = 128;

impl ExitCode {
    /// Returns the numeric value.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Ok => "success",
            Self::Startup => "startup error",
            Self::CannotExecute => "command cannot execute",
            Self::CommandNotFound => "command not found",
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.as_i32()
    }
}

/// Maps the child's termination status to the wrapper's exit status.
///
/// A normal exit passes its code through. On Unix, death by signal `n`
/// becomes `128 + n`.
#[must_use]
pub fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_BASE + signal;
        }
    }

    ExitCode::Startup.as_i32()
}
