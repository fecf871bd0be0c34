use std::fmt;
use std::str::FromStr;

/// Policy applied to match-eligible arguments.
///
/// The two modes are complements: for a given [`MatcherSet`](crate::MatcherSet)
/// an operand skipped under one mode is forwarded under the other.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FilterMode {
    /// Reject-list: arguments matching any pattern are skipped.
    Blacklist,
    /// Accept-list: only arguments matching some pattern are forwarded.
    Whitelist,
}

impl FilterMode {
    /// Returns `true` when an argument with the given match result is
    /// forwarded to the wrapped command.
    ///
    /// ```
    /// use filters::FilterMode;
    ///
    /// assert!(!FilterMode::Blacklist.forwards(true));
    /// assert!(FilterMode::Whitelist.forwards(true));
    /// ```
    #[must_use]
    pub const fn forwards(self, matched: bool) -> bool {
        match self {
            Self::Blacklist => !matched,
            Self::Whitelist => matched,
        }
    }

    /// Returns the configuration token for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blacklist => "blacklist",
            Self::Whitelist => "whitelist",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = UnknownModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "blacklist" => Ok(Self::Blacklist),
            "whitelist" => Ok(Self::Whitelist),
            other => Err(UnknownModeError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Error returned when a mode token is not `blacklist` or `whitelist`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid mode '{value}' (expected 'blacklist' or 'whitelist')")]
pub struct UnknownModeError {
    value: String,
}

impl UnknownModeError {
    /// Returns the rejected token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
