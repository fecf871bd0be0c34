use std::fmt;
use std::str::FromStr;

/// How every pattern of a [`MatcherSet`](crate::MatcherSet) is interpreted.
///
/// The syntax is chosen once for the whole pattern list; individual patterns
/// cannot override it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MatchSyntax {
    /// Exact comparison against the absolute candidate path
    /// (configuration token `string`).
    Literal,
    /// Shell glob with `?`, `*`, `**` and bracket expressions, translated by
    /// [`glob::translate`](crate::glob::translate).
    Glob,
    /// Regular expression in [`regex`] syntax, anchored at both ends.
    Regex,
}

impl MatchSyntax {
    /// Returns the configuration token for this syntax.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "string",
            Self::Glob => "glob",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for MatchSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchSyntax {
    type Err = UnknownSyntaxError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "string" => Ok(Self::Literal),
            "glob" => Ok(Self::Glob),
            "regex" => Ok(Self::Regex),
            other => Err(UnknownSyntaxError {
                value: other.to_owned(),
            }),
        }
    }
}

/// Error returned when a matcher token is not `string`, `glob` or `regex`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid matcher '{value}' (expected 'string', 'glob' or 'regex')")]
pub struct UnknownSyntaxError {
    value: String,
}

impl UnknownSyntaxError {
    /// Returns the rejected token.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
