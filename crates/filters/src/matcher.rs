use std::path::Path;

use regex::Regex;

use crate::{FilterError, MatchSyntax, PathContext, glob};

/// Compiled predicate built from a single pattern.
///
/// Candidates are compared in their absolute form (see
/// [`PathContext::absolutize`]); the pattern itself is used as written, so a
/// relative literal or regex pattern can never match.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Exact string comparison.
    Literal(String),
    /// Anchored regex translated from a glob.
    Glob {
        /// Pattern as written, before `~` expansion.
        pattern: String,
        /// Compiled `^fragment$` expression.
        regex: Regex,
    },
    /// Anchored user-supplied regex.
    Regex {
        /// Pattern as written.
        pattern: String,
        /// Compiled `^pattern$` expression.
        regex: Regex,
    },
}

impl Matcher {
    /// Compiles `pattern` with the given syntax.
    ///
    /// Glob patterns have a leading `~` expanded through `context` before
    /// translation. Glob and regex patterns are compiled as `^` + pattern +
    /// `$`; an empty pattern therefore only matches an empty candidate.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Compile`] when the expression is rejected by the
    /// regex engine and [`FilterError::UnknownHome`] when a `~` cannot be
    /// expanded.
    pub fn new(
        pattern: &str,
        syntax: MatchSyntax,
        context: &PathContext,
    ) -> Result<Self, FilterError> {
        match syntax {
            MatchSyntax::Literal => Ok(Self::Literal(pattern.to_owned())),
            MatchSyntax::Glob => {
                let expanded = context.expand_home(pattern)?;
                let regex = compile_anchored(&glob::translate(&expanded), pattern, syntax)?;
                Ok(Self::Glob {
                    pattern: pattern.to_owned(),
                    regex,
                })
            }
            MatchSyntax::Regex => Ok(Self::Regex {
                pattern: pattern.to_owned(),
                regex: compile_anchored(pattern, pattern, syntax)?,
            }),
        }
    }

    /// Returns the syntax this matcher was built with.
    #[must_use]
    pub const fn syntax(&self) -> MatchSyntax {
        match self {
            Self::Literal(_) => MatchSyntax::Literal,
            Self::Glob { .. } => MatchSyntax::Glob,
            Self::Regex { .. } => MatchSyntax::Regex,
        }
    }

    /// Returns the pattern text as written in the list.
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            Self::Literal(pattern)
            | Self::Glob { pattern, .. }
            | Self::Regex { pattern, .. } => pattern,
        }
    }

    /// Returns `true` when `candidate`, made absolute through `context`,
    /// matches this pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &Path, context: &PathContext) -> bool {
        let resolved = context.absolutize(candidate);
        self.matches_resolved(&resolved.to_string_lossy())
    }

    /// Tests an already absolute candidate.
    #[must_use]
    pub fn matches_resolved(&self, resolved: &str) -> bool {
        match self {
            Self::Literal(pattern) => pattern == resolved,
            Self::Glob { regex, .. } | Self::Regex { regex, .. } => regex.is_match(resolved),
        }
    }
}

fn compile_anchored(
    expression: &str,
    pattern: &str,
    syntax: MatchSyntax,
) -> Result<Regex, FilterError> {
    Regex::new(&format!("^{expression}$")).map_err(|source| FilterError::Compile {
        pattern: pattern.to_owned(),
        syntax,
        source,
    })
}
