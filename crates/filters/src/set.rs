use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::slice;

use crate::{FilterError, MatchSyntax, Matcher, PathContext};

/// Compiled, immutable disjunction of [`Matcher`]s sharing one syntax.
///
/// A `MatcherSet` is built once, before any argument is classified, and owns
/// the [`PathContext`] used to absolutize candidates. [`matches`](Self::matches)
/// is `true` when any member matches; evaluation short-circuits on the first
/// hit and cannot fail.
///
/// # Examples
///
/// ```
/// use filters::{MatchSyntax, MatcherSet, PathContext};
/// use std::path::Path;
///
/// let context = PathContext::new("/srv", None);
/// let set = MatcherSet::from_patterns(["/srv/*.db", "/etc/**"], MatchSyntax::Glob, context)
///     .unwrap();
///
/// assert!(set.matches(Path::new("prod.db")));
/// assert!(set.matches(Path::new("/etc/ssh/sshd_config")));
/// assert!(!set.matches(Path::new("notes.txt")));
/// ```
#[derive(Clone, Debug)]
pub struct MatcherSet {
    syntax: MatchSyntax,
    matchers: Vec<Matcher>,
    context: PathContext,
}

impl MatcherSet {
    /// Compiles `patterns` in iteration order.
    ///
    /// Empty strings are compiled like any other pattern.
    ///
    /// # Errors
    ///
    /// Returns the first [`FilterError`] produced by [`Matcher::new`].
    pub fn from_patterns<I, S>(
        patterns: I,
        syntax: MatchSyntax,
        context: PathContext,
    ) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let matchers = patterns
            .into_iter()
            .map(|pattern| Matcher::new(pattern.as_ref(), syntax, &context))
            .collect::<Result<Vec<_>, _>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "skip_rm::filters",
            syntax = %syntax,
            patterns = matchers.len(),
            "compiled matcher set"
        );

        Ok(Self {
            syntax,
            matchers,
            context,
        })
    }

    /// Compiles a single pattern.
    pub fn from_pattern(
        pattern: &str,
        syntax: MatchSyntax,
        context: PathContext,
    ) -> Result<Self, FilterError> {
        Self::from_patterns([pattern], syntax, context)
    }

    /// Reads a newline-delimited pattern list and compiles every line.
    ///
    /// Lines end at `\n` (a preceding `\r` is dropped). Blank lines are not
    /// filtered out.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::ReadList`] when the file cannot be opened or a
    /// line is not valid UTF-8, and any compile error from the patterns.
    pub fn from_list_file(
        path: &Path,
        syntax: MatchSyntax,
        context: PathContext,
    ) -> Result<Self, FilterError> {
        let patterns = read_pattern_list(path)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "skip_rm::filters",
            list = %path.display(),
            lines = patterns.len(),
            "read pattern list"
        );

        Self::from_patterns(patterns, syntax, context)
    }

    /// Returns `true` when any member matches `candidate`.
    ///
    /// The candidate is made absolute once and then tested against each
    /// matcher in construction order.
    #[must_use]
    pub fn matches(&self, candidate: &Path) -> bool {
        let resolved = self.context.absolutize(candidate);
        let resolved = resolved.to_string_lossy();
        self.matchers
            .iter()
            .any(|matcher| matcher.matches_resolved(&resolved))
    }

    /// Returns the syntax shared by every member.
    #[must_use]
    pub const fn syntax(&self) -> MatchSyntax {
        self.syntax
    }

    /// Returns the path context candidates are resolved against.
    #[must_use]
    pub const fn context(&self) -> &PathContext {
        &self.context
    }

    /// Returns the number of compiled patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Returns `true` when the set holds no patterns and therefore matches
    /// nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Iterates over the matchers in construction order.
    pub fn iter(&self) -> slice::Iter<'_, Matcher> {
        self.matchers.iter()
    }
}

impl<'a> IntoIterator for &'a MatcherSet {
    type Item = &'a Matcher;
    type IntoIter = slice::Iter<'a, Matcher>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Reads `path` as a newline-delimited list, keeping empty lines.
pub fn read_pattern_list(path: &Path) -> Result<Vec<String>, FilterError> {
    let read_error = |source| FilterError::ReadList {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)
}
