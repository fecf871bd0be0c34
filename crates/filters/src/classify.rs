use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::{FilterMode, MatcherSet};

/// End-of-options marker. Always forwarded, never matched.
pub const SEPARATOR: &str = "--";

/// Standard-input operand. Match-eligible on both sides of the separator.
pub const STDIN_OPERAND: &str = "-";

/// How a single argument was treated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ArgumentDecision {
    /// The `--` separator; forwarded.
    Separator,
    /// A dash-prefixed token seen before `--`; forwarded without matching.
    Flag,
    /// Matched against the set and forwarded under the active mode.
    Forward,
    /// Matched against the set and withheld under the active mode.
    Skip,
}

impl ArgumentDecision {
    /// Returns `true` when the argument reaches the wrapped command.
    #[must_use]
    pub const fn is_forwarded(self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// Streaming argument classifier.
///
/// The only state carried between arguments is whether `--` has been seen.
/// Once set it stays set; dash-prefixed tokens that follow it are treated as
/// operands.
#[derive(Clone, Debug)]
pub struct Classifier<'a> {
    set: &'a MatcherSet,
    mode: FilterMode,
    saw_separator: bool,
}

impl<'a> Classifier<'a> {
    /// Creates a classifier in its initial state.
    #[must_use]
    pub const fn new(set: &'a MatcherSet, mode: FilterMode) -> Self {
        Self {
            set,
            mode,
            saw_separator: false,
        }
    }

    /// Returns `true` once `--` has been processed.
    #[must_use]
    pub const fn saw_separator(&self) -> bool {
        self.saw_separator
    }

    /// Decides the fate of the next argument.
    pub fn decide(&mut self, argument: &OsStr) -> ArgumentDecision {
        if argument == STDIN_OPERAND {
            return self.test(argument);
        }
        if argument == SEPARATOR {
            self.saw_separator = true;
            return ArgumentDecision::Separator;
        }
        if is_dash_prefixed(argument) && !self.saw_separator {
            return ArgumentDecision::Flag;
        }
        self.test(argument)
    }

    fn test(&self, argument: &OsStr) -> ArgumentDecision {
        if self.mode.forwards(self.set.matches(Path::new(argument))) {
            ArgumentDecision::Forward
        } else {
            ArgumentDecision::Skip
        }
    }
}

fn is_dash_prefixed(argument: &OsStr) -> bool {
    argument.as_encoded_bytes().first() == Some(&b'-')
}

/// Result of [`classify`]: the forwarded and skipped arguments, each in input
/// order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Classification {
    forwarded: Vec<OsString>,
    skipped: Vec<OsString>,
}

impl Classification {
    /// Arguments to pass to the wrapped command.
    #[must_use]
    pub fn forwarded(&self) -> &[OsString] {
        &self.forwarded
    }

    /// Arguments withheld from the wrapped command.
    #[must_use]
    pub fn skipped(&self) -> &[OsString] {
        &self.skipped
    }

    /// Splits the classification into `(forwarded, skipped)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<OsString>, Vec<OsString>) {
        (self.forwarded, self.skipped)
    }
}

/// Partitions `args` into forwarded and skipped arguments.
///
/// Arguments are processed left to right with these rules, first match
/// wins:
///
/// 1. `-` is tested against `set`.
/// 2. `--` is forwarded and switches the classifier into operand mode.
/// 3. Other dash-prefixed tokens before `--` are forwarded untested.
/// 4. Dash-prefixed tokens after `--` are tested.
/// 5. Everything else is tested.
///
/// A tested argument is forwarded when [`FilterMode::forwards`] says so.
///
/// # Examples
///
/// ```
/// use filters::{FilterMode, MatchSyntax, MatcherSet, PathContext, classify};
///
/// let set = MatcherSet::from_pattern("/home/me/-rf", MatchSyntax::Literal,
///     PathContext::new("/home/me", None)).unwrap();
/// let plan = classify(["-rf", "--", "-rf", "notes"], &set, FilterMode::Blacklist);
///
/// assert_eq!(plan.forwarded(), ["-rf", "--", "notes"]);
/// assert_eq!(plan.skipped(), ["-rf"]);
/// ```
pub fn classify<I, S>(args: I, set: &MatcherSet, mode: FilterMode) -> Classification
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut classifier = Classifier::new(set, mode);
    let mut classification = Classification::default();

    for argument in args {
        let argument = argument.into();
        let decision = classifier.decide(&argument);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "skip_rm::classify",
            argument = %argument.to_string_lossy(),
            ?decision,
            "classified argument"
        );

        if decision.is_forwarded() {
            classification.forwarded.push(argument);
        } else {
            classification.skipped.push(argument);
        }
    }

    classification
}
