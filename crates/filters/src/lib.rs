#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` decides which command-line arguments `skip-rm` forwards to the
//! wrapped command. Patterns are read once, compiled into [`Matcher`]s, and
//! grouped in a [`MatcherSet`]; [`classify`] then walks the argument list and
//! splits it into forwarded and skipped arguments under a [`FilterMode`].
//!
//! # Design
//!
//! - [`MatchSyntax`] selects how every pattern in a list is read: a literal
//!   absolute path, a shell glob (translated by [`glob::translate`]), or a
//!   regular expression. Glob and regex patterns are anchored at both ends.
//! - [`Matcher`] is a plain enum that owns its compiled [`regex::Regex`]; all
//!   fallible work happens in [`Matcher::new`].
//! - [`MatcherSet`] is the disjunction of its members and owns the
//!   [`PathContext`] used to make candidates absolute. Evaluation is
//!   infallible.
//! - [`Classifier`] carries a single flag (has `--` been seen) across
//!   arguments.
//!
//! # Invariants
//!
//! - `--` is always forwarded and never matched.
//! - Dash-prefixed arguments before `--` are forwarded untested; after `--`
//!   they are ordinary operands.
//! - `-` is always tested, on either side of `--`.
//! - [`FilterMode::Blacklist`] skips matches, [`FilterMode::Whitelist`] skips
//!   non-matches.
//! - Forwarded arguments keep their relative input order.
//!
//! # Errors
//!
//! Building matchers reports [`FilterError`] for malformed regexes, unknown
//! home directories, unreadable pattern lists, and an unavailable working
//! directory. Nothing fails once a [`MatcherSet`] exists.
//!
//! # Examples
//!
//! ```
//! use filters::{FilterMode, MatchSyntax, MatcherSet, PathContext, classify};
//!
//! let context = PathContext::new("/home/me", Some("/home/me".into()));
//! let set = MatcherSet::from_patterns(["~/.ssh", "~/.ssh/**"], MatchSyntax::Glob, context)
//!     .expect("patterns compile");
//!
//! let plan = classify(["-rf", ".ssh", "build"], &set, FilterMode::Blacklist);
//! assert_eq!(plan.forwarded(), ["-rf", "build"]);
//! assert_eq!(plan.skipped(), [".ssh"]);
//! ```

mod classify;
mod error;
pub mod glob;
mod matcher;
mod mode;
mod paths;
mod set;
mod syntax;

pub use classify::{
    ArgumentDecision, Classification, Classifier, SEPARATOR, STDIN_OPERAND, classify,
};
pub use error::FilterError;
pub use matcher::Matcher;
pub use mode::{FilterMode, UnknownModeError};
pub use paths::PathContext;
pub use set::{MatcherSet, read_pattern_list};
pub use syntax::{MatchSyntax, UnknownSyntaxError};
