//! Integration tests for glob translation and glob matchers.
//!
//! Globs are translated into anchored regular expressions and evaluated
//! against absolute candidate paths. `*` and `?` stay within one path
//! component, `**` crosses components.

use filters::glob::translate;
use filters::{FilterError, MatchSyntax, Matcher, PathContext};
use proptest::prelude::*;
use regex::Regex;
use std::path::{Path, PathBuf};

fn context() -> PathContext {
    PathContext::new("/home/user/project", Some(PathBuf::from("/home/user")))
}

fn glob(pattern: &str) -> Matcher {
    Matcher::new(pattern, MatchSyntax::Glob, &context()).expect("glob compiles")
}

fn matches(pattern: &str, candidate: &str) -> bool {
    glob(pattern).is_match(Path::new(candidate), &context())
}

// ============================================================================
// Wildcards
// ============================================================================

/// Verifies `*` matches any run of characters inside one component.
#[test]
fn star_matches_within_component() {
    assert!(matches("/tmp/*.log", "/tmp/app.log"));
    assert!(matches("/tmp/*.log", "/tmp/.log"));
    assert!(!matches("/tmp/*.log", "/tmp/sub/app.log"));
    assert!(!matches("/tmp/*.log", "/tmp/app.log.1"));
}

/// Verifies `?` matches exactly one non-separator character.
#[test]
fn question_matches_single_character() {
    assert!(matches("/tmp/file?.txt", "/tmp/file1.txt"));
    assert!(!matches("/tmp/file?.txt", "/tmp/file.txt"));
    assert!(!matches("/tmp/file?.txt", "/tmp/file12.txt"));
    assert!(!matches("/tmp/a?b", "/tmp/a/b"));
}

/// Verifies `**` crosses directory boundaries.
#[test]
fn globstar_crosses_directories() {
    assert!(matches("**/precious*", "/a/b/c/precious.txt"));
    assert!(matches("/srv/**", "/srv/data/deep/file"));
    assert!(!matches("/srv/**", "/srv"));
}

/// Verifies relative candidates are resolved before matching.
#[test]
fn relative_candidates_resolve_against_cwd() {
    assert!(matches("/home/user/project/*.rs", "main.rs"));
    assert!(matches("/home/user/project/*.rs", "./src/../main.rs"));
    assert!(!matches("/home/user/project/*.rs", "src/main.rs"));
}

// ============================================================================
// Bracket Expressions
// ============================================================================

/// Verifies bracket classes and `!` negation.
#[test]
fn bracket_classes() {
    assert!(matches("/x/[abc].txt", "/x/b.txt"));
    assert!(!matches("/x/[abc].txt", "/x/d.txt"));
    assert!(matches("/x/[!abc].txt", "/x/d.txt"));
    assert!(!matches("/x/[!abc].txt", "/x/a.txt"));
    assert!(matches("/x/[0-9][0-9]", "/x/42"));
}

/// Verifies an unterminated bracket is a literal `[`.
#[test]
fn unterminated_bracket_is_literal() {
    assert!(matches("/x/[abc", "/x/[abc"));
    assert!(!matches("/x/[abc", "/x/a"));
}

/// Verifies an empty bracket pair is rejected when the matcher is built.
#[test]
fn empty_bracket_fails_construction() {
    let error = Matcher::new("/x/[]", MatchSyntax::Glob, &context()).unwrap_err();
    assert!(matches!(error, FilterError::Compile { .. }));
    assert_eq!(error.pattern(), Some("/x/[]"));
}

// ============================================================================
// Literal Characters
// ============================================================================

/// Verifies regex metacharacters in globs match themselves.
#[test]
fn metacharacters_are_literal() {
    assert!(matches("/x/a+b(1).txt", "/x/a+b(1).txt"));
    assert!(!matches("/x/a+b(1).txt", "/x/aab1.txt"));
    assert!(matches("/x/$HOME|^", "/x/$HOME|^"));
    assert!(matches("/x/a.b", "/x/a.b"));
    assert!(!matches("/x/a.b", "/x/axb"));
}

/// Verifies names with spaces match literally.
#[test]
fn spaces_match_literally() {
    assert!(matches("/x/my file", "/x/my file"));
    assert!(!matches("/x/my file", "/x/myfile"));
}

// ============================================================================
// Home Expansion
// ============================================================================

/// Verifies `~` and `~/` expand to the home directory.
#[test]
fn tilde_expands_to_home() {
    assert!(matches("~", "/home/user"));
    assert!(matches("~/.ssh/**", "/home/user/.ssh/id_ed25519"));
    assert!(matches("~/.ssh/**", "../.ssh/config"));
}

/// Verifies the expanded home pattern is normalised before translation.
#[test]
fn expanded_home_pattern_is_normalised() {
    assert!(matches("~/.ssh/", "/home/user/.ssh"));
    assert!(matches("~/.ssh/", "../.ssh"));
    assert!(matches("~/a/../b", "/home/user/b"));
    assert!(!matches("~/a/../b", "/home/user/a/b"));
}

/// Verifies `~name` is not expanded.
#[test]
fn named_tilde_is_literal() {
    assert!(matches("/x/~other", "/x/~other"));
    assert!(!matches("~other", "/home/other"));
}

/// Verifies expansion fails without a home directory.
#[test]
fn tilde_without_home_fails() {
    let context = PathContext::new("/", None);
    let error = Matcher::new("~/x", MatchSyntax::Glob, &context).unwrap_err();
    assert!(matches!(error, FilterError::UnknownHome { .. }));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Translation never panics and always yields a string.
    #[test]
    fn translate_is_total(glob in ".*") {
        let _ = translate(&glob);
    }

    /// Globs without brackets always compile.
    #[test]
    fn bracket_free_globs_compile(glob in "[^\\[\\]]*") {
        let fragment = translate(&glob);
        prop_assert!(Regex::new(&format!("^{fragment}$")).is_ok(), "fragment {fragment:?}");
    }

    /// Plain names match exactly themselves.
    #[test]
    fn plain_names_match_themselves(name in "[a-z][a-zA-Z0-9_. +()$^|-]{0,15}") {
        let pattern = format!("/base/{name}");
        prop_assert!(matches(&pattern, &pattern));
        let longer = format!("{pattern}x");
        prop_assert!(!matches(&pattern, &longer));
    }

    /// `*` never matches a path containing an extra separator.
    #[test]
    fn star_never_crosses_separator(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let candidate = format!("/base/{a}/{b}");
        prop_assert!(!matches("/base/*", &candidate));
        prop_assert!(matches("/base/**", &candidate));
    }
}
