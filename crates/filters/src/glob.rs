//! Shell glob to regular-expression translation.
//!
//! [`translate`] rewrites a glob into an unanchored regex fragment that the
//! [`regex`] crate accepts. Callers add the `^`/`$` anchors themselves; see
//! [`Matcher`](crate::Matcher).
//!
//! | glob      | regex     | meaning                                   |
//! |-----------|-----------|-------------------------------------------|
//! | `?`       | `[^/]`    | one character other than `/`              |
//! | `*`       | `[^/]*`   | any run of characters without `/`         |
//! | `**`      | `.*`      | any run of characters, `/` included       |
//! | `[!a-z]`  | `[^a-z]`  | bracket expression, `!` negation rewritten |
//! | `[`       | `\[`      | unterminated bracket, taken literally     |
//!
//! Extended-glob operators and POSIX class names (`[:alpha:]`) are not
//! interpreted; a bracket body is copied through unchanged apart from the
//! negation marker and backslash doubling.

/// Characters escaped with a backslash when they appear outside a bracket
/// expression.
const ESCAPED: &str = r"()[]{}?*+-|^$\.&~#/";

/// Translates a shell glob into an unanchored regex fragment.
///
/// The function is total: every input produces a fragment and malformed
/// globs degrade to literal text instead of failing. The fragment may still
/// be rejected by the regex compiler when a bracket body is itself invalid
/// (for example `[]`), which surfaces as a construction error in
/// [`Matcher::new`](crate::Matcher::new).
///
/// # Examples
///
/// ```
/// use filters::glob::translate;
///
/// assert_eq!(translate("*.[ch]"), r"[^/]*\.[ch]");
/// assert_eq!(translate("**"), ".*");
/// assert_eq!(translate("["), r"\[");
/// ```
#[must_use]
pub fn translate(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut out = String::with_capacity(glob.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '?' => out.push_str("[^/]"),
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push_str(".*");
                    i += 1;
                } else {
                    out.push_str("[^/]*");
                }
            }
            '[' => match find_bracket_end(&chars, i) {
                Some(end) => {
                    push_bracket(&mut out, &chars[i + 1..end]);
                    i = end;
                }
                None => out.push_str(r"\["),
            },
            c => push_literal(&mut out, c),
        }
        i += 1;
    }

    out
}

/// Returns the index of the first `]` after `open`, if any.
fn find_bracket_end(chars: &[char], open: usize) -> Option<usize> {
    chars[open + 1..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| open + 1 + offset)
}

fn push_bracket(out: &mut String, body: &[char]) {
    out.push('[');
    for (index, &c) in body.iter().enumerate() {
        match c {
            '!' if index == 0 => out.push('^'),
            '\\' => out.push_str(r"\\"),
            c => out.push(c),
        }
    }
    out.push(']');
}

fn push_literal(out: &mut String, c: char) {
    // Only ASCII whitespace is escaped; the regex parser rejects escapes of
    // non-ASCII characters.
    if ESCAPED.contains(c) || c.is_ascii_whitespace() {
        out.push('\\');
    }
    out.push(c);
}
