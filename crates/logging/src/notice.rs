use std::ffi::OsStr;
use std::fmt;

/// Program name used to prefix fatal diagnostics.
pub const PROGRAM_NAME: &str = "skip-rm";

/// Category of a [`Notice`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    /// An argument was withheld from the wrapped command.
    Skipping,
    /// A fatal startup error.
    Error,
}

/// A single user-visible line written to standard error.
///
/// Notices are rendered without a trailing newline; the
/// [`NoticeSink`](crate::NoticeSink) adds one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    kind: NoticeKind,
    text: String,
}

impl Notice {
    /// Announces that `argument` will not be passed on.
    ///
    /// Non-UTF-8 arguments are rendered lossily.
    ///
    /// ```
    /// use logging::Notice;
    /// use std::ffi::OsStr;
    ///
    /// assert_eq!(Notice::skipping(OsStr::new("a.txt")).as_str(), "skipping a.txt...");
    /// ```
    #[must_use]
    pub fn skipping(argument: &OsStr) -> Self {
        Self {
            kind: NoticeKind::Skipping,
            text: format!("skipping {}...", argument.to_string_lossy()),
        }
    }

    /// Reports a fatal error, prefixed with the program name.
    ///
    /// ```
    /// use logging::Notice;
    ///
    /// assert_eq!(Notice::error("no config").as_str(), "skip-rm: no config");
    /// ```
    #[must_use]
    pub fn error(message: impl fmt::Display) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: format!("{PROGRAM_NAME}: {message}"),
        }
    }

    /// Returns the notice category.
    #[must_use]
    pub const fn kind(&self) -> NoticeKind {
        self.kind
    }

    /// Returns the rendered text without a line terminator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeKind};
    use std::ffi::OsStr;

    #[test]
    fn skipping_keeps_argument_verbatim() {
        let notice = Notice::skipping(OsStr::new("--"));
        assert_eq!(notice.as_str(), "skipping --...");
        assert_eq!(notice.kind(), NoticeKind::Skipping);
    }

    #[test]
    fn error_renders_display_chain_head() {
        let error = std::io::Error::other("disk on fire");
        let notice = Notice::error(&error);
        assert_eq!(notice.to_string(), "skip-rm: disk on fire");
        assert_eq!(notice.kind(), NoticeKind::Error);
    }

    #[cfg(unix)]
    #[test]
    fn skipping_renders_invalid_utf8_lossily() {
        use std::os::unix::ffi::OsStrExt;

        let notice = Notice::skipping(OsStr::from_bytes(b"a\xffb"));
        assert_eq!(notice.as_str(), "skipping a\u{fffd}b...");
    }
}
