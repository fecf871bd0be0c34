use std::borrow::Borrow;
use std::io::{self, Write};

use crate::Notice;

/// Streaming sink that writes [`Notice`] values into an [`io::Write`] target.
///
/// Each call to [`write`](Self::write) renders one notice followed by a
/// newline. Writes are passed straight through, so wrapping a locked stderr
/// keeps notices in emission order.
///
/// # Examples
///
/// ```
/// use logging::{Notice, NoticeSink};
/// use std::ffi::OsStr;
///
/// let mut sink = NoticeSink::new(Vec::new());
/// sink.write(Notice::skipping(OsStr::new("a")))?;
/// sink.write(Notice::skipping(OsStr::new("b")))?;
///
/// assert_eq!(sink.into_inner(), b"skipping a...\nskipping b...\n");
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct NoticeSink<W> {
    writer: W,
}

impl<W> NoticeSink<W> {
    /// Creates a sink around `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> NoticeSink<W>
where
    W: Write,
{
    /// Writes a single notice as one line.
    pub fn write<N>(&mut self, notice: N) -> io::Result<()>
    where
        N: Borrow<Notice>,
    {
        self.writer.write_all(notice.borrow().as_str().as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::NoticeSink;
    use crate::Notice;
    use std::ffi::OsStr;

    #[test]
    fn every_notice_ends_with_a_newline() {
        let mut sink = NoticeSink::new(Vec::new());
        sink.write(Notice::skipping(OsStr::new("x"))).expect("write succeeds");
        sink.write(&Notice::error("bad")).expect("write succeeds");
        sink.flush().expect("flush succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("skipping x..."));
        assert_eq!(lines.next(), Some("skip-rm: bad"));
        assert!(lines.next().is_none());
        assert!(output.ends_with('\n'));
    }
}
