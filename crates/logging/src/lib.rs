#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` owns everything `skip-rm` writes to standard error on its own
//! behalf: the `skipping <arg>...` notices emitted before the wrapped command
//! starts, the `skip-rm: <message>` line printed for fatal startup errors, and
//! (behind the `tracing` feature) the diagnostic subscriber.
//!
//! # Design
//!
//! [`Notice`] values are rendered once and streamed through a [`NoticeSink`],
//! a thin wrapper around an [`io::Write`](std::io::Write) implementor that
//! ends every notice with a newline. Diagnostic events are a separate
//! channel: they are off unless the `SKIP_RM_LOG` environment variable holds
//! a filter directive, so the notice stream stays exactly one line per
//! skipped argument by default.
//!
//! # Errors
//!
//! Sink operations surface [`std::io::Error`] values from the underlying
//! writer unchanged.
//!
//! # Examples
//!
//! ```
//! use logging::{Notice, NoticeSink};
//! use std::ffi::OsStr;
//!
//! let mut sink = NoticeSink::new(Vec::new());
//! sink.write(Notice::skipping(OsStr::new("precious.txt"))).unwrap();
//! sink.write(Notice::error("config file not found")).unwrap();
//!
//! let output = String::from_utf8(sink.into_inner()).unwrap();
//! assert_eq!(output, "skipping precious.txt...\nskip-rm: config file not found\n");
//! ```

mod notice;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_init;

pub use notice::{Notice, NoticeKind, PROGRAM_NAME};
pub use sink::NoticeSink;
#[cfg(feature = "tracing")]
pub use tracing_init::{LOG_ENV, init_tracing};
