#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` is the front-end of `skip-rm`, a transparent wrapper around a
//! destructive command such as `rm`. It loads the configuration, compiles the
//! configured pattern list, withholds the arguments the list protects, and
//! runs the configured command with what remains.
//!
//! # Design
//!
//! [`run`] accepts the full argument vector (program name first) and a
//! handle for standard error, mirroring the way the binary calls it. Work is
//! split into two phases:
//!
//! 1. build: capture the [`PathContext`], load the [`Config`], compile the
//!    [`MatcherSet`](filters::MatcherSet), and classify the arguments
//!    ([`plan`]);
//! 2. execute: write one `skipping <arg>...` notice per withheld argument,
//!    then start the command with the forwarded arguments and wait for it.
//!
//! Wrapper options are never parsed: every argument after the program name
//! belongs to the wrapped command.
//!
//! # Errors
//!
//! Build-phase failures print `skip-rm: <message>` and return `1` without
//! starting the command. A command that cannot be found returns `127`, one
//! that cannot be executed returns `126`. Otherwise the command's own exit
//! status is returned (see [`exit_code::status_code`]).

mod error;
mod exec;
pub mod exit_code;

use std::ffi::OsString;
use std::io::Write;

use config::Config;
use filters::{Classification, PathContext, classify};
use logging::{Notice, NoticeSink};

pub use error::CliError;
pub use exec::run_command;
pub use exit_code::ExitCode;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Entry point used by the `skip-rm` binary.
///
/// The first element of `arguments` is the program name and is dropped.
pub fn run<I, S, Err>(arguments: I, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Err: Write,
{
    logging::init_tracing();

    let args: Vec<OsString> = arguments.into_iter().skip(1).map(Into::into).collect();
    let mut sink = NoticeSink::new(stderr);

    let outcome = PathContext::from_env()
        .map_err(CliError::from)
        .and_then(|context| {
            let config = config::load(&context)?;
            run_with_config(&config, context, args, &mut sink)
        });

    match outcome {
        Ok(status) => status,
        Err(error) => report(&error, &mut sink),
    }
}

/// Runs the wrapped command described by `config`.
///
/// `args` excludes the program name. Skip notices are written to `sink`
/// before the command starts.
pub fn run_with_config<W>(
    config: &Config,
    context: PathContext,
    args: Vec<OsString>,
    sink: &mut NoticeSink<W>,
) -> Result<i32, CliError>
where
    W: Write,
{
    let (forwarded, skipped) = plan(config, context, args)?.into_parts();

    for argument in &skipped {
        if let Err(error) = sink.write(Notice::skipping(argument)) {
            tracing::warn!(target: "skip_rm::cli", %error, "failed to write skip notice");
        }
    }
    if let Err(error) = sink.flush() {
        tracing::warn!(target: "skip_rm::cli", %error, "failed to flush skip notices");
    }

    run_command(config.command(), &forwarded)
}

/// Compiles the configured pattern list and classifies `args`.
pub fn plan<I, S>(
    config: &Config,
    context: PathContext,
    args: I,
) -> Result<Classification, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let set = config.matcher_set(context)?;
    Ok(classify(args, &set, config.mode()))
}

fn report<W: Write>(error: &CliError, sink: &mut NoticeSink<W>) -> i32 {
    let notice = Notice::error(error);
    if let Err(write_error) = sink.write(&notice) {
        tracing::warn!(
            target: "skip_rm::cli",
            error = %write_error,
            "failed to write error notice"
        );
    }
    error.exit_code().as_i32()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
