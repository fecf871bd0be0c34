use std::ffi::OsString;
use std::process::Command;

use crate::CliError;
use crate::exit_code::status_code;

/// Runs `program` with `args`, inheriting the standard streams, and waits
/// for it.
///
/// Returns the wrapper exit status derived from the child's termination
/// status.
pub fn run_command(program: &str, args: &[OsString]) -> Result<i32, CliError> {
    tracing::debug!(
        target: "skip_rm::exec",
        program,
        args = args.len(),
        "starting wrapped command"
    );

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| CliError::Spawn {
            command: program.to_owned(),
            source,
        })?;

    tracing::debug!(target: "skip_rm::exec", %status, "wrapped command finished");
    Ok(status_code(status))
}

#[cfg(all(test, unix))]
mod tests {
    use super::run_command;
    use crate::ExitCode;
    use std::ffi::OsString;

    #[test]
    fn exit_status_passes_through() {
        assert_eq!(run_command("true", &[]).unwrap(), 0);
        assert_eq!(run_command("false", &[]).unwrap(), 1);

        let args = [OsString::from("-c"), OsString::from("exit 7")];
        assert_eq!(run_command("sh", &args).unwrap(), 7);
    }

    #[test]
    fn signal_death_is_offset() {
        let args = [OsString::from("-c"), OsString::from("kill -TERM $$")];
        assert_eq!(run_command("sh", &args).unwrap(), 128 + 15);
    }

    #[test]
    fn missing_program_is_not_found() {
        let error = run_command("skip-rm-test-no-such-program", &[]).unwrap_err();
        assert_eq!(error.exit_code(), ExitCode::CommandNotFound);
    }
}
