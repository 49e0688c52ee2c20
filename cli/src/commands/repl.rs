use std::io::Write;

use replicant_core::api::{CliError, CommandError, CommandOutput, Outcome};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;

/// Leaves the REPL. Handled here rather than registered, so it never shows up
/// in `!list`.
const EXIT_LINE: &str = "!exit";

/// What the loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Exit,
}

/// Reads lines until EOF or `!exit`.
///
/// Each line is dispatched synchronously and finishes before the next prompt.
/// Listening for Ctrl-C keeps SIGINT from killing the REPL, so interrupting an
/// attached `logcat` lands back at the prompt.
pub async fn run(app: &mut App) -> Result<(), CliError> {
    let show_prompt = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        if show_prompt {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", app.prompt())?;
            stdout.flush()?;
        }

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                continue;
            }
        };
        let Some(line) = line else {
            tracing::debug!("stdin closed");
            break;
        };

        let step = tokio::task::block_in_place(|| {
            let stdout = std::io::stdout();
            let stderr = std::io::stderr();
            interactive_line(app, &line, &mut stdout.lock(), &mut stderr.lock())
        });
        if step? == Step::Exit {
            break;
        }
    }
    Ok(())
}

/// One REPL line. Executor failures are reported on `err` and the session
/// goes on; a failed write to `out` ends it.
pub fn interactive_line(
    app: &mut App,
    line: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Step, CommandError> {
    match handle_line(app, line, out) {
        Err(e @ CommandError::Executor(_)) => {
            report(&e, err);
            Ok(Step::Continue)
        }
        Err(e) => {
            report(&e, err);
            Err(e)
        }
        ok => ok,
    }
}

/// Runs `-c` lines in order, stopping at the first failure or `!exit`.
pub fn run_lines(
    app: &mut App,
    lines: &[String],
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    for line in lines {
        match handle_line(app, line, out) {
            Ok(Step::Continue) => {}
            Ok(Step::Exit) => break,
            Err(e) => {
                report(&e, err);
                return Err(e.into());
            }
        }
    }
    Ok(())
}

/// Skips blank lines, stops on `!exit`, dispatches everything else.
fn handle_line(app: &mut App, line: &str, out: &mut dyn Write) -> Result<Step, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Step::Continue);
    }
    if line == EXIT_LINE {
        return Ok(Step::Exit);
    }

    match app.dispatch(line, out)? {
        None => tracing::debug!(line, "no command matched, ignored"),
        Some(Outcome::Invalid { usage }) => tracing::debug!(line, %usage, "rejected arguments"),
        Some(Outcome::Ran(CommandOutput::Attached(code))) if code != 0 => {
            tracing::debug!(line, exit_code = code, "attached adb run ended");
        }
        Some(Outcome::Ran(_)) => {}
    }
    out.flush().map_err(CommandError::Output)?;
    Ok(Step::Continue)
}

// Reporting is best effort: there is nowhere left to send a failed stderr write.
fn report(e: &CommandError, err: &mut dyn Write) {
    tracing::warn!(error = ?e, "command failed");
    let _ = match e {
        CommandError::Executor(inner) => match std::error::Error::source(inner) {
            Some(cause) => writeln!(err, "error: {inner}: {cause}"),
            None => writeln!(err, "error: {inner}"),
        },
        CommandError::Output(_) => writeln!(err, "error: {e}"),
    };
}
