use std::process::{Command, ExitStatus, Stdio};

use replicant_core::api::{Executor, ExecutorError, Invocation};

use super::OutputEncoding;

/// Runs adb through the platform shell so forwarded lines keep their quoting
/// and word splitting.
#[derive(Debug, Clone)]
pub struct AdbExecutor {
    bin: String,
    encoding: OutputEncoding,
}

impl AdbExecutor {
    /// Captured output is read in the encoding named by
    /// `REPLICANT_OUTPUT_ENCODING`, UTF-8 otherwise.
    pub fn new(bin: impl Into<String>) -> Self {
        Self {
            bin: bin.into(),
            encoding: OutputEncoding::from_env(),
        }
    }

    pub fn with_encoding(mut self, encoding: OutputEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Full shell line: `<adb> [-s <device>] <line> [extra...]`.
    pub fn command_line(&self, invocation: &Invocation) -> String {
        let bin = if self.bin.contains(char::is_whitespace) {
            format!("\"{}\"", self.bin)
        } else {
            self.bin.clone()
        };
        let rest = invocation.render();
        if rest.is_empty() {
            bin
        } else {
            format!("{bin} {rest}")
        }
    }

    fn shell(&self, line: &str) -> Command {
        #[cfg(windows)]
        {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(line);
            cmd
        }
        #[cfg(not(windows))]
        {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(line);
            cmd
        }
    }

    fn spawn_error(&self, source: std::io::Error) -> ExecutorError {
        ExecutorError::Spawn {
            program: self.bin.clone(),
            source,
        }
    }

    fn wait_error(&self, source: std::io::Error) -> ExecutorError {
        ExecutorError::Wait {
            program: self.bin.clone(),
            source,
        }
    }
}

impl Executor for AdbExecutor {
    fn run_captured(&self, invocation: &Invocation) -> Result<String, ExecutorError> {
        let line = self.command_line(invocation);
        tracing::debug!(target: "replicant.adb", cmd = %line, "spawning captured");

        let child = self
            .shell(&line)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;
        let output = child.wait_with_output().map_err(|e| self.wait_error(e))?;

        if !output.status.success() {
            tracing::debug!(
                target: "replicant.adb",
                cmd = %line,
                exit_code = exit_code(output.status),
                "adb exited with failure"
            );
        }
        Ok(self.encoding.decode(&output.stdout))
    }

    fn run_interactive(&self, invocation: &Invocation) -> Result<i32, ExecutorError> {
        let line = self.command_line(invocation);
        tracing::debug!(target: "replicant.adb", cmd = %line, "spawning attached");

        let mut child = self.shell(&line).spawn().map_err(|e| self.spawn_error(e))?;
        let status = child.wait().map_err(|e| self.wait_error(e))?;
        Ok(exit_code(status))
    }
}

// A child killed by a signal has no code; report it the way shells do.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn command_line_prefixes_the_binary() {
        let adb = AdbExecutor::new("adb");
        let inv = Invocation::new("uninstall")
            .on_device(Some("emulator-5554"))
            .arg("com.x.y");
        assert_eq!(adb.command_line(&inv), "adb -s emulator-5554 uninstall com.x.y");
    }

    #[test]
    fn binary_with_spaces_is_quoted() {
        let adb = AdbExecutor::new("/opt/Android SDK/adb");
        assert_eq!(
            adb.command_line(&Invocation::new("devices")),
            "\"/opt/Android SDK/adb\" devices"
        );
    }

    // `echo` stands in for adb: the executor only cares about the shell line.
    #[cfg(unix)]
    #[test]
    fn captured_run_returns_stdout() {
        let adb = AdbExecutor::new("echo");
        let out = adb
            .run_captured(&Invocation::new("emulator-5554 device"))
            .unwrap();
        assert_eq!(out, "emulator-5554 device\n");
    }

    #[cfg(unix)]
    #[test]
    fn interactive_run_reports_exit_code() {
        let adb = AdbExecutor::new("exit");
        assert_eq!(adb.run_interactive(&Invocation::new("3")).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn signalled_child_maps_to_shell_style_code() {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait statuses: normal exit keeps its code, SIGINT (2) becomes 130.
        assert_eq!(exit_code(ExitStatus::from_raw(3 << 8)), 3);
        assert_eq!(exit_code(ExitStatus::from_raw(2)), 130);
    }

    #[cfg(unix)]
    #[test]
    fn captured_run_uses_the_configured_encoding() {
        let latin1 = OutputEncoding::from_label("latin1").unwrap();
        let adb = AdbExecutor::new("printf").with_encoding(latin1);
        let out = adb.run_captured(&Invocation::new(r"'caf\351'")).unwrap();
        assert_eq!(out, "café");
    }
}
