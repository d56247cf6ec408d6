use std::io;
use std::process::{Command, Stdio};

use crate::error::{OnePasswordError, Result};

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    /// Exit code, `None` when the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl Captured {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Something that can run an argument vector to completion.
///
/// `argv[0]` is the program, the rest are its arguments. Implementations
/// block until the process exits and must not retry.
pub trait Runner {
    fn output(&self, argv: &[String]) -> io::Result<Captured>;
}

impl<R: Runner + ?Sized> Runner for &R {
    fn output(&self, argv: &[String]) -> io::Result<Captured> {
        (**self).output(argv)
    }
}

/// Runs commands as real child processes via `std::process::Command`.
///
/// stdout and stderr are captured. stdin is inherited so `op` can prompt for
/// the account password when desktop-app integration is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn output(&self, argv: &[String]) -> io::Result<Captured> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "No command specified"))?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .output()?;

        Ok(Captured {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Run `argv` once and return its stdout.
///
/// A non-zero exit becomes [`OnePasswordError::Runtime`] carrying the captured
/// stderr. Launch failures (missing binary included) propagate as
/// [`OnePasswordError::Io`].
pub fn run_cmd<R: Runner + ?Sized>(runner: &R, argv: &[String]) -> Result<Vec<u8>> {
    tracing::debug!(argv = ?argv, "invoking 1Password CLI");

    let captured = runner.output(argv)?;

    if !captured.success() {
        let stderr = String::from_utf8_lossy(&captured.stderr);
        let status = captured
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "signal".to_string());
        tracing::warn!(status = %status, command = ?argv.get(1..3), "1Password CLI exited with an error");
        return Err(OnePasswordError::Runtime(format!(
            "Encountered an error when calling subprocess (exit status {}), got: {}",
            status,
            stderr.trim()
        )));
    }

    Ok(captured.stdout)
}
