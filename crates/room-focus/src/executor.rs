//! CommandRunner trait and ProcessExecutor (sync subprocess wrapper).
//! Mock-injectable so dispatch logic can be tested without zellij or wezterm.

use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::error::FocusError;

const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Trait for executing controller commands. Enables mock injection for testing.
pub trait CommandRunner: Send + Sync {
    /// Run `program args` with both output streams discarded.
    /// `Ok` only when the process started and exited with status 0.
    fn status(&self, program: &Path, args: &[&str]) -> Result<(), FocusError>;

    /// Run `program args` and return its stdout (stderr discarded).
    /// The exit status is not inspected; callers validate the output instead.
    fn output(&self, program: &Path, args: &[&str]) -> Result<String, FocusError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn status(&self, program: &Path, args: &[&str]) -> Result<(), FocusError> {
        (**self).status(program, args)
    }

    fn output(&self, program: &Path, args: &[&str]) -> Result<String, FocusError> {
        (**self).output(program, args)
    }
}

/// Real executor using `std::process::Command`.
///
/// Waits without a limit by default. With a timeout, a child still running
/// at the deadline is killed and reported as [`FocusError::TimedOut`].
#[derive(Debug, Default, Clone)]
pub struct ProcessExecutor {
    timeout: Option<Duration>,
}

impl ProcessExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn spawn(&self, program: &Path, args: &[&str], capture: bool) -> Result<Child, FocusError> {
        let stdout = if capture { Stdio::piped() } else { Stdio::null() };
        Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| FocusError::Launch {
                program: program.display().to_string(),
                source,
            })
    }

    fn deadline(&self) -> Option<Instant> {
        self.timeout.map(|timeout| Instant::now() + timeout)
    }

    fn timed_out(&self, program: &Path) -> FocusError {
        FocusError::TimedOut {
            program: program.display().to_string(),
            timeout: self.timeout.unwrap_or_default(),
        }
    }

    fn wait(
        &self,
        child: &mut Child,
        program: &Path,
        deadline: Option<Instant>,
    ) -> Result<ExitStatus, FocusError> {
        let launch_err = |source| FocusError::Launch {
            program: program.display().to_string(),
            source,
        };
        let Some(deadline) = deadline else {
            return child.wait().map_err(launch_err);
        };

        loop {
            if let Some(status) = child.try_wait().map_err(launch_err)? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                // Already-exited races are fine; reap either way.
                let _ = child.kill();
                let _ = child.wait();
                tracing::debug!(program = %program.display(), timeout = ?self.timeout, "killed hung subprocess");
                return Err(self.timed_out(program));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl CommandRunner for ProcessExecutor {
    fn status(&self, program: &Path, args: &[&str]) -> Result<(), FocusError> {
        tracing::trace!(program = %program.display(), ?args, "run");
        let mut child = self.spawn(program, args, false)?;
        let status = self.wait(&mut child, program, self.deadline())?;
        if !status.success() {
            return Err(FocusError::NonZeroExit {
                program: program.display().to_string(),
                code: status.code(),
            });
        }
        Ok(())
    }

    fn output(&self, program: &Path, args: &[&str]) -> Result<String, FocusError> {
        tracing::trace!(program = %program.display(), ?args, "run (capture)");
        let deadline = self.deadline();
        let mut child = self.spawn(program, args, true)?;

        // Drain stdout on a separate thread so a full pipe cannot stall the
        // child while we poll for exit.
        let (tx, rx) = mpsc::channel();
        match child.stdout.take() {
            Some(mut stdout) => {
                thread::spawn(move || {
                    let mut buf = Vec::new();
                    let _ = stdout.read_to_end(&mut buf);
                    let _ = tx.send(buf);
                });
            }
            None => drop(tx),
        }

        let status = self.wait(&mut child, program, deadline)?;
        if !status.success() {
            tracing::trace!(program = %program.display(), code = ?status.code(), "non-zero exit while capturing");
        }

        // A background process spawned by the child can keep the pipe open
        // after the child exits; the read shares the child's deadline.
        let buf = match deadline {
            None => rx.recv().unwrap_or_default(),
            Some(deadline) => {
                match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
                    Ok(buf) => buf,
                    Err(RecvTimeoutError::Disconnected) => Vec::new(),
                    Err(RecvTimeoutError::Timeout) => {
                        tracing::debug!(program = %program.display(), "stdout still open at deadline");
                        return Err(self.timed_out(program));
                    }
                }
            }
        };
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
