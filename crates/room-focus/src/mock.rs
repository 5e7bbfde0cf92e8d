//! Recording fakes shared by the unit tests.

use std::path::Path;
use std::sync::Mutex;

use crate::activator::AppActivator;
use crate::error::FocusError;
use crate::executor::CommandRunner;

/// Records every command as `"<program> <args...>"` and answers from canned data.
#[derive(Default)]
pub(crate) struct MockRunner {
    calls: Mutex<Vec<String>>,
    /// Commands containing any of these substrings exit non-zero.
    failing: Vec<&'static str>,
    /// Stdout returned by `output`.
    stdout: String,
}

impl MockRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub(crate) fn failing_on(mut self, pattern: &'static str) -> Self {
        self.failing.push(pattern);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("lock").clone()
    }

    fn record(&self, program: &Path, args: &[&str]) -> String {
        let mut line = program.display().to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.calls.lock().expect("lock").push(line.clone());
        line
    }
}

impl CommandRunner for MockRunner {
    fn status(&self, program: &Path, args: &[&str]) -> Result<(), FocusError> {
        let line = self.record(program, args);
        if self.failing.iter().any(|p| line.contains(p)) {
            return Err(FocusError::NonZeroExit {
                program: program.display().to_string(),
                code: Some(1),
            });
        }
        Ok(())
    }

    fn output(&self, program: &Path, args: &[&str]) -> Result<String, FocusError> {
        self.record(program, args);
        Ok(self.stdout.clone())
    }
}

#[derive(Default)]
pub(crate) struct MockActivator {
    activated: Mutex<Vec<String>>,
}

impl MockActivator {
    pub(crate) fn activated(&self) -> Vec<String> {
        self.activated.lock().expect("lock").clone()
    }
}

impl AppActivator for MockActivator {
    fn activate(&self, bundle_id: &str) {
        self.activated.lock().expect("lock").push(bundle_id.to_string());
    }
}
