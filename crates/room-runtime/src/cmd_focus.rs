//! `room focus` — run (or print) the focus sequence for one request.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use room_focus::{
    AppActivator, CommandRunner, FocusConfig, FocusError, FocusRequest, Focuser, ProcessExecutor,
    WorkspaceActivator,
};

use crate::cli::{BackendOpts, FocusOpts};

/// Default discovery config with CLI/env overrides applied.
pub fn resolve_config(opts: &BackendOpts) -> FocusConfig {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let mut config = FocusConfig::from_home(home.as_deref());
    if let Some(ref plugin) = opts.plugin {
        config = config.with_plugin_path(expand_home(plugin, home.as_deref()));
    }
    config
}

/// The only place `--timeout-ms` is turned into a subprocess limit.
pub fn build_executor(timeout_ms: Option<u64>) -> ProcessExecutor {
    ProcessExecutor::new().with_timeout(timeout_ms.map(Duration::from_millis))
}

pub fn build_request(opts: &FocusOpts) -> FocusRequest {
    let request = FocusRequest::new(opts.terminal, &opts.session, &opts.tab);
    match opts.pane {
        Some(ref pane) => request.with_pane(pane),
        None => request,
    }
}

/// Entry point for `room focus`.
pub fn cmd_focus(opts: &FocusOpts) -> anyhow::Result<()> {
    let config = resolve_config(&opts.backend);
    let request = build_request(opts);
    tracing::debug!(?config, timeout_ms = ?opts.timeout_ms, dry_run = opts.dry_run, "resolved focus config");

    if opts.dry_run {
        let recorder = DryRun::default();
        Focuser::with_parts(&recorder, &recorder, config).focus(&request);
        let mut out = std::io::stdout().lock();
        for line in recorder.lines() {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    Focuser::with_parts(build_executor(opts.timeout_ms), WorkspaceActivator, config).focus(&request);
    Ok(())
}

fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Records what would run. Every command "succeeds" with empty output, so a
/// WezTerm lookup stops after the list command.
#[derive(Default)]
struct DryRun {
    lines: Mutex<Vec<String>>,
}

impl DryRun {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl CommandRunner for DryRun {
    fn status(&self, program: &Path, args: &[&str]) -> Result<(), FocusError> {
        self.push(render_command(program, args));
        Ok(())
    }

    fn output(&self, program: &Path, args: &[&str]) -> Result<String, FocusError> {
        self.push(render_command(program, args));
        Ok(String::new())
    }
}

impl AppActivator for DryRun {
    fn activate(&self, bundle_id: &str) {
        self.push(format!("activate {bundle_id}"));
    }
}

fn render_command(program: &Path, args: &[&str]) -> String {
    std::iter::once(program.display().to_string())
        .chain(args.iter().map(|a| quote(a)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> String {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || "'\"\\$;&|".contains(c)) {
        return arg.to_string();
    }
    format!("'{}'", arg.replace('\'', r"'\''"))
}
