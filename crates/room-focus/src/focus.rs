//! Top-level focus orchestration.
//!
//! Window activation and in-window focus are independent: the second runs
//! whether or not the first found anything. Inside each, the first failing
//! step ends that sub-task. Nothing is returned to the caller.

use std::path::{Path, PathBuf};

use crate::activator::AppActivator;
use crate::error::FocusError;
use crate::executor::CommandRunner;
use crate::locator::{locate, wezterm_candidates, zellij_candidates};
use crate::terminal::TerminalKind;
use crate::wezterm::focus_wezterm_pane;
use crate::zellij::{default_plugin_path, focus_pane, focus_tab};

/// Where to focus. Fields arrive validated from the CLI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    pub terminal: TerminalKind,
    pub session: String,
    pub tab: String,
    pub pane: Option<String>,
}

impl FocusRequest {
    pub fn new(terminal: TerminalKind, session: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            terminal,
            session: session.into(),
            tab: tab.into(),
            pane: None,
        }
    }

    #[must_use]
    pub fn with_pane(mut self, pane: impl Into<String>) -> Self {
        self.pane = Some(pane.into());
        self
    }

    /// Pane id, treating an empty string as absent.
    pub fn pane_id(&self) -> Option<&str> {
        self.pane.as_deref().filter(|p| !p.is_empty())
    }
}

/// Backend discovery lists and plugin location.
///
/// Subprocess limits belong to the runner (see `ProcessExecutor::with_timeout`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusConfig {
    pub zellij_candidates: Vec<PathBuf>,
    pub wezterm_candidates: Vec<PathBuf>,
    pub plugin_path: PathBuf,
}

impl FocusConfig {
    pub fn from_home(home: Option<&Path>) -> Self {
        Self {
            zellij_candidates: zellij_candidates(home),
            wezterm_candidates: wezterm_candidates(),
            plugin_path: default_plugin_path(home.unwrap_or(Path::new(""))),
        }
    }

    #[must_use]
    pub fn with_plugin_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.plugin_path = path.into();
        self
    }
}

/// Drives activation and pane/tab dispatch for one request at a time.
pub struct Focuser<R, A> {
    runner: R,
    activator: A,
    config: FocusConfig,
}

impl<R: CommandRunner, A: AppActivator> Focuser<R, A> {
    pub fn with_parts(runner: R, activator: A, config: FocusConfig) -> Self {
        Self {
            runner,
            activator,
            config,
        }
    }

    /// Attempt every applicable focus step; failures are traced, never returned.
    pub fn focus(&self, request: &FocusRequest) {
        tracing::debug!(
            terminal = %request.terminal,
            session = %request.session,
            tab = %request.tab,
            pane = ?request.pane,
            "focus request"
        );

        self.activator.activate(request.terminal.bundle_id());

        if request.terminal.supports_pane_addressing() {
            if let Some(pane) = request.pane_id() {
                if let Err(err) = self.focus_native_pane(pane) {
                    tracing::debug!(%err, terminal = %request.terminal, "native pane focus stopped");
                }
            }
        }

        if request.terminal.multiplexer_hosted() {
            if let Err(err) = self.focus_multiplexer(request) {
                tracing::debug!(%err, session = %request.session, "zellij focus stopped");
            }
        }
    }

    fn focus_native_pane(&self, pane: &str) -> Result<(), FocusError> {
        let wezterm =
            locate(&self.config.wezterm_candidates).ok_or(FocusError::BackendNotFound("wezterm"))?;
        focus_wezterm_pane(&self.runner, &wezterm, pane)
    }

    fn focus_multiplexer(&self, request: &FocusRequest) -> Result<(), FocusError> {
        let zellij =
            locate(&self.config.zellij_candidates).ok_or(FocusError::BackendNotFound("zellij"))?;
        focus_tab(&self.runner, &zellij, &request.session, &request.tab)?;
        if let Some(pane) = request.pane_id() {
            focus_pane(
                &self.runner,
                &zellij,
                &request.session,
                &self.config.plugin_path,
                pane,
            )?;
        }
        Ok(())
    }
}
