//! Error types for focus dispatch.
//!
//! Only [`FocusError::UnknownTerminal`] is meant to reach a user. Everything
//! else is inspected by the orchestrator, traced, and dropped.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FocusError {
    #[error("unknown terminal {0:?} (expected one of: ghostty, iterm, iterm2, kitty, wezterm)")]
    UnknownTerminal(String),

    #[error("{0} not found in any candidate location")]
    BackendNotFound(&'static str),

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited unsuccessfully (code {code:?})")]
    NonZeroExit { program: String, code: Option<i32> },

    #[error("{program} did not exit within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("unparseable pane list: {0}")]
    Unparseable(#[from] serde_json::Error),

    #[error("pane {0} not present in pane list")]
    PaneNotFound(i64),

    #[error("malformed pane id {0:?}")]
    MalformedPaneId(String),
}
