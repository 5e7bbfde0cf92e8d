//! room-focus: turn a (terminal, session, tab, pane) address into focus actions.
//!
//! Raises the terminal application's windows, then drives either zellij
//! (`action go-to-tab-name` + the room plugin pipe) or WezTerm
//! (`cli list` → `activate-tab` → `activate-pane`) to land on the pane.
//! Every step is best-effort: failures end the sub-task and are only traced.

pub mod activator;
pub mod error;
pub mod executor;
pub mod focus;
pub mod locator;
pub mod terminal;
pub mod wezterm;
pub mod zellij;

#[cfg(test)]
pub(crate) mod mock;

pub use activator::{AppActivator, RunningApplication, WorkspaceActivator, activate_matching};
pub use error::FocusError;
pub use executor::{CommandRunner, ProcessExecutor};
pub use focus::{FocusConfig, FocusRequest, Focuser};
pub use locator::{locate, wezterm_candidates, zellij_candidates};
pub use terminal::TerminalKind;
pub use wezterm::{PaneRecord, focus_wezterm_pane, parse_pane_list, resolve_tab};
pub use zellij::{focus_pane, focus_tab};
