//! WezTerm pane focus via its own CLI.
//!
//! `activate-pane` only works reliably when the pane's tab is already the
//! active one, so the tab is looked up from `cli list` and activated first.
//! A pane id that is no longer listed ends the flow before any activation.

use std::path::Path;

use serde::Deserialize;

use crate::error::FocusError;
use crate::executor::CommandRunner;

/// One entry of `wezterm cli list --format json`.
///
/// Only the ids are read. Other fields (title, cwd, size, ...) vary between
/// WezTerm releases and are ignored; a missing id fails the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaneRecord {
    pub pane_id: i64,
    pub tab_id: i64,
}

pub fn parse_pane_list(output: &str) -> Result<Vec<PaneRecord>, FocusError> {
    Ok(serde_json::from_str(output)?)
}

/// Tab id of the first record for `pane_id`.
pub fn resolve_tab(records: &[PaneRecord], pane_id: i64) -> Option<i64> {
    records
        .iter()
        .find(|r| r.pane_id == pane_id)
        .map(|r| r.tab_id)
}

/// List panes, activate the target's tab, then the pane itself.
///
/// Exit status of `activate-tab` is ignored: the tab may already be active,
/// and the pane activation is attempted regardless.
pub fn focus_wezterm_pane(
    runner: &impl CommandRunner,
    wezterm: &Path,
    pane_id: &str,
) -> Result<(), FocusError> {
    // Any integer is accepted; ids WezTerm never issues (e.g. negative) are
    // simply absent from the list.
    let target: i64 = pane_id
        .parse()
        .map_err(|_| FocusError::MalformedPaneId(pane_id.to_string()))?;

    let output = runner.output(wezterm, &["cli", "list", "--format", "json"])?;
    let records = parse_pane_list(&output)?;
    let tab_id = resolve_tab(&records, target).ok_or(FocusError::PaneNotFound(target))?;

    let tab_arg = tab_id.to_string();
    if let Err(err) = runner.status(wezterm, &["cli", "activate-tab", "--tab-id", &tab_arg]) {
        tracing::debug!(%err, tab_id, "activate-tab failed, activating pane anyway");
    }

    if let Err(err) = runner.status(wezterm, &["cli", "activate-pane", "--pane-id", pane_id]) {
        tracing::debug!(%err, pane_id, "activate-pane failed");
    }
    Ok(())
}
