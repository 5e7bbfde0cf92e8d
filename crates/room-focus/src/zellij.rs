//! zellij tab and pane focus.
//!
//! Tabs are addressed by name through `action go-to-tab-name`. zellij has no
//! CLI for focusing a pane by id, so pane focus is a `pipe` message to the
//! room plugin, which performs the focus from inside the session.

use std::path::{Path, PathBuf};

use crate::error::FocusError;
use crate::executor::CommandRunner;

/// Pipe message name understood by the room plugin.
pub const FOCUS_PANE_MESSAGE: &str = "focus-pane";

/// Plugin location relative to the user's home directory.
pub const PLUGIN_RELATIVE_PATH: &str = ".config/zellij/plugins/room.wasm";

pub fn default_plugin_path(home: &Path) -> PathBuf {
    home.join(PLUGIN_RELATIVE_PATH)
}

/// `file:` URL zellij expects for `--plugin`.
pub fn plugin_url(plugin_path: &Path) -> String {
    format!("file:{}", plugin_path.display())
}

/// Switch `session`'s active tab to the tab named `tab`.
///
/// An error here means the tab could not be confirmed selected and the
/// caller should not attempt pane focus.
pub fn focus_tab(
    runner: &impl CommandRunner,
    zellij: &Path,
    session: &str,
    tab: &str,
) -> Result<(), FocusError> {
    runner.status(
        zellij,
        &["--session", session, "action", "go-to-tab-name", tab],
    )
}

/// Ask the room plugin in `session` to focus `pane_id`.
///
/// The plugin file is not checked first; a missing plugin makes zellij fail
/// and the failure is returned like any other.
pub fn focus_pane(
    runner: &impl CommandRunner,
    zellij: &Path,
    session: &str,
    plugin_path: &Path,
    pane_id: &str,
) -> Result<(), FocusError> {
    let plugin = plugin_url(plugin_path);
    runner.status(
        zellij,
        &[
            "--session",
            session,
            "pipe",
            "--plugin",
            &plugin,
            "--name",
            FOCUS_PANE_MESSAGE,
            "--",
            pane_id,
        ],
    )
}
