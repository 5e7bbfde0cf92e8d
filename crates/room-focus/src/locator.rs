//! Controller binary discovery.
//!
//! Paths are checked in order on every call; the first one that exists wins.
//! Nothing is cached, so a long-lived host sees installs and removals.

use std::path::{Path, PathBuf};

/// Return the first candidate that exists on disk, or `None`.
///
/// Pure existence check: the binary is never executed.
pub fn locate<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .map(|p| p.as_ref().to_path_buf())
        .find(|p| p.exists())
}

/// zellij install locations, most specific first.
pub fn zellij_candidates(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("/opt/homebrew/bin/zellij"),
        PathBuf::from("/usr/local/bin/zellij"),
    ];
    if let Some(home) = home {
        paths.push(home.join(".cargo/bin/zellij"));
    }
    paths.push(PathBuf::from("/usr/bin/zellij"));
    paths
}

/// WezTerm CLI locations; the app bundle's copy is preferred.
pub fn wezterm_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Applications/WezTerm.app/Contents/MacOS/wezterm"),
        PathBuf::from("/opt/homebrew/bin/wezterm"),
        PathBuf::from("/usr/local/bin/wezterm"),
        PathBuf::from("/usr/bin/wezterm"),
    ]
}
