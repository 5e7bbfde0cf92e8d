//! Supported terminal emulators and what each one can do.

use std::fmt;
use std::str::FromStr;

use crate::error::FocusError;

/// Terminal emulator hosting the target session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalKind {
    Ghostty,
    ITerm2,
    Kitty,
    WezTerm,
}

impl TerminalKind {
    pub const ALL: [TerminalKind; 4] = [
        TerminalKind::Ghostty,
        TerminalKind::ITerm2,
        TerminalKind::Kitty,
        TerminalKind::WezTerm,
    ];

    /// Case-insensitive parse. `iterm` is accepted as an alias for `iterm2`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ghostty" => Some(Self::Ghostty),
            "iterm" | "iterm2" => Some(Self::ITerm2),
            "kitty" => Some(Self::Kitty),
            "wezterm" => Some(Self::WezTerm),
            _ => None,
        }
    }

    /// macOS bundle identifier used to find the running application.
    pub fn bundle_id(self) -> &'static str {
        match self {
            Self::Ghostty => "com.mitchellh.ghostty",
            Self::ITerm2 => "com.googlecode.iterm2",
            Self::Kitty => "net.kovidgoyal.kitty",
            Self::WezTerm => "com.github.wez.wezterm",
        }
    }

    /// The emulator's own CLI can address panes directly.
    pub fn supports_pane_addressing(self) -> bool {
        matches!(self, Self::WezTerm)
    }

    /// Sessions in this terminal run inside zellij.
    pub fn multiplexer_hosted(self) -> bool {
        !self.supports_pane_addressing()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ghostty => "ghostty",
            Self::ITerm2 => "iterm2",
            Self::Kitty => "kitty",
            Self::WezTerm => "wezterm",
        }
    }
}

impl fmt::Display for TerminalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerminalKind {
    type Err = FocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| FocusError::UnknownTerminal(s.to_string()))
    }
}
