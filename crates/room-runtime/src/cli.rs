//! CLI definition using clap derive.

use clap::{Parser, Subcommand};
use room_focus::TerminalKind;

#[derive(Parser)]
#[command(name = "room", about = "Bring a terminal tab or pane to the front")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Raise the terminal window and focus a zellij tab/pane or WezTerm pane
    Focus(FocusOpts),
    /// Check which controller binaries and plugins are installed
    Doctor(DoctorOpts),
}

#[derive(clap::Args)]
pub struct FocusOpts {
    /// Terminal emulator: ghostty, iterm (iterm2), kitty, wezterm
    #[arg(long, short = 't', value_parser = parse_terminal)]
    pub terminal: TerminalKind,

    /// zellij session name
    #[arg(long, short = 's')]
    pub session: String,

    /// zellij tab name
    #[arg(long)]
    pub tab: String,

    /// Pane id (zellij plugin pane id, or WezTerm pane id)
    #[arg(long, short = 'p')]
    pub pane: Option<String>,

    #[command(flatten)]
    pub backend: BackendOpts,

    /// Kill a controller command that runs longer than this (milliseconds)
    #[arg(long, env = "ROOM_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,

    /// Print the commands instead of running them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(clap::Args)]
pub struct DoctorOpts {
    #[command(flatten)]
    pub backend: BackendOpts,
}

#[derive(clap::Args)]
pub struct BackendOpts {
    /// room zellij plugin (default: ~/.config/zellij/plugins/room.wasm)
    #[arg(long, env = "ROOM_ZELLIJ_PLUGIN")]
    pub plugin: Option<String>,
}

fn parse_terminal(s: &str) -> Result<TerminalKind, String> {
    s.parse::<TerminalKind>().map_err(|e| e.to_string())
}
