//! `room doctor` — report which backends `room focus` would find.

use std::io::Write;
use std::path::{Path, PathBuf};

use room_focus::{FocusConfig, locate};

/// One line of the report: what was looked for and where it turned up.
struct Check {
    name: &'static str,
    found: Result<PathBuf, String>,
}

impl Check {
    fn backend(name: &'static str, candidates: &[PathBuf]) -> Self {
        let found = locate(candidates).ok_or_else(|| {
            let searched: Vec<_> = candidates.iter().map(|p| p.display().to_string()).collect();
            format!("not found (looked in: {})", searched.join(", "))
        });
        Self { name, found }
    }

    fn plugin(path: &Path) -> Self {
        let found = if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(format!(
                "missing at {} (pane focus inside zellij will not work)",
                path.display()
            ))
        };
        Self { name: "zellij plugin", found }
    }

    fn render(&self) -> String {
        match self.found {
            Ok(ref path) => format!("ok       {:<14} {}", self.name, path.display()),
            Err(ref why) => format!("missing  {:<14} {why}", self.name),
        }
    }
}

fn checks(config: &FocusConfig) -> [Check; 3] {
    [
        Check::backend("zellij", &config.zellij_candidates),
        Check::plugin(&config.plugin_path),
        Check::backend("wezterm", &config.wezterm_candidates),
    ]
}

/// Print the report to `out`; returns how many checks came up empty.
fn write_report(config: &FocusConfig, out: &mut impl Write) -> std::io::Result<usize> {
    let checks = checks(config);
    for check in &checks {
        writeln!(out, "{}", check.render())?;
    }
    Ok(checks.iter().filter(|p| p.found.is_err()).count())
}

/// Entry point for `room doctor`. Exit code 1 when anything is missing.
pub fn run_doctor(config: &FocusConfig) -> anyhow::Result<i32> {
    let missing = write_report(config, &mut std::io::stdout().lock())?;
    Ok(if missing == 0 { 0 } else { 1 })
}
