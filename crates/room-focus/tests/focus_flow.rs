//! End-to-end focus flows against fake controller binaries.
//!
//! The fakes are shell scripts that append their argv to a log file, so the
//! real `ProcessExecutor` and locator are exercised.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use room_focus::{
    AppActivator, FocusConfig, FocusRequest, Focuser, ProcessExecutor, TerminalKind,
};

#[derive(Default)]
struct RecordingActivator(Mutex<Vec<String>>);

impl AppActivator for RecordingActivator {
    fn activate(&self, bundle_id: &str) {
        self.0.lock().expect("lock").push(bundle_id.to_string());
    }
}

/// Write an executable script that logs `$*` to `log` and then runs `body`.
fn fake_binary(dir: &Path, name: &str, log: &Path, body: &str) -> PathBuf {
    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\necho \"$*\" >> '{}'\n{}\n",
        log.display(),
        body
    );
    fs::write(&path, script).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

fn read_log(log: &Path) -> Vec<String> {
    fs::read_to_string(log)
        .unwrap_or_default()
        .lines()
        .map(str::to_string)
        .collect()
}

fn config(dir: &Path, zellij: Option<&Path>, wezterm: Option<&Path>) -> FocusConfig {
    let mut zellij_candidates = vec![dir.join("not-installed")];
    zellij_candidates.extend(zellij.map(Path::to_path_buf));
    FocusConfig {
        zellij_candidates,
        wezterm_candidates: wezterm.map(Path::to_path_buf).into_iter().collect(),
        plugin_path: dir.join(".config/zellij/plugins/room.wasm"),
    }
}

#[test]
fn zellij_hosted_terminal_focuses_tab_then_pane() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    let zellij = fake_binary(dir.path(), "zellij", &log, "exit 0");
    let cfg = config(dir.path(), Some(&zellij), None);
    let plugin = cfg.plugin_path.display().to_string();

    let activator = RecordingActivator::default();
    let focuser = Focuser::with_parts(ProcessExecutor::new(), &activator, cfg);
    focuser.focus(&FocusRequest::new(TerminalKind::Ghostty, "main", "build").with_pane("12"));

    assert_eq!(*activator.0.lock().expect("lock"), vec!["com.mitchellh.ghostty"]);
    assert_eq!(
        read_log(&log),
        vec![
            "--session main action go-to-tab-name build".to_string(),
            format!("--session main pipe --plugin file:{plugin} --name focus-pane -- 12"),
        ]
    );
}

#[test]
fn failing_tab_switch_prevents_pane_focus() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    let zellij = fake_binary(dir.path(), "zellij", &log, "exit 1");

    let activator = RecordingActivator::default();
    let focuser = Focuser::with_parts(
        ProcessExecutor::new(),
        &activator,
        config(dir.path(), Some(&zellij), None),
    );
    focuser.focus(&FocusRequest::new(TerminalKind::Kitty, "main", "gone").with_pane("12"));

    assert_eq!(read_log(&log), vec!["--session main action go-to-tab-name gone"]);
}

#[test]
fn wezterm_lists_then_activates_tab_and_pane() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    let body = r#"if [ "$2" = "list" ]; then echo '[{"pane_id":3,"tab_id":7,"title":"a"},{"pane_id":9,"tab_id":2,"title":"b"}]'; fi"#;
    let wezterm = fake_binary(dir.path(), "wezterm", &log, body);

    let activator = RecordingActivator::default();
    let focuser = Focuser::with_parts(
        ProcessExecutor::new(),
        &activator,
        config(dir.path(), None, Some(&wezterm)),
    );
    focuser.focus(&FocusRequest::new(TerminalKind::WezTerm, "main", "build").with_pane("9"));

    assert_eq!(*activator.0.lock().expect("lock"), vec!["com.github.wez.wezterm"]);
    assert_eq!(
        read_log(&log),
        vec![
            "cli list --format json",
            "cli activate-tab --tab-id 2",
            "cli activate-pane --pane-id 9",
        ]
    );
}

#[test]
fn wezterm_stale_pane_issues_no_activation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    let body = r#"echo '[{"pane_id":3,"tab_id":7},{"pane_id":9,"tab_id":2}]'"#;
    let wezterm = fake_binary(dir.path(), "wezterm", &log, body);

    let focuser = Focuser::with_parts(
        ProcessExecutor::new(),
        RecordingActivator::default(),
        config(dir.path(), None, Some(&wezterm)),
    );
    focuser.focus(&FocusRequest::new(TerminalKind::WezTerm, "main", "build").with_pane("42"));

    assert_eq!(read_log(&log), vec!["cli list --format json"]);
}

#[test]
fn executor_timeout_alone_bounds_hung_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    let zellij = fake_binary(dir.path(), "zellij", &log, "sleep 10");

    let focuser = Focuser::with_parts(
        ProcessExecutor::new().with_timeout(Some(Duration::from_millis(100))),
        RecordingActivator::default(),
        config(dir.path(), Some(&zellij), None),
    );
    let started = std::time::Instant::now();
    focuser.focus(&FocusRequest::new(TerminalKind::Kitty, "main", "build").with_pane("1"));

    assert!(started.elapsed() < Duration::from_secs(5));
    // Timed-out tab switch counts as failure: no pipe call.
    assert_eq!(read_log(&log), vec!["--session main action go-to-tab-name build"]);
}

#[test]
fn wezterm_list_leaving_mux_server_behind_is_bounded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log = dir.path().join("calls.log");
    // The background sleep inherits stdout, like an auto-started mux server.
    let body = r#"if [ "$2" = "list" ]; then sleep 10 & echo '[{"pane_id":9,"tab_id":2}]'; fi"#;
    let wezterm = fake_binary(dir.path(), "wezterm", &log, body);

    let focuser = Focuser::with_parts(
        ProcessExecutor::new().with_timeout(Some(Duration::from_millis(200))),
        RecordingActivator::default(),
        config(dir.path(), None, Some(&wezterm)),
    );
    let started = std::time::Instant::now();
    focuser.focus(&FocusRequest::new(TerminalKind::WezTerm, "main", "build").with_pane("9"));

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(read_log(&log), vec!["cli list --format json"]);
}
