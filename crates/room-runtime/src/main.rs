//! room: focus the terminal pane a notification points at.
//!
//! `room focus` never fails once its arguments parse; focus problems are
//! only visible with `ROOM_LOG=debug`.

use clap::Parser;

mod cli;
mod cmd_focus;
mod doctor;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("ROOM_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        cli::Command::Focus(opts) => {
            cmd_focus::cmd_focus(&opts)?;
        }
        cli::Command::Doctor(opts) => {
            let config = cmd_focus::resolve_config(&opts.backend);
            let exit_code = doctor::run_doctor(&config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
