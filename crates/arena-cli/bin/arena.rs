//! OED Arena
//!
//! Main entry point for the simulator.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use arena_cli::{Args, CliError, default_roster, write_report};
use arena_core::{Arena, FightMode};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("arena: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so reports on stdout stay clean. RUST_LOG wins unless
/// -v was given.
fn init_tracing(args: &Args) {
    let filter = if args.verbose == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()))
    } else {
        EnvFilter::new(args.log_level())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    // Reject bad flags before any fighting starts
    let config = args.config()?;
    let options = args.report_options()?;

    let mut arena = Arena::new(config)?;
    if arena.config().mode == FightMode::ManVsMonster {
        arena.set_opponents(default_roster());
    }
    let report = arena.run()?;
    debug!(json = args.json, ?options, "writing report");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &report, options)?;
    }
    out.flush()?;
    Ok(())
}
