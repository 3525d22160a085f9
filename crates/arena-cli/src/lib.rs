//! arena-cli: command-line front end for the arena simulation
//!
//! Maps flags onto [`ArenaConfig`](arena_core::ArenaConfig), supplies a
//! built-in monster roster for man-vs-monster runs and prints reports as text
//! or JSON.

mod args;
mod output;
mod roster;

use std::io;

use thiserror::Error;

use arena_core::ArenaError;

pub use args::Args;
pub use output::write_report;
pub use roster::default_roster;

/// Anything that can stop the command-line run
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<arena_core::ConfigError> for CliError {
    fn from(err: arena_core::ConfigError) -> Self {
        CliError::Arena(err.into())
    }
}
