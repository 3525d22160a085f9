//! Error types for the arena engine
//!
//! Each failure class is its own enum; [`ArenaError`] wraps them for callers
//! that only need one error type.

use thiserror::Error;

/// Malformed dice notation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    #[error("empty dice expression")]
    Empty,

    #[error("missing 'd' in dice expression \"{0}\"")]
    MissingDie(String),

    #[error("invalid number in dice expression \"{0}\"")]
    InvalidNumber(String),

    #[error("dice need at least one side: \"{0}\"")]
    ZeroSides(String),

    #[error("zero multiplier or divisor in dice expression \"{0}\"")]
    ZeroScale(String),

    #[error("unexpected \"{rest}\" after dice expression \"{text}\"")]
    TrailingInput { text: String, rest: String },
}

/// Invalid simulation configuration, reported before a run starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1, got {value}")]
    ZeroCount { field: &'static str, value: u32 },

    #[error("unknown armor code {0} (expected 0=none, 1=leather, 2=chain, 3=plate)")]
    UnknownArmorCode(i64),

    #[error("unknown report code '{0}' (expected one of s, d, k, t, x, y)")]
    UnknownReportCode(char),

    #[error("man-vs-monster mode needs an opponent source")]
    MissingOpponentSource,
}

/// Aggregate query on a population that cannot answer it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartyError {
    #[error("population is empty")]
    EmptyPopulation,
}

/// Any error the engine can report
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    #[error("dice error: {0}")]
    Dice(#[from] DiceParseError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("population error: {0}")]
    Party(#[from] PartyError),
}
