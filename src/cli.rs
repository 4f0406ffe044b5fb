//! CLI command implementations for notopoly.

pub(crate) mod board;
pub(crate) mod play;
pub(crate) mod script;

mod output;

use clap::{Args, ValueEnum};
use notopoly::{BoardError, Money, RuleConfig, TurnRule};
use std::error::Error;
use std::fmt;

/// Output format for the `script` and `board` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Rule switches shared by the commands that run a game.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct RuleArgs {
    /// Let a doubles roll earn another roll
    #[arg(long)]
    doubles: bool,

    /// Charge rent when landing on another player's property
    #[arg(long)]
    rent: bool,

    /// Starting money for each player
    #[arg(long, default_value = "1500")]
    money: Money,
}

impl RuleArgs {
    /// The rule configuration these flags describe.
    pub(crate) fn to_config(self) -> RuleConfig {
        RuleConfig {
            turn_rule: if self.doubles {
                TurnRule::ExtraRollOnDoubles
            } else {
                TurnRule::SingleMove
            },
            collect_rent: self.rent,
            starting_money: self.money,
            ..RuleConfig::default()
        }
    }
}

/// The given seed, or one taken from the clock.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn seed_or_clock(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    })
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<BoardError> for CliError {
    fn from(e: BoardError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("JSON serialization failed: {e}"))
    }
}
