// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! notopoly: a deterministic, totally-not-Monopoly board game.
//!
//! This crate provides the game engine behind the `notopoly` terminal game:
//! - A fixed 40-cell board generated from seeded names
//! - Pure state transitions for moving, buying and ending a turn
//! - Rent computation with monopoly doubling
//! - A session that rolls seeded dice and logs what happened
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │        Terminal UI / CLI            │
//! ├─────────────────────────────────────┤
//! │     Session (dice, event log)       │
//! ├─────────────────────────────────────┤
//! │   GameState transitions (pure)      │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod rng;
pub mod session;

pub use error::{ActionError, ActionResult, BoardError};

// Re-export key game types at crate root for convenience
pub use game::{Action, Board, GameState, Money, Player, PlayerId, Property, RuleConfig, TurnRule};
pub use rng::{DiceRoll, Rng};
pub use session::Session;
