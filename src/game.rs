//! Game layer for notopoly.
//!
//! Implements the rules of the board game:
//! - Board of 40 cells with generated names, prices and rent tables
//! - Players with positions, money and owned properties
//! - Turn control (move, buy, end turn)
//! - Rent computation
//! - Invariant checks

mod action;
mod board;
mod invariants;
mod names;
mod player;
mod rent;
mod state;
mod turn;

pub use action::Action;
pub use board::{
    BOARD_SIZE, Board, GO_INDEX, GO_NAME, GROUP_SIZE, Group, GroupId, MAX_HOUSES, Money,
    NUM_GROUPS, Property,
};
pub use invariants::{InvariantViolation, check_invariants};
pub use names::{COUNTRIES, MAX_NAME_SEEDS, name_for_seed, unique_names};
pub use player::{OwnedProperty, Player, PlayerId, STARTING_MONEY};
pub use rent::{has_monopoly, rent_amount};
pub use state::{GameState, PASS_GO_BONUS, RuleConfig};
pub use turn::{TurnPhase, TurnRule, TurnState};
