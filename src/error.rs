//! Error types for game actions.

use std::fmt;

use crate::game::{Money, PlayerId};

/// Reasons an action is refused.
///
/// A refused action leaves the game state untouched; the variants exist so the
/// front end can tell the player why nothing happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The active player may not roll again this turn.
    AlreadyMoved,
    /// The active player tried to end the turn without rolling.
    MustMoveFirst,
    /// The cell has no purchase price (Go).
    Unpurchasable {
        /// Name of the cell.
        name: String,
    },
    /// The buyer's money does not strictly exceed the cost.
    InsufficientFunds {
        /// Purchase price of the property.
        cost: Money,
        /// Money the buyer has.
        money: Money,
    },
    /// Another player (or the buyer) already owns the property.
    AlreadyOwned {
        /// Index of the owning player.
        owner: PlayerId,
    },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::AlreadyMoved => write!(f, "you have already moved this turn"),
            ActionError::MustMoveFirst => write!(f, "please move before ending your turn"),
            ActionError::Unpurchasable { name } => write!(f, "you can't buy {name}..."),
            ActionError::InsufficientFunds { cost, money } => {
                write!(f, "ur too broke to buy this property -_- (costs {cost}, you have {money})")
            }
            ActionError::AlreadyOwned { .. } => write!(f, "someone already owns this property"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Result type for game actions.
pub type ActionResult<T> = Result<T, ActionError>;

/// Board generation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardError {
    /// Description of the error.
    pub reason: String,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board generation error: {}", self.reason)
    }
}

impl std::error::Error for BoardError {}
