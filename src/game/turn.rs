//! Turn control: whose turn it is and what they may still do.

use serde::Serialize;

use crate::game::PlayerId;
use crate::rng::DiceRoll;

/// How many times a player may move in one turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum TurnRule {
    /// Exactly one move per turn, doubles or not.
    #[default]
    SingleMove,
    /// A doubles roll lets the player roll again, with no limit.
    ExtraRollOnDoubles,
}

/// Coarse turn phase, as shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TurnPhase {
    /// The active player has not rolled yet.
    AwaitingMove,
    /// The active player has rolled at least once and may end the turn.
    Moved,
}

/// Per-turn bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    active: PlayerId,
    rolls: u32,
    can_roll: bool,
    last_roll: Option<DiceRoll>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    /// Player 0 to move.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: 0,
            rolls: 0,
            can_roll: true,
            last_roll: None,
        }
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub const fn active(&self) -> PlayerId {
        self.active
    }

    /// Rolls taken so far this turn.
    #[must_use]
    pub const fn rolls_this_turn(&self) -> u32 {
        self.rolls
    }

    /// Whether a move is currently allowed.
    #[must_use]
    pub const fn can_roll(&self) -> bool {
        self.can_roll
    }

    /// Whether the active player has moved this turn (and so may end it).
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.rolls > 0
    }

    /// The most recent roll this turn.
    #[must_use]
    pub const fn last_roll(&self) -> Option<DiceRoll> {
        self.last_roll
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TurnPhase {
        if self.has_moved() {
            TurnPhase::Moved
        } else {
            TurnPhase::AwaitingMove
        }
    }

    /// State after the active player rolls `roll`.
    #[must_use]
    pub const fn after_roll(self, roll: DiceRoll, rule: TurnRule) -> Self {
        let can_roll = match rule {
            TurnRule::SingleMove => false,
            TurnRule::ExtraRollOnDoubles => roll.is_doubles(),
        };
        Self {
            rolls: self.rolls + 1,
            can_roll,
            last_roll: Some(roll),
            ..self
        }
    }

    /// State at the start of the next player's turn.
    #[must_use]
    pub const fn next_turn(self, player_count: usize) -> Self {
        Self {
            active: (self.active + 1) % player_count,
            ..Self::new()
        }
    }
}
