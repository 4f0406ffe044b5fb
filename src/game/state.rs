//! Game state and its transitions.
//!
//! Every transition borrows the current state and returns a new one; the old
//! state is never touched. A refused transition returns an [`ActionError`]
//! and the caller simply keeps the state it had.

use std::sync::Arc;

use serde::Serialize;

use crate::error::{ActionError, ActionResult, BoardError};
use crate::game::{
    Action, Board, Money, OwnedProperty, Player, PlayerId, Property, STARTING_MONEY, TurnRule,
    TurnState, rent_amount,
};
use crate::rng::DiceRoll;

/// Money credited for wrapping past Go.
pub const PASS_GO_BONUS: Money = 200;

/// Rule switches for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    /// Whether doubles earn another roll.
    pub turn_rule: TurnRule,
    /// Charge rent when landing on another player's property.
    pub collect_rent: bool,
    /// Credited when a move wraps past Go.
    pub pass_go_bonus: Money,
    /// Balance each default player starts with.
    pub starting_money: Money,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            turn_rule: TurnRule::default(),
            collect_rent: false,
            pass_go_bonus: PASS_GO_BONUS,
            starting_money: STARTING_MONEY,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Arc<Board>,
    players: Vec<Player>,
    turn: TurnState,
    rules: RuleConfig,
}

impl GameState {
    /// Create a game on `board` with the given players, player 0 to move.
    ///
    /// Returns `None` if `players` is empty, or if any player stands on or
    /// owns a cell that is not on `board`.
    #[must_use]
    pub fn new(board: Arc<Board>, players: Vec<Player>, rules: RuleConfig) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        let on_board = |index: usize| index < board.len();
        let all_on_board = players
            .iter()
            .all(|p| on_board(p.position) && p.properties.iter().all(|o| on_board(o.index)));
        if !all_on_board {
            return None;
        }
        Some(Self {
            board,
            players,
            turn: TurnState::new(),
            rules,
        })
    }

    /// The standard two-player game on the generated board.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be generated.
    pub fn standard(rules: RuleConfig) -> Result<Self, BoardError> {
        let board = Arc::new(Board::generate()?);
        Ok(Self {
            board,
            players: Player::default_players(rules.starting_money),
            turn: TurnState::new(),
            rules,
        })
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get a player by index.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Turn bookkeeping.
    #[must_use]
    pub const fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Rules in effect.
    #[must_use]
    pub const fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Index of the player whose turn it is.
    #[must_use]
    pub const fn active_id(&self) -> PlayerId {
        self.turn.active()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.turn.active()]
    }

    /// The cell under the active player.
    #[must_use]
    pub fn current_property(&self) -> &Property {
        &self.board.properties()[self.active_player().position]
    }

    /// Who owns the property at `index`, found by scanning every player.
    #[must_use]
    pub fn owner_of(&self, index: usize) -> Option<PlayerId> {
        self.players.iter().position(|p| p.owns(index))
    }

    /// Rent `payer` would owe for standing on `index`: the owner and amount.
    ///
    /// `None` when the cell is unowned or owned by `payer`.
    #[must_use]
    pub fn rent_due(&self, payer: PlayerId, index: usize) -> Option<(PlayerId, Money)> {
        let owner = self.owner_of(index)?;
        if owner == payer {
            return None;
        }
        let amount = rent_amount(&self.board, &self.players[owner], index)?;
        Some((owner, amount))
    }

    /// Check that the active player may roll.
    ///
    /// # Errors
    ///
    /// [`ActionError::AlreadyMoved`] when no further roll is allowed this turn.
    pub const fn can_move(&self) -> ActionResult<()> {
        if self.turn.can_roll() {
            Ok(())
        } else {
            Err(ActionError::AlreadyMoved)
        }
    }

    /// Check that `buyer` may buy the property at `index`; returns its cost.
    ///
    /// # Errors
    ///
    /// Returns why the purchase is refused: unpurchasable cell, cost not
    /// strictly below the buyer's money, or an existing owner.
    pub fn check_purchase(&self, buyer: PlayerId, index: usize) -> ActionResult<Money> {
        let property = &self.board.properties()[index];
        let Some(cost) = property.cost else {
            return Err(ActionError::Unpurchasable {
                name: property.name.clone(),
            });
        };
        let money = self.players[buyer].money;
        if cost >= money {
            return Err(ActionError::InsufficientFunds { cost, money });
        }
        if let Some(owner) = self.owner_of(index) {
            return Err(ActionError::AlreadyOwned { owner });
        }
        Ok(cost)
    }

    /// Check that the active player may buy the cell they stand on.
    ///
    /// # Errors
    ///
    /// See [`GameState::check_purchase`].
    pub fn can_buy(&self) -> ActionResult<Money> {
        self.check_purchase(self.active_id(), self.active_player().position)
    }

    /// Check that the active player may end the turn.
    ///
    /// # Errors
    ///
    /// [`ActionError::MustMoveFirst`] before the first roll of the turn.
    pub const fn can_end_turn(&self) -> ActionResult<()> {
        if self.turn.has_moved() {
            Ok(())
        } else {
            Err(ActionError::MustMoveFirst)
        }
    }

    /// Move the active player by `roll`.
    ///
    /// Wrapping past Go credits the bonus. With rent collection on, landing
    /// on another player's property pays them rent.
    ///
    /// # Errors
    ///
    /// [`ActionError::AlreadyMoved`] when no further roll is allowed this turn.
    pub fn move_player(&self, roll: DiceRoll) -> ActionResult<Self> {
        self.can_move()?;

        let id = self.active_id();
        let player = &self.players[id];
        let position = self.board.advance(player.position, usize::from(roll.total()));
        let bonus = if position < player.position {
            self.rules.pass_go_bonus
        } else {
            0
        };
        let moved = Player {
            position,
            ..player.with_money_delta(bonus)
        };

        let mut next = Self {
            players: self.with_player(id, moved),
            turn: self.turn.after_roll(roll, self.rules.turn_rule),
            ..self.clone()
        };

        if self.rules.collect_rent
            && let Some((owner, amount)) = next.rent_due(id, position)
        {
            next.players = next.transfer(id, owner, amount);
        }

        Ok(next)
    }

    /// Buy the cell under the active player.
    ///
    /// # Errors
    ///
    /// See [`GameState::check_purchase`].
    pub fn buy(&self) -> ActionResult<Self> {
        let cost = self.can_buy()?;
        let id = self.active_id();
        let player = &self.players[id];
        let bought = player
            .with_money_delta(-cost)
            .with_property(&self.board, OwnedProperty::new(player.position));

        Ok(Self {
            players: self.with_player(id, bought),
            ..self.clone()
        })
    }

    /// Pass the turn to the next player.
    ///
    /// # Errors
    ///
    /// [`ActionError::MustMoveFirst`] before the first roll of the turn.
    pub fn end_turn(&self) -> ActionResult<Self> {
        self.can_end_turn()?;
        Ok(Self {
            turn: self.turn.next_turn(self.players.len()),
            ..self.clone()
        })
    }

    /// Apply an action. `roll` is only called for a permitted move.
    ///
    /// # Errors
    ///
    /// Returns the reason the action is refused.
    pub fn apply(&self, action: Action, roll: impl FnOnce() -> DiceRoll) -> ActionResult<Self> {
        match action {
            Action::Move => {
                self.can_move()?;
                self.move_player(roll())
            }
            Action::Buy => self.buy(),
            Action::EndTurn => self.end_turn(),
        }
    }

    /// Check whether `action` would currently be accepted.
    ///
    /// # Errors
    ///
    /// Returns the reason the action would be refused.
    pub fn check(&self, action: Action) -> ActionResult<()> {
        match action {
            Action::Move => self.can_move(),
            Action::Buy => self.can_buy().map(|_| ()),
            Action::EndTurn => self.can_end_turn(),
        }
    }

    /// Player list with the record at `id` replaced.
    fn with_player(&self, id: PlayerId, player: Player) -> Vec<Player> {
        let mut players = self.players.clone();
        players[id] = player;
        players
    }

    /// Player list after `from` pays `amount` to `to`.
    fn transfer(&self, from: PlayerId, to: PlayerId, amount: Money) -> Vec<Player> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if i == from {
                    p.with_money_delta(-amount)
                } else if i == to {
                    p.with_money_delta(amount)
                } else {
                    p.clone()
                }
            })
            .collect()
    }
}
