//! A running game: the current state, the dice, and a log of what happened.
//!
//! [`GameState`] transitions are pure and take their dice as input. A
//! `Session` supplies those dice from a seeded [`Rng`], keeps the latest
//! state, and records a human-readable line for every accepted or refused
//! action. Two sessions with the same seed and the same actions end in the
//! same state.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{ActionError, ActionResult, BoardError};
use crate::game::{Action, GameState, RuleConfig};
use crate::rng::Rng;

/// Number of log lines kept.
pub const LOG_CAPACITY: usize = 64;

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    rng: Rng,
    seed: u64,
    actions: u32,
    log: VecDeque<String>,
}

impl Session {
    /// Start a session from an existing state, rolling dice from `seed`.
    #[must_use]
    pub fn new(state: GameState, seed: u64) -> Self {
        Self {
            state,
            rng: Rng::new(seed),
            seed,
            actions: 0,
            log: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    /// Start the standard two-player game.
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be generated.
    pub fn standard(rules: RuleConfig, seed: u64) -> Result<Self, BoardError> {
        Ok(Self::new(GameState::standard(rules)?, seed))
    }

    /// Current game state.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Seed the dice were started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of accepted actions so far.
    #[must_use]
    pub const fn accepted_actions(&self) -> u32 {
        self.actions
    }

    /// Log lines, oldest first.
    pub fn log(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Perform an action for the active player.
    ///
    /// Dice are drawn only for a move that is allowed. On refusal the state
    /// is unchanged and the reason is logged.
    ///
    /// # Errors
    ///
    /// Returns why the action was refused.
    pub fn act(&mut self, action: Action) -> ActionResult<()> {
        let rng = &mut self.rng;
        match self.state.apply(action, || rng.roll()) {
            Ok(next) => {
                for line in describe(&self.state, &next, action) {
                    debug!("{line}");
                    self.push_log(line);
                }
                self.state = next;
                self.actions += 1;
                Ok(())
            }
            Err(err) => {
                let name = &self.state.active_player().name;
                trace!("{name} tried to {action}: {err}");
                let line = format!("{name}: {err}");
                self.push_log(line);
                Err(err)
            }
        }
    }

    /// Perform the action bound to `key`, if any.
    ///
    /// Returns `None` for keys with no binding.
    pub fn act_key(&mut self, key: char) -> Option<Result<(), ActionError>> {
        Action::from_key(key).map(|action| self.act(action))
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }
}

/// Log lines describing the step from `before` to `after`.
fn describe(before: &GameState, after: &GameState, action: Action) -> Vec<String> {
    let id = before.active_id();
    let old = &before.players()[id];
    let new = &after.players()[id];
    let mut lines = Vec::new();

    match action {
        Action::Move => {
            let cell = &after.board().properties()[new.position];
            if let Some(roll) = after.turn().last_roll() {
                lines.push(format!("{} rolled {roll} and landed on {}", new.name, cell.name));
            }
            if new.position < old.position {
                lines.push(format!(
                    "{} passed Go and collected {}",
                    new.name,
                    after.rules().pass_go_bonus
                ));
            }
            if after.rules().collect_rent
                && let Some((owner, amount)) = after.rent_due(id, new.position)
            {
                lines.push(format!(
                    "{} paid {amount} rent to {}",
                    new.name,
                    after.players()[owner].name
                ));
            }
            if after.turn().can_roll() {
                lines.push(format!("doubles! {} may roll again", new.name));
            }
        }
        Action::Buy => {
            let cell = &before.board().properties()[old.position];
            lines.push(format!(
                "{} bought {} for {}",
                new.name,
                cell.name,
                old.money - new.money
            ));
        }
        Action::EndTurn => {
            let next = after.active_player();
            lines.push(format!("it is {}'s ({}) turn", next.name, next.token));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TurnRule;

    fn session(seed: u64) -> Session {
        Session::standard(RuleConfig::default(), seed).unwrap()
    }

    #[test]
    fn test_session_starts_clean() {
        let session = session(42);
        assert_eq!(session.seed(), 42);
        assert_eq!(session.accepted_actions(), 0);
        assert_eq!(session.log().count(), 0);
    }

    #[test]
    fn test_move_then_end_turn() {
        let mut session = session(42);
        session.act(Action::Move).unwrap();
        assert!(session.state().turn().has_moved());
        assert!(session.log().next().unwrap().starts_with("alice rolled"));

        session.act(Action::EndTurn).unwrap();
        assert_eq!(session.state().active_id(), 1);
        assert_eq!(session.log().next_back(), Some("it is bob's (😎) turn"));
        assert_eq!(session.accepted_actions(), 2);
    }

    #[test]
    fn test_refused_action_is_logged_and_harmless() {
        let mut session = session(42);
        let before = session.state().clone();
        assert_eq!(session.act(Action::EndTurn), Err(ActionError::MustMoveFirst));
        assert_eq!(session.state(), &before);
        assert_eq!(
            session.log().next_back(),
            Some("alice: please move before ending your turn")
        );
        assert_eq!(session.accepted_actions(), 0);
    }

    #[test]
    fn test_refused_move_does_not_consume_dice() {
        let mut a = session(9);
        let mut b = session(9);

        a.act(Action::Move).unwrap();
        let _ = a.act(Action::Move);
        a.act(Action::EndTurn).unwrap();
        a.act(Action::Move).unwrap();

        b.act(Action::Move).unwrap();
        b.act(Action::EndTurn).unwrap();
        b.act(Action::Move).unwrap();

        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_same_seed_same_game() {
        let keys = "12312312312323123";
        let mut a = session(7);
        let mut b = session(7);
        for key in keys.chars() {
            let _ = a.act_key(key);
            let _ = b.act_key(key);
        }
        assert_eq!(a.state(), b.state());
        assert_eq!(a.log().collect::<Vec<_>>(), b.log().collect::<Vec<_>>());
    }

    #[test]
    fn test_unbound_key() {
        let mut session = session(1);
        assert!(session.act_key('x').is_none());
        assert!(session.act_key('1').is_some());
    }

    #[test]
    fn test_log_is_bounded() {
        let mut session = session(3);
        for _ in 0..(LOG_CAPACITY * 2) {
            let _ = session.act(Action::EndTurn);
        }
        assert_eq!(session.log().count(), LOG_CAPACITY);
    }

    #[test]
    fn test_doubles_rule_in_session() {
        let rules = RuleConfig {
            turn_rule: TurnRule::ExtraRollOnDoubles,
            ..RuleConfig::default()
        };
        let mut session = Session::standard(rules, 11).unwrap();
        for _ in 0..100 {
            session.act(Action::Move).unwrap();
            let doubles = session.state().turn().last_roll().is_some_and(|r| r.is_doubles());
            assert_eq!(session.state().turn().can_roll(), doubles);
            if !doubles {
                session.act(Action::EndTurn).unwrap();
            }
        }
    }
}
