//! Property-based tests for game mechanics.
//!
//! These tests verify movement, purchasing and turn control over random
//! positions, dice and action sequences.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use proptest::prelude::*;

use notopoly::game::{BOARD_SIZE, OwnedProperty, TurnPhase, check_invariants};
use notopoly::{
    Action, ActionError, Board, DiceRoll, GameState, Player, RuleConfig, Session, TurnRule,
};

fn board() -> Arc<Board> {
    Arc::new(Board::generate().unwrap())
}

/// A two-player game with alice standing on `position` holding `money`.
fn game_at(position: usize, money: i64, rules: RuleConfig) -> GameState {
    let mut alice = Player::new("alice", "🥶", money);
    alice.position = position;
    let bob = Player::new("bob", "😎", 1500);
    GameState::new(board(), vec![alice, bob], rules).unwrap()
}

fn roll_strategy() -> impl Strategy<Value = DiceRoll> {
    (1u8..=6, 1u8..=6).prop_map(|(a, b)| DiceRoll::new(a, b).unwrap())
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Move), Just(Action::Buy), Just(Action::EndTurn)]
}

fn rules_strategy() -> impl Strategy<Value = RuleConfig> {
    (any::<bool>(), any::<bool>()).prop_map(|(doubles, rent)| RuleConfig {
        turn_rule: if doubles {
            TurnRule::ExtraRollOnDoubles
        } else {
            TurnRule::SingleMove
        },
        collect_rent: rent,
        ..RuleConfig::default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// A move lands exactly `total` cells ahead and pays the bonus only on wrap.
    #[test]
    fn prop_move_wraps_and_pays_bonus(
        position in 0usize..BOARD_SIZE,
        roll in roll_strategy()
    ) {
        let state = game_at(position, 1500, RuleConfig::default());
        let next = state.move_player(roll).unwrap();
        let moved = &next.players()[0];

        let expected = (position + usize::from(roll.total())) % BOARD_SIZE;
        prop_assert_eq!(moved.position, expected);

        let bonus = if expected < position { 200 } else { 0 };
        prop_assert_eq!(moved.money, 1500 + bonus);

        // Only the active player changed
        prop_assert_eq!(&next.players()[1], &state.players()[1]);
        prop_assert_eq!(next.turn().phase(), TurnPhase::Moved);
    }

    /// A single-move turn refuses a second move whatever the dice.
    #[test]
    fn prop_single_move_refuses_second_roll(
        position in 0usize..BOARD_SIZE,
        first in roll_strategy(),
        second in roll_strategy()
    ) {
        let state = game_at(position, 1500, RuleConfig::default());
        let moved = state.move_player(first).unwrap();
        prop_assert_eq!(moved.move_player(second), Err(ActionError::AlreadyMoved));
    }

    /// With the doubles rule, another roll is allowed exactly after doubles.
    #[test]
    fn prop_doubles_grant_extra_roll(
        position in 0usize..BOARD_SIZE,
        roll in roll_strategy()
    ) {
        let rules = RuleConfig {
            turn_rule: TurnRule::ExtraRollOnDoubles,
            ..RuleConfig::default()
        };
        let state = game_at(position, 1500, rules);
        let moved = state.move_player(roll).unwrap();
        prop_assert_eq!(moved.can_move().is_ok(), roll.is_doubles());
        prop_assert!(moved.can_end_turn().is_ok());
    }

    /// Buying conserves money: the buyer pays exactly the cost.
    #[test]
    fn prop_buy_deducts_cost(
        position in 1usize..BOARD_SIZE,
        money in 0i64..3000
    ) {
        let state = game_at(position, money, RuleConfig::default());
        let cost = state.board().properties()[position].cost.unwrap();

        match state.buy() {
            Ok(next) => {
                prop_assert!(cost < money);
                let buyer = &next.players()[0];
                prop_assert_eq!(buyer.money, money - cost);
                prop_assert!(buyer.owns(position));
                prop_assert_eq!(next.owner_of(position), Some(0));
                // Buying again is refused
                prop_assert!(next.buy().is_err());
            }
            Err(err) => {
                prop_assert!(cost >= money);
                prop_assert_eq!(err, ActionError::InsufficientFunds { cost, money });
            }
        }
    }

    /// Go can never be bought.
    #[test]
    fn prop_go_unpurchasable(money in 0i64..1_000_000) {
        let state = game_at(0, money, RuleConfig::default());
        let is_unpurchasable = matches!(state.buy(), Err(ActionError::Unpurchasable { .. }));
        prop_assert!(is_unpurchasable);
    }

    /// Ending the turn is refused before moving and always allowed after.
    #[test]
    fn prop_end_turn_requires_move(
        position in 0usize..BOARD_SIZE,
        roll in roll_strategy()
    ) {
        let state = game_at(position, 1500, RuleConfig::default());
        prop_assert_eq!(state.end_turn(), Err(ActionError::MustMoveFirst));

        let ended = state.move_player(roll).unwrap().end_turn().unwrap();
        prop_assert_eq!(ended.active_id(), 1);
        prop_assert_eq!(ended.turn().phase(), TurnPhase::AwaitingMove);
        prop_assert!(ended.turn().last_roll().is_none());
    }

    /// A refused action reports the same error as the matching check.
    #[test]
    fn prop_check_matches_apply(
        position in 0usize..BOARD_SIZE,
        money in 0i64..3000,
        action in action_strategy()
    ) {
        let state = game_at(position, money, RuleConfig::default());
        let roll = DiceRoll::new(2, 3).unwrap();
        match state.apply(action, || roll) {
            Ok(_) => prop_assert!(state.check(action).is_ok()),
            Err(err) => prop_assert_eq!(state.check(action), Err(err)),
        }
    }

    /// Random key sequences never break the invariants.
    #[test]
    fn prop_sessions_keep_invariants(
        seed in any::<u64>(),
        rules in rules_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..300)
    ) {
        let mut session = Session::standard(rules, seed).unwrap();
        for action in actions {
            let before = session.state().clone();
            if session.act(action).is_err() {
                // Refusal leaves the state untouched
                prop_assert_eq!(session.state(), &before);
            }
            let violations = check_invariants(session.state());
            prop_assert!(violations.is_empty(), "violations: {:?}", violations);
        }
    }

    /// Owned properties stay sorted by group whatever the purchase order.
    #[test]
    fn prop_owned_sorted_by_group(
        indices in prop::collection::vec(1usize..BOARD_SIZE, 1..20)
    ) {
        let board = board();
        let mut player = Player::new("alice", "🥶", 1_000_000);
        for index in indices {
            if !player.owns(index) {
                player = player.with_property(&board, OwnedProperty::new(index));
            }
        }
        let groups: Vec<_> = player
            .properties
            .iter()
            .map(|owned| board.properties()[owned.index].group)
            .collect();
        prop_assert!(groups.windows(2).all(|w| w[0] <= w[1]));
    }
}
