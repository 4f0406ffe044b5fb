#![no_main]

//! Full game fuzzer.
//!
//! This fuzz target drives a session through arbitrary key presses under
//! arbitrary rules and starting positions, checking after every action that:
//! 1. A refused action leaves the state unchanged
//! 2. Money moves only by purchase price, Go bonus or rent
//! 3. The game invariants hold

use std::sync::Arc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notopoly::game::{BOARD_SIZE, check_invariants};
use notopoly::{Action, Board, GameState, Player, RuleConfig, Session, TurnRule};

/// A fuzzer-generated key press.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzAction {
    Move,
    Buy,
    EndTurn,
}

impl From<FuzzAction> for Action {
    fn from(action: FuzzAction) -> Self {
        match action {
            FuzzAction::Move => Action::Move,
            FuzzAction::Buy => Action::Buy,
            FuzzAction::EndTurn => Action::EndTurn,
        }
    }
}

/// Structured input for game fuzzing.
#[derive(Arbitrary, Debug)]
struct GameInput {
    /// Dice seed.
    seed: u64,
    /// Number of players (capped to 1..=6).
    players: u8,
    /// Starting money for each player.
    money: [i16; 6],
    /// Starting position for each player.
    positions: [u8; 6],
    /// Let doubles earn another roll.
    doubles: bool,
    /// Charge rent on landing.
    rent: bool,
    /// Key presses.
    actions: Vec<FuzzAction>,
}

fuzz_target!(|input: GameInput| {
    let Ok(board) = Board::generate() else {
        return;
    };

    let rules = RuleConfig {
        turn_rule: if input.doubles {
            TurnRule::ExtraRollOnDoubles
        } else {
            TurnRule::SingleMove
        },
        collect_rent: input.rent,
        ..RuleConfig::default()
    };

    let count = usize::from(input.players % 6) + 1;
    let players: Vec<Player> = (0..count)
        .map(|i| {
            let mut player = Player::new(format!("p{i}"), "🎲", i64::from(input.money[i]));
            player.position = usize::from(input.positions[i]) % BOARD_SIZE;
            player
        })
        .collect();

    let Some(state) = GameState::new(Arc::new(board), players, rules) else {
        return;
    };
    let mut session = Session::new(state, input.seed);

    let violations = check_invariants(session.state());
    assert!(violations.is_empty(), "Invariants violated at start: {violations:?}");

    for (step, &action) in input.actions.iter().take(500).enumerate() {
        let before = session.state().clone();
        let total_before: i64 = before.players().iter().map(|p| p.money).sum();

        match session.act(action.into()) {
            Ok(()) => {
                let after = session.state();
                let total_after: i64 = after.players().iter().map(|p| p.money).sum();
                let delta = total_after - total_before;
                match Action::from(action) {
                    // Rent moves money between players; only the Go bonus creates it
                    Action::Move => assert!(
                        delta == 0 || delta == rules.pass_go_bonus,
                        "step {step}: move changed total money by {delta}"
                    ),
                    Action::Buy => {
                        let cost = before.current_property().cost.unwrap_or_default();
                        assert_eq!(delta, -cost, "step {step}: purchase accounting");
                    }
                    Action::EndTurn => assert_eq!(delta, 0, "step {step}: end turn moved money"),
                }
            }
            Err(_) => assert_eq!(session.state(), &before, "step {step}: refusal changed state"),
        }

        let violations = check_invariants(session.state());
        assert!(
            violations.is_empty(),
            "Invariants violated after step {step}: {violations:?}"
        );
    }
});
