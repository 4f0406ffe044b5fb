//! Game invariants - sanity checks that detect bugs.
//!
//! No sequence of accepted actions should ever break these. They are bug
//! detectors used by the tests and the fuzzer, not gameplay rules.

use std::collections::HashMap;

use crate::game::{BOARD_SIZE, GO_INDEX, GameState, MAX_HOUSES};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let board = state.board();

    if board.len() != BOARD_SIZE {
        violations.push(InvariantViolation {
            message: format!("Board has {} cells, expected {BOARD_SIZE}", board.len()),
        });
    }

    let grouped: usize = board.groups().iter().map(|g| g.count).sum();
    if grouped != BOARD_SIZE - 1 {
        violations.push(InvariantViolation {
            message: format!("Groups cover {grouped} cells, expected {}", BOARD_SIZE - 1),
        });
    }

    if state.active_id() >= state.players().len() {
        violations.push(InvariantViolation {
            message: format!(
                "Active player {} out of range for {} players",
                state.active_id(),
                state.players().len()
            ),
        });
    }

    let mut owners: HashMap<usize, usize> = HashMap::new();

    for (id, player) in state.players().iter().enumerate() {
        if player.position >= board.len() {
            violations.push(InvariantViolation {
                message: format!("{} is at position {} off the board", player.name, player.position),
            });
        }

        for pair in player.properties.windows(2) {
            let first = board.get(pair[0].index).and_then(|p| p.group);
            let second = board.get(pair[1].index).and_then(|p| p.group);
            if first > second {
                violations.push(InvariantViolation {
                    message: format!("{}'s properties are not sorted by group", player.name),
                });
            }
        }

        for owned in &player.properties {
            if owned.index == GO_INDEX || owned.index >= board.len() {
                violations.push(InvariantViolation {
                    message: format!("{} owns unpurchasable cell {}", player.name, owned.index),
                });
            }
            if owned.houses > MAX_HOUSES {
                violations.push(InvariantViolation {
                    message: format!(
                        "{} has {} houses on cell {}",
                        player.name, owned.houses, owned.index
                    ),
                });
            }
            if let Some(previous) = owners.insert(owned.index, id) {
                violations.push(InvariantViolation {
                    message: format!(
                        "Cell {} owned by both player {previous} and player {id}",
                        owned.index
                    ),
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::game::{Board, OwnedProperty, Player, RuleConfig};
    use crate::rng::DiceRoll;

    #[test]
    fn test_fresh_game_is_clean() {
        let game = GameState::standard(RuleConfig::default()).unwrap();
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_after_purchase_is_clean() {
        let game = GameState::standard(RuleConfig::default())
            .unwrap()
            .move_player(DiceRoll::new(3, 4).unwrap())
            .unwrap()
            .buy()
            .unwrap();
        assert!(check_invariants(&game).is_empty());
    }

    #[test]
    fn test_detects_double_ownership_and_owned_go() {
        let board = Arc::new(Board::generate().unwrap());
        let alice = Player::new("alice", "🥶", 1500)
            .with_property(&board, OwnedProperty::new(7))
            .with_property(&board, OwnedProperty::new(GO_INDEX));
        let bob = Player::new("bob", "😎", 1500).with_property(&board, OwnedProperty::new(7));

        let game = GameState::new(board, vec![alice, bob], RuleConfig::default()).unwrap();
        let violations = check_invariants(&game);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.message.contains("owned by both")));
        assert!(violations.iter().any(|v| v.message.contains("unpurchasable cell 0")));
    }

    #[test]
    fn test_detects_unsorted_properties() {
        let board = Arc::new(Board::generate().unwrap());
        let mut alice = Player::new("alice", "🥶", 1500);
        alice.properties = vec![OwnedProperty::new(20), OwnedProperty::new(2)];

        let game = GameState::new(board, vec![alice], RuleConfig::default()).unwrap();
        let violations = check_invariants(&game);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not sorted"));
    }

    #[test]
    fn test_violation_display() {
        let v = InvariantViolation {
            message: "bad".to_string(),
        };
        assert_eq!(v.to_string(), "Invariant violation: bad");
    }
}
