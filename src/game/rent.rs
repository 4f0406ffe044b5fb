//! Rent owed for landing on an owned property.

use crate::game::{Board, GO_INDEX, Money, Player};

/// Whether `owner` holds every property in the group of the cell at `index`.
#[must_use]
pub fn has_monopoly(board: &Board, owner: &Player, index: usize) -> bool {
    let Some(group) = board.get(index).and_then(|p| p.group) else {
        return false;
    };
    let Some(size) = board.group(group).map(|g| g.count) else {
        return false;
    };
    owner.count_in_group(board, group) == size
}

/// Rent `owner` charges for the property at `index`.
///
/// `None` for Go and for properties `owner` does not hold. An unimproved
/// property in a fully owned group charges double.
#[must_use]
pub fn rent_amount(board: &Board, owner: &Player, index: usize) -> Option<Money> {
    if index == GO_INDEX {
        return None;
    }
    let property = board.get(index)?;
    let owned = owner.owned(index)?;

    let base = property.rent_for(owned.houses);
    if owned.houses == 0 && has_monopoly(board, owner, index) {
        Some(base * 2)
    } else {
        Some(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::OwnedProperty;

    fn board() -> Board {
        Board::generate().unwrap()
    }

    fn owner_of(board: &Board, indices: &[usize]) -> Player {
        indices.iter().fold(Player::new("alice", "🥶", 1500), |p, &i| {
            p.with_property(board, OwnedProperty::new(i))
        })
    }

    #[test]
    fn test_go_has_no_rent() {
        let board = board();
        let owner = owner_of(&board, &[1]);
        assert_eq!(rent_amount(&board, &owner, GO_INDEX), None);
    }

    #[test]
    fn test_unowned_has_no_rent() {
        let board = board();
        let owner = owner_of(&board, &[1]);
        assert_eq!(rent_amount(&board, &owner, 2), None);
    }

    #[test]
    fn test_base_rent() {
        let board = board();
        let owner = owner_of(&board, &[4, 5]);
        assert_eq!(rent_amount(&board, &owner, 4), Some(8));
    }

    #[test]
    fn test_monopoly_doubles_base_rent() {
        let board = board();
        let owner = owner_of(&board, &[4, 5, 6]);
        assert!(has_monopoly(&board, &owner, 5));
        assert_eq!(rent_amount(&board, &owner, 5), Some(20));
    }

    #[test]
    fn test_monopoly_with_houses_not_doubled() {
        let board = board();
        let mut owner = owner_of(&board, &[4, 5, 6]);
        if let Some(owned) = owner.properties.iter_mut().find(|o| o.index == 5) {
            owned.houses = 2;
        }
        assert_eq!(rent_amount(&board, &owner, 5), Some(100));
    }

    #[test]
    fn test_no_monopoly_on_go() {
        let board = board();
        let owner = owner_of(&board, &[1, 2, 3]);
        assert!(!has_monopoly(&board, &owner, GO_INDEX));
    }
}
