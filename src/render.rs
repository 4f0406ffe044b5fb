//! Board layout and plain-text rendering.
//!
//! The 40 cells run around the edge of an 11×11 grid:
//!
//! ```text
//! 10 11 12 13 14 15 16 17 18 19 20
//!  9                             21
//!  8                             22
//!  ⋮                              ⋮
//!  1                             29
//!  0 39 38 37 36 35 34 33 32 31 30
//! ```
//!
//! Rows and columns are 1-based, top-left is `(1, 1)`.

// Text rendering favours format! + push_str for readability
#![allow(clippy::format_push_string)]

use crate::game::{BOARD_SIZE, GameState, Player};

/// Cells along one side of the grid.
pub const GRID_SIZE: u16 = 11;

/// Width of one cell in [`render_text`] output.
pub const CELL_WIDTH: usize = 8;

/// Characters of a property name shown in a text cell.
const NAME_CHARS: usize = 5;

/// Grid `(row, column)` of a track index.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn grid_position(index: usize) -> (u16, u16) {
    let i = (index % BOARD_SIZE) as u16;
    if i < 11 {
        (11 - i, 1)
    } else if i < 21 {
        (1, i - 9)
    } else if i < 31 {
        (i - 19, 11)
    } else {
        (11, 41 - i)
    }
}

/// Track index drawn at grid `(row, column)`, or `None` for the inner area.
#[must_use]
pub fn cell_at(row: u16, col: u16) -> Option<usize> {
    (0..BOARD_SIZE).find(|&i| grid_position(i) == (row, col))
}

/// House count as shown to players: `N🏘` below five, a hotel at five.
#[must_use]
pub fn house_glyph(houses: u8) -> String {
    if houses >= 5 {
        "🏨".to_string()
    } else {
        format!("{houses}🏘")
    }
}

/// Unicode die face for 1-6.
#[must_use]
pub const fn die_face(value: u8) -> char {
    match value {
        1 => '⚀',
        2 => '⚁',
        3 => '⚂',
        4 => '⚃',
        5 => '⚄',
        6 => '⚅',
        _ => '?',
    }
}

/// Single-letter marker for a player on the text board.
fn marker(player: &Player) -> char {
    player
        .name
        .chars()
        .next()
        .map_or('?', |c| c.to_ascii_uppercase())
}

/// Render the board and player summaries as plain text.
///
/// Output format:
/// ```text
/// It is alice's (🥶) turn (rolled 3 + 4)
/// Rwand   Keny    ...
/// ...
/// Go   B  Malaw   ...
///
/// alice 🥶 $1360  Rwanda 0🏘
/// bob 😎 $1500
/// ```
#[must_use]
pub fn render_text(state: &GameState) -> String {
    let mut output = String::new();
    let active = state.active_player();

    output.push_str(&format!("It is {}'s ({}) turn", active.name, active.token));
    if let Some(roll) = state.turn().last_roll() {
        output.push_str(&format!(" (rolled {roll})"));
    }
    output.push('\n');

    for row in 1..=GRID_SIZE {
        let mut line = String::new();
        for col in 1..=GRID_SIZE {
            let cell = cell_at(row, col).map_or_else(String::new, |index| cell_text(state, index));
            line.push_str(&format!("{cell:<CELL_WIDTH$}"));
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output.push('\n');

    for player in state.players() {
        output.push_str(&player_summary(state, player));
        output.push('\n');
    }

    output
}

/// Abbreviated name plus the markers of players standing on the cell.
fn cell_text(state: &GameState, index: usize) -> String {
    let name: String = state.board().properties()[index]
        .name
        .chars()
        .take(NAME_CHARS)
        .collect();
    let markers: String = state
        .players()
        .iter()
        .filter(|p| p.position == index)
        .map(marker)
        .collect();
    format!("{name:<NAME_CHARS$}{markers}")
}

/// One line: name, token, money and owned properties.
#[must_use]
pub fn player_summary(state: &GameState, player: &Player) -> String {
    let mut line = format!("{} {} ${}", player.name, player.token, player.money);
    let owned: Vec<String> = player
        .properties
        .iter()
        .filter_map(|owned| {
            state
                .board()
                .get(owned.index)
                .map(|p| format!("{} {}", p.name, house_glyph(owned.houses)))
        })
        .collect();
    if !owned.is_empty() {
        line.push_str("  ");
        line.push_str(&owned.join(", "));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RuleConfig;
    use crate::rng::DiceRoll;

    #[test]
    fn test_grid_corners() {
        assert_eq!(grid_position(0), (11, 1));
        assert_eq!(grid_position(10), (1, 1));
        assert_eq!(grid_position(20), (1, 11));
        assert_eq!(grid_position(30), (11, 11));
        assert_eq!(grid_position(39), (11, 2));
    }

    #[test]
    fn test_grid_positions_unique_and_on_edge() {
        let mut seen = std::collections::HashSet::new();
        for i in 0..BOARD_SIZE {
            let (row, col) = grid_position(i);
            assert!(seen.insert((row, col)), "cell {i} overlaps another");
            assert!(row == 1 || row == GRID_SIZE || col == 1 || col == GRID_SIZE);
            assert_eq!(cell_at(row, col), Some(i));
        }
        assert_eq!(cell_at(6, 6), None);
    }

    #[test]
    fn test_house_glyph() {
        assert_eq!(house_glyph(0), "0🏘");
        assert_eq!(house_glyph(4), "4🏘");
        assert_eq!(house_glyph(5), "🏨");
    }

    #[test]
    fn test_die_face() {
        assert_eq!(die_face(1), '⚀');
        assert_eq!(die_face(6), '⚅');
        assert_eq!(die_face(7), '?');
    }

    #[test]
    fn test_render_text() {
        let game = GameState::standard(RuleConfig::default())
            .unwrap()
            .move_player(DiceRoll::new(3, 4).unwrap())
            .unwrap()
            .buy()
            .unwrap();
        let text = render_text(&game);
        let name = &game.board().properties()[7].name;

        assert!(text.starts_with("It is alice's (🥶) turn (rolled 3 + 4)"));
        assert!(text.contains("alice 🥶 $1360"));
        assert!(text.contains(&format!("{name} 0🏘")));
        assert!(text.contains("bob 😎 $1500"));
        // Bob is still on Go
        assert!(text.contains("Go   B"));
    }
}
