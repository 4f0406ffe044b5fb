//! Player commands and their key bindings.

use std::fmt;

/// A command the active player can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Roll the dice and move.
    Move,
    /// Buy the cell under the active player.
    Buy,
    /// Pass the turn on.
    EndTurn,
}

impl Action {
    /// Every action, in key order.
    pub const ALL: [Action; 3] = [Action::Move, Action::Buy, Action::EndTurn];

    /// The action bound to a key (`1` move, `2` buy, `3` end turn).
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(Action::Move),
            '2' => Some(Action::Buy),
            '3' => Some(Action::EndTurn),
            _ => None,
        }
    }

    /// The key bound to this action.
    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Action::Move => '1',
            Action::Buy => '2',
            Action::EndTurn => '3',
        }
    }

    /// Short label for buttons and hints.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Action::Move => "roll!",
            Action::Buy => "buy",
            Action::EndTurn => "end turn",
        }
    }

    /// Parse a key sequence such as `"1231"`, skipping whitespace and commas.
    ///
    /// Returns the first character that is not a key binding on failure.
    ///
    /// # Errors
    ///
    /// Returns the offending character.
    pub fn parse_keys(keys: &str) -> Result<Vec<Self>, char> {
        keys.chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Self::from_key(c).ok_or(c))
            .collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
