//! Player state.

use crate::game::{Board, GroupId, Money};

/// Index of a player in the game's player list.
pub type PlayerId = usize;

/// Money each player starts with.
pub const STARTING_MONEY: Money = 1500;

/// A property held by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnedProperty {
    /// Board index of the property.
    pub index: usize,
    /// Houses built on it (0-5, five meaning a hotel).
    pub houses: u8,
}

impl OwnedProperty {
    /// A freshly bought property with no houses.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index, houses: 0 }
    }
}

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Display name.
    pub name: String,
    /// Glyph drawn on the board.
    pub token: String,
    /// Current board index.
    pub position: usize,
    /// Balance; no bankruptcy rule, so this can go below zero.
    pub money: Money,
    /// Owned properties, sorted by ascending group.
    pub properties: Vec<OwnedProperty>,
}

impl Player {
    /// Create a player on Go with the given balance.
    #[must_use]
    pub fn new(name: impl Into<String>, token: impl Into<String>, money: Money) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
            position: 0,
            money,
            properties: Vec::new(),
        }
    }

    /// The two players every default game starts with.
    #[must_use]
    pub fn default_players(money: Money) -> Vec<Self> {
        vec![Self::new("alice", "🥶", money), Self::new("bob", "😎", money)]
    }

    /// The entry for a property this player owns, if any.
    #[must_use]
    pub fn owned(&self, index: usize) -> Option<&OwnedProperty> {
        self.properties.iter().find(|owned| owned.index == index)
    }

    /// Whether this player owns the property at `index`.
    #[must_use]
    pub fn owns(&self, index: usize) -> bool {
        self.owned(index).is_some()
    }

    /// Count owned properties in a group.
    #[must_use]
    pub fn count_in_group(&self, board: &Board, group: GroupId) -> usize {
        self.properties
            .iter()
            .filter(|owned| board.get(owned.index).is_some_and(|p| p.group == Some(group)))
            .count()
    }

    /// Copy of this player with an extra property, keeping the list sorted by group.
    ///
    /// The sort is stable, so properties in the same group stay in purchase
    /// order. Go (no group) sorts first.
    #[must_use]
    pub fn with_property(&self, board: &Board, owned: OwnedProperty) -> Self {
        let mut properties = self.properties.clone();
        properties.push(owned);
        properties.sort_by_key(|o| board.get(o.index).and_then(|p| p.group));
        Self {
            properties,
            ..self.clone()
        }
    }

    /// Copy of this player with the balance adjusted by `delta`.
    ///
    /// The balance saturates at the bounds of [`Money`].
    #[must_use]
    pub fn with_money_delta(&self, delta: Money) -> Self {
        Self {
            money: self.money.saturating_add(delta),
            ..self.clone()
        }
    }
}
