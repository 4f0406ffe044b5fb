//! The fixed 40-cell track.

use crate::error::BoardError;
use crate::game::names::unique_names;

/// Amount of money, in game units. May go negative.
pub type Money = i64;

/// Identifier of a property group.
pub type GroupId = u8;

/// Number of cells on the track.
pub const BOARD_SIZE: usize = 40;

/// Consecutive cells per group (the last group is shorter).
pub const GROUP_SIZE: usize = 3;

/// Number of property groups.
pub const NUM_GROUPS: usize = (BOARD_SIZE - 1).div_ceil(GROUP_SIZE);

/// Index of the start cell.
pub const GO_INDEX: usize = 0;

/// Name of the start cell.
pub const GO_NAME: &str = "Go";

/// Houses a property can hold; five houses is a hotel.
pub const MAX_HOUSES: u8 = 5;

/// A single cell on the track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Display name.
    pub name: String,
    /// Group this property belongs to (`None` for Go).
    pub group: Option<GroupId>,
    /// Purchase price (`None` means the cell cannot be bought).
    pub cost: Option<Money>,
    /// Rent by house count, 0 through 5.
    pub rent: [Money; 6],
    /// Price of one house.
    pub house_cost: Money,
    /// Maximum houses on this property.
    pub max_houses: u8,
}

impl Property {
    /// The unpurchasable start cell.
    #[must_use]
    pub fn go() -> Self {
        Self {
            name: GO_NAME.to_string(),
            group: None,
            cost: None,
            rent: [0; 6],
            house_cost: 0,
            max_houses: 0,
        }
    }

    /// A regular property at `index` with the derived numeric fields.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn at_index(index: usize, name: impl Into<String>) -> Self {
        let i = index as Money;
        Self {
            name: name.into(),
            group: Some(((index - 1) / GROUP_SIZE) as GroupId),
            cost: Some(i * 20),
            rent: [i * 2, i * 10, i * 20, i * 30, i * 50, i * 100],
            house_cost: 50 + 50 * (i / 10),
            max_houses: MAX_HOUSES,
        }
    }

    /// Whether the property can ever be bought.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.cost.is_some()
    }

    /// Rent for the given house count (clamped to the table).
    #[must_use]
    pub fn rent_for(&self, houses: u8) -> Money {
        self.rent[usize::from(houses.min(MAX_HOUSES))]
    }
}

/// A set of properties that forms a monopoly when fully owned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group {
    /// Group identifier.
    pub id: GroupId,
    /// Number of properties in the group.
    pub count: usize,
}

/// The track and its groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    properties: Vec<Property>,
    groups: Vec<Group>,
}

impl Board {
    /// Generate the standard board.
    ///
    /// Names come from [`unique_names`], so two calls always produce the same
    /// board.
    ///
    /// # Errors
    ///
    /// Returns an error if not enough unique names can be generated.
    pub fn generate() -> Result<Self, BoardError> {
        let names = unique_names(BOARD_SIZE)?;
        Self::from_names(&names)
    }

    /// Build the board from an explicit name list.
    ///
    /// `names[0]` is ignored (cell 0 is always Go); cell `i` is named
    /// `names[i]`.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly [`BOARD_SIZE`] names are given.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, BoardError> {
        if names.len() != BOARD_SIZE {
            return Err(BoardError {
                reason: format!("Need {BOARD_SIZE} names, got {}", names.len()),
            });
        }

        let properties = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == GO_INDEX {
                    Property::go()
                } else {
                    Property::at_index(i, name.as_ref())
                }
            })
            .collect();

        #[allow(clippy::cast_possible_truncation)]
        let groups = (0..NUM_GROUPS)
            .map(|id| Group {
                id: id as GroupId,
                count: GROUP_SIZE.min(BOARD_SIZE - 1 - id * GROUP_SIZE),
            })
            .collect();

        log::trace!("generated board with {BOARD_SIZE} cells and {NUM_GROUPS} groups");

        Ok(Self { properties, groups })
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Always false; a board has 40 cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The cell at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Property> {
        self.properties.get(index)
    }

    /// All cells in track order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// All groups in id order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a group by id.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Board indices of every property in a group.
    pub fn group_members(&self, id: GroupId) -> impl Iterator<Item = usize> + '_ {
        self.properties
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.group == Some(id))
            .map(|(i, _)| i)
    }

    /// Index reached by moving `steps` cells forward from `from`.
    #[must_use]
    pub fn advance(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.len()
    }
}
