//! Deterministic randomness: the xorshift64 generator and dice rolls.
//!
//! Everything random in a game (property names, dice) flows through [`Rng`],
//! so a game is fully reproducible from its seeds.

use std::fmt;

use serde::Serialize;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Odd multiplier that spreads small consecutive seeds across the state space.
const SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic PRNG using xorshift64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        // Ensure non-zero state
        let state = if seed == 0 { 0x5555_5555_5555_5555 } else { seed };
        Self { state }
    }

    /// Create an RNG from a small counter-style seed (1, 2, 3, ...).
    ///
    /// Neighbouring seeds produce unrelated first outputs.
    #[must_use]
    pub const fn from_counter(seed: u64) -> Self {
        Self::new(seed.wrapping_mul(SEED_MIX))
    }

    /// Generate next random u64.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate random u32 in [0, max).
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        (self.next_u64() % u64::from(max)) as u32
    }

    /// Roll a single die.
    #[allow(clippy::cast_possible_truncation)]
    pub fn roll_die(&mut self) -> u8 {
        1 + self.next_below(u32::from(DIE_FACES)) as u8
    }

    /// Roll two independent dice.
    pub fn roll(&mut self) -> DiceRoll {
        let die1 = self.roll_die();
        let die2 = self.roll_die();
        DiceRoll { die1, die2 }
    }
}

/// The outcome of rolling two dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DiceRoll {
    die1: u8,
    die2: u8,
}

impl DiceRoll {
    /// Build a roll from two die faces, or `None` if either is outside 1..=6.
    #[must_use]
    pub const fn new(die1: u8, die2: u8) -> Option<Self> {
        if die1 == 0 || die1 > DIE_FACES || die2 == 0 || die2 > DIE_FACES {
            return None;
        }
        Some(Self { die1, die2 })
    }

    /// Every possible roll, in (die1, die2) order.
    pub fn all() -> impl Iterator<Item = DiceRoll> {
        (1..=DIE_FACES).flat_map(|die1| (1..=DIE_FACES).map(move |die2| DiceRoll { die1, die2 }))
    }

    /// Face of the first die.
    #[must_use]
    pub const fn die1(self) -> u8 {
        self.die1
    }

    /// Face of the second die.
    #[must_use]
    pub const fn die2(self) -> u8 {
        self.die2
    }

    /// Number of cells to move.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.die1 + self.die2
    }

    /// Whether both dice show the same face.
    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.die1 == self.die2
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.die1, self.die2)
    }
}
