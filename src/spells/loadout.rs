//! Character loadouts.
//!
//! A character fixes which spells a unit may cast. Every unit carries a
//! cooldown entry for exactly the spells of its character.

use serde::{Deserialize, Serialize};

use super::definition::SpellId;

/// Selectable character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Character {
    /// Close-quarters kit: Strike, Dash, Guard, Force.
    #[default]
    Duelist,
    /// Long-range kit: Shot, Snipe, Backstep.
    Ranged,
}

impl Character {
    /// Spells this character may cast.
    #[must_use]
    pub const fn spells(self) -> &'static [SpellId] {
        match self {
            Character::Duelist => &[SpellId::Strike, SpellId::Dash, SpellId::Guard, SpellId::Force],
            Character::Ranged => &[SpellId::Shot, SpellId::Snipe, SpellId::Backstep],
        }
    }

    #[must_use]
    pub fn knows(self, spell: SpellId) -> bool {
        self.spells().contains(&spell)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Character::Duelist => "Duelist",
            Character::Ranged => "Ranged",
        }
    }
}
