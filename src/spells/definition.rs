//! Spell definitions - static spell data.
//!
//! `SpellDefinition` holds the immutable properties of a spell: its range,
//! damage, push, cooldown and how it picks a target. Per-unit state such as
//! the remaining cooldown lives on the `Unit`, not here.

use serde::{Deserialize, Serialize};

/// Identifier of a built-in spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellId {
    Strike,
    Dash,
    Guard,
    Force,
    Shot,
    Snipe,
    Backstep,
}

impl SpellId {
    /// Every built-in spell, in registration order.
    pub const ALL: [SpellId; 7] = [
        SpellId::Strike,
        SpellId::Dash,
        SpellId::Guard,
        SpellId::Force,
        SpellId::Shot,
        SpellId::Snipe,
        SpellId::Backstep,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            SpellId::Strike => "STRIKE",
            SpellId::Dash => "DASH",
            SpellId::Guard => "GUARD",
            SpellId::Force => "FORCE",
            SpellId::Shot => "SHOT",
            SpellId::Snipe => "SNIPE",
            SpellId::Backstep => "BACKSTEP",
        }
    }
}

impl std::fmt::Display for SpellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Attack/utility tag. Only `Melee` hits provoke a guard counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellKind {
    Melee,
    Ranged,
    Move,
    Buff,
}

/// How a spell chooses its target tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Targeting {
    /// The living enemy's tile, at distance `1..=range`.
    Enemy,
    /// The caster's own tile.
    SelfTile,
    /// An empty tile in a straight orthogonal line at distance
    /// `1..=range`, without passing over an occupied tile.
    StraightLine,
    /// An empty adjacent tile that strictly increases distance from the
    /// living enemy.
    Retreat,
}

/// Static spell definition.
///
/// ## Example
///
/// ```
/// use grid_duel::spells::{SpellDefinition, SpellId, SpellKind, Targeting};
///
/// let force = SpellDefinition::new(SpellId::Force, SpellKind::Ranged, Targeting::Enemy)
///     .with_range(2)
///     .with_damage(1)
///     .with_push(1)
///     .with_cooldown(3);
///
/// assert!(!force.provokes_counter());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellDefinition {
    pub id: SpellId,
    pub kind: SpellKind,
    pub targeting: Targeting,
    /// Maximum Manhattan distance, where the targeting mode uses one.
    pub range: u32,
    pub damage: u32,
    /// Push distance applied to a surviving target. The engine pushes one
    /// tile whenever this is non-zero.
    pub push: u32,
    /// Turns before the spell is usable again.
    pub cooldown: u32,
    /// Flat mitigation installed on the caster (guard spells only).
    pub guard: u32,
    pub description: String,
}

impl SpellDefinition {
    /// Create a definition with every numeric field at zero.
    pub fn new(id: SpellId, kind: SpellKind, targeting: Targeting) -> Self {
        Self {
            id,
            kind,
            targeting,
            range: 0,
            damage: 0,
            push: 0,
            cooldown: 0,
            guard: 0,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_push(mut self, push: u32) -> Self {
        self.push = push;
        self
    }

    #[must_use]
    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    #[must_use]
    pub fn with_guard(mut self, value: u32) -> Self {
        self.guard = value;
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether a guarded defender answers this spell with a counter.
    #[must_use]
    pub fn provokes_counter(&self) -> bool {
        self.kind == SpellKind::Melee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let strike = SpellDefinition::new(SpellId::Strike, SpellKind::Melee, Targeting::Enemy)
            .with_range(1)
            .with_damage(2)
            .with_description("Melee attack 2 dmg");

        assert_eq!(strike.range, 1);
        assert_eq!(strike.damage, 2);
        assert_eq!(strike.cooldown, 0);
        assert!(strike.provokes_counter());
    }

    #[test]
    fn test_spell_id_names() {
        assert_eq!(SpellId::Backstep.to_string(), "BACKSTEP");
        let json = serde_json::to_string(&SpellId::Force).unwrap();
        assert_eq!(json, "\"FORCE\"");
    }
}
