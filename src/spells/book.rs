//! Spell registry for definition lookup.
//!
//! The `SpellBook` stores every spell definition the engine resolves.
//! `SpellBook::standard()` is the built-in ruleset.

use rustc_hash::FxHashMap;

use super::definition::{SpellDefinition, SpellId, SpellKind, Targeting};

/// Registry of spell definitions.
///
/// ## Example
///
/// ```
/// use grid_duel::spells::{SpellBook, SpellId};
///
/// let book = SpellBook::standard();
/// let guard = book.get(SpellId::Guard).unwrap();
/// assert_eq!(guard.cooldown, 3);
/// assert_eq!(guard.guard, 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpellBook {
    spells: FxHashMap<SpellId, SpellDefinition>,
}

impl SpellBook {
    /// Create a new empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in spells.
    #[must_use]
    pub fn standard() -> Self {
        let mut book = Self::new();

        book.register(
            SpellDefinition::new(SpellId::Strike, SpellKind::Melee, Targeting::Enemy)
                .with_range(1)
                .with_damage(2)
                .with_cooldown(0)
                .with_description("Melee attack 2 dmg"),
        );
        book.register(
            SpellDefinition::new(SpellId::Dash, SpellKind::Move, Targeting::StraightLine)
                .with_range(2)
                .with_cooldown(2)
                .with_description("Move up to 2 tiles straight orthogonal"),
        );
        book.register(
            SpellDefinition::new(SpellId::Guard, SpellKind::Buff, Targeting::SelfTile)
                .with_cooldown(3)
                .with_guard(2)
                .with_description("Reduce next dmg by 2 (counter 1 if melee)"),
        );
        book.register(
            SpellDefinition::new(SpellId::Force, SpellKind::Ranged, Targeting::Enemy)
                .with_range(2)
                .with_damage(1)
                .with_push(1)
                .with_cooldown(3)
                .with_description("Ranged 1 dmg + push 1 tile"),
        );
        book.register(
            SpellDefinition::new(SpellId::Shot, SpellKind::Ranged, Targeting::Enemy)
                .with_range(3)
                .with_damage(1)
                .with_cooldown(0)
                .with_description("Ranged 1 dmg at range 3"),
        );
        book.register(
            SpellDefinition::new(SpellId::Snipe, SpellKind::Ranged, Targeting::Enemy)
                .with_range(5)
                .with_damage(2)
                .with_cooldown(2)
                .with_description("Ranged 2 dmg at range 5"),
        );
        book.register(
            SpellDefinition::new(SpellId::Backstep, SpellKind::Move, Targeting::Retreat)
                .with_range(1)
                .with_cooldown(1)
                .with_description("Step 1 tile away from the enemy"),
        );

        book
    }

    /// Register a spell definition.
    ///
    /// Panics if a spell with the same ID already exists.
    pub fn register(&mut self, spell: SpellDefinition) {
        if self.spells.contains_key(&spell.id) {
            panic!("Spell {} already registered", spell.id);
        }
        self.spells.insert(spell.id, spell);
    }

    /// Get a spell definition by ID.
    #[must_use]
    pub fn get(&self, id: SpellId) -> Option<&SpellDefinition> {
        self.spells.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: SpellId) -> bool {
        self.spells.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Iterate over all definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &SpellDefinition> {
        self.spells.values()
    }
}
