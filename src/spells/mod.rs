//! Spell system: definitions, registry, and character loadouts.
//!
//! ## Key Types
//!
//! - `SpellId`: Identifier for a built-in spell
//! - `SpellDefinition`: Static spell data (range, damage, push, cooldown)
//! - `SpellBook`: Definition lookup
//! - `Character`: Which spells a unit may cast
//!
//! Every spell, whichever character unlocks it, resolves through the same
//! rules engine.

pub mod book;
pub mod definition;
pub mod loadout;

pub use book::SpellBook;
pub use definition::{SpellDefinition, SpellId, SpellKind, Targeting};
pub use loadout::Character;
