//! Rules engine: validation, resolution and legality queries.
//!
//! `RulesEngine` is the seam; `DuelRules` is the built-in ruleset. Every
//! transition goes through `try_apply_action`, which validates the action
//! against the current snapshot and, only if it is accepted, resolves it on
//! a clone. A refused action never writes anything.
//!
//! The free functions (`apply_action`, `legal_moves`, ...) use a shared
//! `DuelRules::standard()` instance.

pub mod duel;
pub mod engine;
mod resolve;
mod targeting;
mod validate;

pub use duel::{apply_action, legal_actions, legal_moves, legal_targets, snapshot, try_apply_action, DuelRules};
pub use engine::{RulesEngine, Snapshot, Targets};
pub use resolve::GUARD_COUNTER_DAMAGE;
