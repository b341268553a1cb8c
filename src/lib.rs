//! # grid-duel
//!
//! A deterministic rules engine for a two-player, turn-based duel on a
//! small rectangular grid.
//!
//! ## Design Principles
//!
//! 1. **Snapshots, not mutation**: Every transition takes a snapshot and
//!    returns a new one. A refused action returns the input snapshot
//!    itself, never a modified copy.
//!
//! 2. **One action per turn**: A turn is either a move or a spell, after
//!    which control passes. Ending the turn early is always allowed.
//!
//! 3. **Configuration Over Convention**: Board size, ring-out, hp, start
//!    tiles and characters come from `MatchConfig`; spell data from the
//!    `SpellBook`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so a
//!   successor snapshot shares everything it does not change.
//!
//! - **Validate, then resolve**: Validation only reads. Resolution runs on
//!   a clone and cannot fail.
//!
//! ## Modules
//!
//! - `core`: Players, positions, actions, configuration, state, errors
//! - `spells`: Spell definitions, the spell book, character loadouts
//! - `rules`: RulesEngine trait and the built-in duel rules
//! - `session`: Single-writer match driver with history and replay
//!
//! ## Example
//!
//! ```
//! use grid_duel::{apply_action, snapshot, Action, MatchState, PlayerId, Position, SpellId};
//!
//! let state = snapshot(MatchState::default());
//! let state = apply_action(&state, &Action::move_to(PlayerId::P1, Position::new(2, 4)));
//! let state = apply_action(&state, &Action::cast(PlayerId::P2, SpellId::Guard, Position::new(3, 1)));
//!
//! assert_eq!(state.turn.number, 2);
//! assert_eq!(state.log.last(), Some("P2 casts GUARD"));
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod spells;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionError, ActionRecord, Board, ConfigError, Direction, GameLog, Guard, MatchConfig, MatchState,
    PlayerId, PlayerMap, Position, Status, Turn, TurnCheck, Unit, Winner,
};

pub use crate::spells::{Character, SpellBook, SpellDefinition, SpellId, SpellKind, Targeting};

pub use crate::rules::{
    apply_action, legal_actions, legal_moves, legal_targets, snapshot, try_apply_action, DuelRules, RulesEngine,
    Snapshot, Targets,
};

pub use crate::session::{MatchSession, SessionError};
