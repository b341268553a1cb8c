//! Rules engine trait.
//!
//! The engine is the only place state transitions happen:
//! - What moves and spell targets are legal right now
//! - How an action produces the next snapshot
//! - Whether the match is over
//!
//! ## Snapshot identity
//!
//! `apply_action` takes and returns `Snapshot` (`Arc<MatchState>`). An
//! accepted action yields a fresh `Arc`; a rejected one returns a clone of
//! the input `Arc`, so callers detect rejection with `Arc::ptr_eq` without
//! inspecting fields.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::{Action, ActionError, MatchState, PlayerId, Position, Winner};
use crate::spells::{SpellBook, SpellId};

/// Shared, immutable match snapshot.
pub type Snapshot = Arc<MatchState>;

/// Tiles returned by legality queries. At most eight for any built-in
/// spell, so they stay inline.
pub type Targets = SmallVec<[Position; 8]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `try_apply_action`: Must check every precondition before writing to
///   the successor, and must be deterministic
/// - `legal_moves` / `legal_targets`: Return empty when the player cannot
///   act, and never list a tile `try_apply_action` would refuse
pub trait RulesEngine {
    /// Spell definitions this engine resolves.
    fn spells(&self) -> &SpellBook;

    /// Validate `action` against `state` and build the successor snapshot.
    ///
    /// `state` is never modified.
    fn try_apply_action(&self, state: &MatchState, action: &Action) -> Result<MatchState, ActionError>;

    /// Tiles `player` may step to with a `Move` action.
    fn legal_moves(&self, state: &MatchState, player: PlayerId) -> Targets;

    /// Tiles `player` may target with `spell`.
    fn legal_targets(&self, state: &MatchState, player: PlayerId, spell: SpellId) -> Targets;

    // === Convenience Methods ===

    /// Apply an action, returning the same `Arc` on rejection.
    fn apply_action(&self, state: &Snapshot, action: &Action) -> Snapshot {
        match self.try_apply_action(state, action) {
            Ok(next) => Arc::new(next),
            Err(error) => {
                tracing::trace!(
                    player = %action.player(),
                    kind = action.kind(),
                    %error,
                    "action rejected"
                );
                Arc::clone(state)
            }
        }
    }

    /// Enumerate every action `player` may submit now, stamped with the
    /// current turn number.
    ///
    /// `EndTurn` is listed whenever it is `player`'s turn, even after the
    /// action was spent.
    fn legal_actions(&self, state: &MatchState, player: PlayerId) -> Vec<Action> {
        if state.is_over() || state.turn.current != player {
            return Vec::new();
        }

        let turn = state.turn.number;
        let mut actions: Vec<Action> = self
            .legal_moves(state, player)
            .into_iter()
            .map(|to| Action::move_to(player, to).on_turn(turn))
            .collect();

        for &spell in state.unit(player).character.spells() {
            actions.extend(
                self.legal_targets(state, player, spell)
                    .into_iter()
                    .map(|target| Action::cast(player, spell, target).on_turn(turn)),
            );
        }

        actions.push(Action::end_turn(player).on_turn(turn));
        actions
    }

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` once a winner has been declared.
    fn is_terminal(&self, state: &MatchState) -> Option<Winner> {
        state.winner
    }
}
