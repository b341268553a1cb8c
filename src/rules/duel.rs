//! The built-in duel ruleset.

use std::sync::{Arc, OnceLock};

use crate::core::{Action, ActionError, MatchConfig, MatchState, PlayerId, TurnCheck};
use crate::spells::{SpellBook, SpellId};

use super::engine::{RulesEngine, Snapshot, Targets};
use super::resolve::resolve;
use super::targeting::{move_destinations, spell_targets};
use super::validate::validate;

/// Rules for a two-unit grid duel.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use grid_duel::core::{Action, MatchState, PlayerId, Position};
/// use grid_duel::rules::{DuelRules, RulesEngine};
///
/// let rules = DuelRules::standard();
/// let state = Arc::new(MatchState::default());
///
/// let next = rules.apply_action(&state, &Action::move_to(PlayerId::P1, Position::new(2, 4)));
/// assert!(!Arc::ptr_eq(&state, &next));
/// assert_eq!(next.turn.current, PlayerId::P2);
///
/// // P1 has already acted; the same snapshot comes back.
/// let again = rules.apply_action(&next, &Action::move_to(PlayerId::P1, Position::new(2, 3)));
/// assert!(Arc::ptr_eq(&next, &again));
/// ```
#[derive(Clone, Debug)]
pub struct DuelRules {
    spells: SpellBook,
    turn_check: TurnCheck,
}

impl DuelRules {
    #[must_use]
    pub fn new(spells: SpellBook, turn_check: TurnCheck) -> Self {
        Self { spells, turn_check }
    }

    /// Standard spells with advisory turn numbers.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(SpellBook::standard(), TurnCheck::default())
    }

    /// Standard spells with the config's turn check.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(SpellBook::standard(), config.turn_check)
    }

    #[must_use]
    pub fn turn_check(&self) -> TurnCheck {
        self.turn_check
    }
}

impl Default for DuelRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl RulesEngine for DuelRules {
    fn spells(&self) -> &SpellBook {
        &self.spells
    }

    fn try_apply_action(&self, state: &MatchState, action: &Action) -> Result<MatchState, ActionError> {
        let plan = validate(state, action, &self.spells, self.turn_check)?;
        let player = action.player();

        let mut next = state.clone();
        resolve(&mut next, player, plan);

        tracing::debug!(
            %player,
            kind = action.kind(),
            turn = next.turn.number,
            current = %next.turn.current,
            "action applied"
        );
        Ok(next)
    }

    fn legal_moves(&self, state: &MatchState, player: PlayerId) -> Targets {
        if !state.can_act(player) {
            return Targets::new();
        }
        move_destinations(state, player)
    }

    fn legal_targets(&self, state: &MatchState, player: PlayerId, spell: SpellId) -> Targets {
        if !state.can_act(player) || !state.unit(player).is_ready(spell) {
            return Targets::new();
        }
        match self.spells.get(spell) {
            Some(definition) => spell_targets(state, player, definition),
            None => Targets::new(),
        }
    }
}

fn standard_rules() -> &'static DuelRules {
    static RULES: OnceLock<DuelRules> = OnceLock::new();
    RULES.get_or_init(DuelRules::standard)
}

/// Apply `action` under the standard rules. Returns `state` itself (same
/// `Arc`) when the action is rejected.
#[must_use]
pub fn apply_action(state: &Snapshot, action: &Action) -> Snapshot {
    standard_rules().apply_action(state, action)
}

/// Like `apply_action`, but reports why an action was refused.
pub fn try_apply_action(state: &MatchState, action: &Action) -> Result<MatchState, ActionError> {
    standard_rules().try_apply_action(state, action)
}

/// Legal `Move` destinations under the standard rules.
#[must_use]
pub fn legal_moves(state: &MatchState, player: PlayerId) -> Targets {
    standard_rules().legal_moves(state, player)
}

/// Legal targets for `spell` under the standard rules.
#[must_use]
pub fn legal_targets(state: &MatchState, player: PlayerId, spell: SpellId) -> Targets {
    standard_rules().legal_targets(state, player, spell)
}

/// Every action `player` may submit now under the standard rules.
#[must_use]
pub fn legal_actions(state: &MatchState, player: PlayerId) -> Vec<Action> {
    standard_rules().legal_actions(state, player)
}

/// Wrap an initial state for the snapshot API.
#[must_use]
pub fn snapshot(state: MatchState) -> Snapshot {
    Arc::new(state)
}
