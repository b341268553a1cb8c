//! Action validation.
//!
//! `validate` reads the snapshot and either refuses the action or returns a
//! `Plan` that resolution can carry out without further checks. Nothing is
//! written here.

use crate::core::{Action, ActionError, MatchState, PlayerId, Position, TurnCheck};
use crate::spells::{SpellBook, SpellDefinition, Targeting};

use super::targeting::is_open;

/// A fully validated action.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Plan<'a> {
    Move { to: Position },
    Attack { spell: &'a SpellDefinition, target: Position },
    Relocate { spell: &'a SpellDefinition, to: Position },
    Guard { spell: &'a SpellDefinition },
    EndTurn,
}

/// Check every precondition of `action` in order: match state, turn
/// ownership, turn number, action budget, then action-specific rules.
pub(crate) fn validate<'a>(
    state: &MatchState,
    action: &Action,
    spells: &'a SpellBook,
    turn_check: TurnCheck,
) -> Result<Plan<'a>, ActionError> {
    let player = action.player();

    if state.is_over() {
        return Err(ActionError::MatchOver);
    }
    if state.turn.current != player {
        return Err(ActionError::NotYourTurn(player));
    }
    if turn_check == TurnCheck::Strict {
        if let Some(submitted) = action.turn_number() {
            if submitted != state.turn.number {
                return Err(ActionError::StaleTurn {
                    submitted,
                    current: state.turn.number,
                });
            }
        }
    }
    if !action.is_end_turn() && state.turn.action_taken {
        return Err(ActionError::ActionAlreadyTaken);
    }

    match *action {
        Action::Move { to, .. } => validate_move(state, player, to),
        Action::Cast { spell, target, .. } => {
            let definition = spells.get(spell).ok_or(ActionError::UnknownSpell(spell))?;
            validate_cast(state, player, definition, target)
        }
        Action::EndTurn { .. } => Ok(Plan::EndTurn),
    }
}

fn validate_move<'a>(state: &MatchState, player: PlayerId, to: Position) -> Result<Plan<'a>, ActionError> {
    let from = state.unit(player).position;

    if !state.board.contains(to) {
        return Err(ActionError::OutOfBounds(to));
    }
    if from.distance(to) != 1 {
        return Err(ActionError::NotAdjacent(to));
    }
    if state.is_occupied(to) {
        return Err(ActionError::Occupied(to));
    }
    Ok(Plan::Move { to })
}

fn validate_cast<'a>(
    state: &MatchState,
    player: PlayerId,
    spell: &'a SpellDefinition,
    target: Position,
) -> Result<Plan<'a>, ActionError> {
    let me = state.unit(player);
    let enemy = state.unit(player.opponent());

    match me.cooldown(spell.id) {
        None => return Err(ActionError::SpellNotInLoadout(spell.id)),
        Some(0) => {}
        Some(remaining) => {
            return Err(ActionError::OnCooldown {
                spell: spell.id,
                remaining,
            })
        }
    }

    if spell.targeting != Targeting::SelfTile && !state.board.contains(target) {
        return Err(ActionError::OutOfBounds(target));
    }

    match spell.targeting {
        Targeting::Enemy => {
            let distance = me.position.distance(target);
            if distance == 0 || distance > spell.range {
                return Err(ActionError::OutOfRange {
                    target,
                    range: spell.range,
                });
            }
            if target != enemy.position {
                return Err(ActionError::InvalidTarget(target));
            }
            if !enemy.is_alive() {
                return Err(ActionError::TargetDead);
            }
            Ok(Plan::Attack { spell, target })
        }
        Targeting::SelfTile => {
            if target != me.position {
                return Err(ActionError::InvalidTarget(target));
            }
            Ok(Plan::Guard { spell })
        }
        Targeting::StraightLine => {
            let (direction, distance) = me
                .position
                .straight_line_to(target)
                .ok_or(ActionError::NotStraightLine(target))?;
            if distance > spell.range {
                return Err(ActionError::OutOfRange {
                    target,
                    range: spell.range,
                });
            }
            if !state.board.contains(target) {
                return Err(ActionError::OutOfBounds(target));
            }
            if state.is_occupied(target) {
                return Err(ActionError::Occupied(target));
            }
            let blocked = (1..distance as i32)
                .map(|steps| me.position.step(direction, steps))
                .any(|tile| !is_open(state, tile));
            if blocked {
                return Err(ActionError::PathBlocked(target));
            }
            Ok(Plan::Relocate { spell, to: target })
        }
        Targeting::Retreat => {
            if me.position.distance(target) != 1 {
                return Err(ActionError::NotAdjacent(target));
            }
            if !state.board.contains(target) {
                return Err(ActionError::OutOfBounds(target));
            }
            if state.is_occupied(target) {
                return Err(ActionError::Occupied(target));
            }
            if target.distance(enemy.position) <= me.position.distance(enemy.position) {
                return Err(ActionError::NotRetreating(target));
            }
            Ok(Plan::Relocate { spell, to: target })
        }
    }
}
