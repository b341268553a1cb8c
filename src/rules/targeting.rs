//! Target geometry shared by validation and legality queries.
//!
//! Each function enumerates exactly the tiles the matching validation in
//! `validate` accepts, in `Direction::ALL` order.

use crate::core::{Direction, MatchState, PlayerId, Position};
use crate::spells::{SpellDefinition, Targeting};

use super::engine::Targets;

/// Empty, in-bounds orthogonal neighbours of `player`'s unit.
pub(crate) fn move_destinations(state: &MatchState, player: PlayerId) -> Targets {
    let origin = state.unit(player).position;
    Direction::ALL
        .into_iter()
        .map(|direction| origin.step(direction, 1))
        .filter(|&tile| is_open(state, tile))
        .collect()
}

/// Tiles `player` may target with `spell`, ignoring turn gating and
/// cooldowns.
pub(crate) fn spell_targets(state: &MatchState, player: PlayerId, spell: &SpellDefinition) -> Targets {
    let me = state.unit(player);
    let enemy = state.unit(player.opponent());
    let mut targets = Targets::new();

    match spell.targeting {
        Targeting::Enemy => {
            let distance = me.position.distance(enemy.position);
            if enemy.is_alive() && (1..=spell.range).contains(&distance) {
                targets.push(enemy.position);
            }
        }
        Targeting::SelfTile => targets.push(me.position),
        Targeting::StraightLine => {
            for direction in Direction::ALL {
                for steps in 1..=spell.range as i32 {
                    let tile = me.position.step(direction, steps);
                    if !is_open(state, tile) {
                        break;
                    }
                    targets.push(tile);
                }
            }
        }
        Targeting::Retreat => {
            let current = me.position.distance(enemy.position);
            targets.extend(
                Direction::ALL
                    .into_iter()
                    .map(|direction| me.position.step(direction, 1))
                    .filter(|&tile| is_open(state, tile) && tile.distance(enemy.position) > current),
            );
        }
    }

    targets
}

/// In bounds and not occupied by a living unit.
pub(crate) fn is_open(state: &MatchState, tile: Position) -> bool {
    state.board.contains(tile) && !state.is_occupied(tile)
}
