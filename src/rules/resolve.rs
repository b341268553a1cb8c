//! Effect resolution on a successor snapshot.
//!
//! Everything here runs on the clone produced for an already validated
//! action, so it never fails. Order within a cast:
//! 1. cooldown set, action marked taken, cast logged
//! 2. damage (guard mitigation, then counter) with a win check after each
//!    hp change
//! 3. push, if the spell pushes and the target survived
//! 4. turn advancement, unless a winner was just declared

use crate::core::{Direction, Guard, MatchState, PlayerId, Winner};
use crate::spells::{SpellDefinition, SpellId};

use super::validate::Plan;

/// Counter damage dealt by a guarded defender to a melee attacker.
pub const GUARD_COUNTER_DAMAGE: u32 = 1;

/// Carry out a validated plan for `player`.
pub(crate) fn resolve(state: &mut MatchState, player: PlayerId, plan: Plan<'_>) {
    match plan {
        Plan::Move { to } => {
            state.unit_mut(player).position = to;
            state.turn.action_taken = true;
            state.log.push(format!("{player} moved to {to}"));
            tracing::debug!(%player, %to, "unit moved");
        }
        Plan::Attack { spell, target } => {
            let defender = player.opponent();
            begin_cast(state, player, spell);
            state.log.push(format!("{player} casts {} at {target}", spell.id));
            tracing::debug!(%player, spell = %spell.id, %target, "attack cast");

            resolve_damage(state, player, defender, spell.damage, spell.provokes_counter());
            if spell.push > 0 && state.unit(defender).is_alive() {
                resolve_push(state, player, defender);
            }
        }
        Plan::Relocate { spell, to } => {
            begin_cast(state, player, spell);
            state.unit_mut(player).position = to;
            let verb = match spell.id {
                SpellId::Backstep => "backstepped",
                _ => "dashed",
            };
            state.log.push(format!("{player} {verb} to {to}"));
            tracing::debug!(%player, spell = %spell.id, %to, "unit relocated");
        }
        Plan::Guard { spell } => {
            begin_cast(state, player, spell);
            state.unit_mut(player).status.guard = Some(Guard { value: spell.guard });
            state.log.push(format!("{player} casts {}", spell.id));
            tracing::debug!(%player, value = spell.guard, "guard raised");
        }
        Plan::EndTurn => {
            state.log.push(format!("{player} ends turn manually"));
            tracing::debug!(%player, "turn ended manually");
        }
    }

    handle_turn_end(state);
}

fn begin_cast(state: &mut MatchState, player: PlayerId, spell: &SpellDefinition) {
    state.unit_mut(player).cooldowns.insert(spell.id, spell.cooldown);
    state.turn.action_taken = true;
}

/// Apply `amount` damage from `attacker` to `defender`.
///
/// An active guard absorbs up to its value and is consumed. If the hit is
/// `counterable` (melee) and both units survive it, the attacker takes an
/// unmitigated `GUARD_COUNTER_DAMAGE`. The counter never triggers a further
/// counter.
pub(crate) fn resolve_damage(
    state: &mut MatchState,
    attacker: PlayerId,
    defender: PlayerId,
    amount: u32,
    counterable: bool,
) {
    let mut damage = amount;
    let mut countered = false;

    if let Some(guard) = state.unit_mut(defender).status.guard.take() {
        damage = damage.saturating_sub(guard.value);
        state.log.push(format!("{defender} guard reduced damage"));
        countered = counterable;
    }

    let hp = {
        let unit = state.unit_mut(defender);
        unit.take_damage(damage);
        unit.hp
    };
    state.log.push(format!("{defender} took {damage} damage (HP {hp})"));
    tracing::debug!(%defender, damage, hp, "damage applied");
    check_win(state);

    if countered && state.unit(defender).is_alive() && state.unit(attacker).is_alive() {
        let hp = {
            let unit = state.unit_mut(attacker);
            unit.take_damage(GUARD_COUNTER_DAMAGE);
            unit.hp
        };
        state.log.push(format!(
            "{attacker} hit by guard counter for {GUARD_COUNTER_DAMAGE} damage (HP {hp})"
        ));
        tracing::debug!(%attacker, hp, "guard counter applied");
        check_win(state);
    }
}

/// Push `target` one tile away from `pusher` along the dominant axis.
///
/// Off the board the push is lethal with ring-out and absorbed silently
/// without it. A push into the other unit is blocked.
pub(crate) fn resolve_push(state: &mut MatchState, pusher: PlayerId, target: PlayerId) {
    let from = state.unit(pusher).position;
    let at = state.unit(target).position;
    let Some(direction) = Direction::away_from(from, at) else {
        return;
    };
    let destination = at.step(direction, 1);

    if !state.board.contains(destination) {
        if state.board.ring_out {
            state.unit_mut(target).hp = 0;
            state.log.push(format!("{target} pushed out of bounds!"));
            tracing::debug!(%target, %destination, "ring-out");
            check_win(state);
        }
        return;
    }

    if state.is_occupied(destination) {
        state.log.push("Push blocked by obstacle");
        tracing::debug!(%target, %destination, "push blocked");
        return;
    }

    state.unit_mut(target).position = destination;
    state.log.push(format!("{target} pushed to {destination}"));
    tracing::debug!(%target, %destination, "unit pushed");
}

/// Declare a winner if any unit is down. Both down is a draw. A declared
/// winner is never replaced.
pub(crate) fn check_win(state: &mut MatchState) {
    if state.winner.is_some() {
        return;
    }

    let p1_down = !state.unit(PlayerId::P1).is_alive();
    let p2_down = !state.unit(PlayerId::P2).is_alive();
    let winner = match (p1_down, p2_down) {
        (true, true) => Winner::Draw,
        (true, false) => Winner::Player(PlayerId::P2),
        (false, true) => Winner::Player(PlayerId::P1),
        (false, false) => return,
    };

    state.winner = Some(winner);
    tracing::info!(%winner, turn = state.turn.number, "match decided");
}

/// Pass control to the other player and start their turn: the turn number
/// advances when play returns to `PlayerId::FIRST`, the incoming unit's
/// guard lapses and its cooldowns tick down.
pub(crate) fn handle_turn_end(state: &mut MatchState) {
    if state.winner.is_some() {
        return;
    }

    let next = state.turn.current.opponent();
    state.turn.current = next;
    if next == PlayerId::FIRST {
        state.turn.number = state.turn.number.saturating_add(1);
    }
    state.turn.action_taken = false;

    let unit = state.unit_mut(next);
    unit.status.guard = None;
    unit.tick_cooldowns();
    tracing::debug!(player = %next, turn = state.turn.number, "turn started");
}
