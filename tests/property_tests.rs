//! Property-based tests for the rules engine.
//!
//! Matches are driven by arbitrary action scripts: each step either picks
//! one of the legal actions (by index) or fires a random, usually illegal,
//! action. Properties are checked after every step.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use proptest::prelude::*;

use grid_duel::core::{Action, MatchConfig, MatchState, PlayerId, Position};
use grid_duel::rules::{apply_action, legal_actions, snapshot, try_apply_action, Snapshot};
use grid_duel::spells::{Character, SpellBook, SpellId};

#[derive(Clone, Debug)]
enum Step {
    /// Index into the current player's legal actions.
    Legal(usize),
    /// An arbitrary action, legal or not.
    Raw(Action),
}

fn arb_player() -> impl Strategy<Value = PlayerId> {
    prop_oneof![Just(PlayerId::P1), Just(PlayerId::P2)]
}

fn arb_position() -> impl Strategy<Value = Position> {
    prop_oneof![
        3 => (-2i32..9, -2i32..10).prop_map(|(x, y)| Position::new(x, y)),
        1 => (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Position::new(x, y)),
        1 => (
            prop_oneof![Just(i32::MIN), Just(i32::MAX), 0i32..6],
            prop_oneof![Just(i32::MIN), Just(i32::MAX), 0i32..7],
        )
            .prop_map(|(x, y)| Position::new(x, y)),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (arb_player(), arb_position()).prop_map(|(player, to)| Action::move_to(player, to)),
        (arb_player(), proptest::sample::select(SpellId::ALL.to_vec()), arb_position())
            .prop_map(|(player, spell, target)| Action::cast(player, spell, target)),
        arb_player().prop_map(Action::end_turn),
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<usize>().prop_map(Step::Legal),
        1 => arb_action().prop_map(Step::Raw),
    ]
}

fn arb_character() -> impl Strategy<Value = Character> {
    prop_oneof![Just(Character::Duelist), Just(Character::Ranged)]
}

fn arb_config() -> impl Strategy<Value = MatchConfig> {
    (arb_character(), arb_character(), any::<bool>()).prop_map(|(c1, c2, ring_out)| {
        MatchConfig::default()
            .with_board(6, 7, ring_out)
            .with_character(PlayerId::P1, c1)
            .with_character(PlayerId::P2, c2)
    })
}

/// Resolve a step to a concrete action against `state`.
fn pick(state: &MatchState, step: &Step) -> Action {
    match step {
        Step::Legal(index) => {
            let actions = legal_actions(state, state.turn.current);
            if actions.is_empty() {
                Action::end_turn(state.turn.current)
            } else {
                actions[index % actions.len()].clone()
            }
        }
        Step::Raw(action) => action.clone(),
    }
}

fn initial(config: &MatchConfig) -> Snapshot {
    snapshot(MatchState::new(config).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A refused action hands back the very same snapshot, unchanged.
    #[test]
    fn prop_rejection_is_pure(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..60)) {
        let mut state = initial(&config);
        for step in &steps {
            let action = pick(&state, step);
            let before = (*state).clone();
            let next = apply_action(&state, &action);

            if try_apply_action(&state, &action).is_err() {
                prop_assert!(Arc::ptr_eq(&state, &next));
                prop_assert_eq!(&*next, &before);
            } else {
                prop_assert!(!Arc::ptr_eq(&state, &next));
            }
            prop_assert_eq!(&*state, &before);
            state = next;
        }
    }

    /// After a move or cast, the same player cannot act again before the
    /// opponent does.
    #[test]
    fn prop_single_action_per_turn(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..60)) {
        let mut state = initial(&config);
        for step in &steps {
            let action = pick(&state, step);
            let next = apply_action(&state, &action);

            if !Arc::ptr_eq(&state, &next) && !action.is_end_turn() {
                let player = action.player();
                for retry in legal_actions(&state, player) {
                    if retry.is_end_turn() {
                        continue;
                    }
                    prop_assert!(try_apply_action(&next, &retry).is_err());
                }
            }
            state = next;
        }
    }

    /// Every enumerated legal action is accepted.
    #[test]
    fn prop_legal_actions_accepted(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..40)) {
        let mut state = initial(&config);
        for step in &steps {
            for player in PlayerId::all() {
                for action in legal_actions(&state, player) {
                    prop_assert!(
                        try_apply_action(&state, &action).is_ok(),
                        "legal action refused: {:?}", action
                    );
                }
            }
            state = apply_action(&state, &pick(&state, step));
        }
    }

    /// Cooldowns only go up through a cast of that spell and otherwise drop
    /// by one at the start of the owner's turn.
    #[test]
    fn prop_cooldowns_monotonic(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..60)) {
        let book = SpellBook::standard();
        let mut state = initial(&config);
        for step in &steps {
            let action = pick(&state, step);
            let next = apply_action(&state, &action);
            if Arc::ptr_eq(&state, &next) {
                continue;
            }

            let cast = match action {
                Action::Cast { spell, .. } => Some((action.player(), spell)),
                _ => None,
            };
            let ticked = if next.is_over() { None } else { Some(next.turn.current) };

            for player in PlayerId::all() {
                for (spell, &after) in next.unit(player).cooldowns.iter() {
                    let before = state.unit(player).cooldown(*spell).unwrap();
                    let cooldown = if cast == Some((player, *spell)) {
                        book.get(*spell).unwrap().cooldown
                    } else {
                        before
                    };
                    let expected = if ticked == Some(player) {
                        cooldown.saturating_sub(1)
                    } else {
                        cooldown
                    };
                    prop_assert_eq!(after, expected, "{} {}", player, spell);
                }
            }
            state = next;
        }
    }

    /// Once decided, a match accepts nothing.
    #[test]
    fn prop_terminal_is_fixed(
        config in arb_config(),
        steps in prop::collection::vec(arb_step(), 0..200),
        attempts in prop::collection::vec(arb_action(), 1..20),
    ) {
        let mut state = initial(&config);
        for step in &steps {
            if state.is_over() {
                break;
            }
            state = apply_action(&state, &pick(&state, step));
        }

        if state.is_over() {
            for attempt in &attempts {
                let next = apply_action(&state, attempt);
                prop_assert!(Arc::ptr_eq(&state, &next));
            }
            prop_assert!(legal_actions(&state, PlayerId::P1).is_empty());
            prop_assert!(legal_actions(&state, PlayerId::P2).is_empty());
        }
    }

    /// The turn number grows only when control passes to P1.
    #[test]
    fn prop_turn_number_advances_into_p1(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..60)) {
        let mut state = initial(&config);
        for step in &steps {
            let next = apply_action(&state, &pick(&state, step));

            let into_p1 = state.turn.current == PlayerId::P2 && next.turn.current == PlayerId::P1;
            let expected = if into_p1 { state.turn.number + 1 } else { state.turn.number };
            prop_assert_eq!(next.turn.number, expected);
            prop_assert!(next.log.len() <= next.log.capacity());
            state = next;
        }
    }

    /// Hp stays within bounds and a dead unit always means a decided match.
    #[test]
    fn prop_hp_bounded(config in arb_config(), steps in prop::collection::vec(arb_step(), 0..100)) {
        let mut state = initial(&config);
        for step in &steps {
            state = apply_action(&state, &pick(&state, step));
            for (_, unit) in state.units.iter() {
                prop_assert!(unit.hp <= unit.max_hp);
                if !unit.is_alive() {
                    prop_assert!(state.is_over());
                }
                prop_assert!(state.board.contains(unit.position));
            }
        }
    }
}
