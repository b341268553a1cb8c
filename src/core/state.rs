//! Match state: the snapshot value the engine consumes and produces.
//!
//! ## MatchState
//!
//! - `Board`: grid size and ring-out rule, fixed for the match
//! - `Turn`: active player, turn number, whether the action was spent
//! - `Unit` per player: position, hp, guard status, cooldowns
//! - `winner`: terminal once set
//! - `GameLog`: the most recent human-readable events
//!
//! Collections use `im` persistent structures, so cloning a snapshot to
//! derive its successor is O(1) and the predecessor is never touched.

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::MatchConfig;
use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap};
use super::position::Position;
use crate::spells::{Character, SpellId};

/// Rectangular grid. `ring_out` makes a push off the edge lethal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cols: i32,
    pub rows: i32,
    pub ring_out: bool,
}

impl Board {
    #[must_use]
    pub const fn new(cols: i32, rows: i32, ring_out: bool) -> Self {
        Self { cols, rows, ring_out }
    }

    /// Whether `position` lies on the grid.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.cols && position.y >= 0 && position.y < self.rows
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(6, 7, true)
    }
}

/// Turn bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Player allowed to act.
    pub current: PlayerId,
    /// Starts at 1; advances whenever control returns to `PlayerId::FIRST`.
    pub number: u32,
    /// Set once the active player has moved or cast this turn.
    pub action_taken: bool,
}

impl Default for Turn {
    fn default() -> Self {
        Self {
            current: PlayerId::FIRST,
            number: 1,
            action_taken: false,
        }
    }
}

/// Active one-shot mitigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guard {
    /// Flat damage reduction applied to the next hit.
    pub value: u32,
}

/// Status effects on a unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Status {
    pub guard: Option<Guard>,
}

/// One player's unit on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: PlayerId,
    pub character: Character,
    pub position: Position,
    /// Always within `0..=max_hp`; 0 means dead.
    pub hp: u32,
    pub max_hp: u32,
    pub status: Status,
    /// Remaining turns per loadout spell; 0 means ready.
    pub cooldowns: OrdMap<SpellId, u32>,
}

impl Unit {
    /// A fresh unit: full hp, no guard, every loadout spell ready.
    #[must_use]
    pub fn new(id: PlayerId, character: Character, position: Position, hp: u32) -> Self {
        Self {
            id,
            character,
            position,
            hp,
            max_hp: hp,
            status: Status::default(),
            cooldowns: character.spells().iter().map(|&spell| (spell, 0u32)).collect(),
        }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Remaining cooldown, or `None` when the spell is not in this unit's
    /// loadout.
    #[must_use]
    pub fn cooldown(&self, spell: SpellId) -> Option<u32> {
        self.cooldowns.get(&spell).copied()
    }

    #[must_use]
    pub fn is_ready(&self, spell: SpellId) -> bool {
        self.cooldown(spell) == Some(0)
    }

    #[must_use]
    pub fn guard(&self) -> Option<Guard> {
        self.status.guard
    }

    /// Lose `amount` hp, floored at 0.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    /// Decrement every cooldown by one, floored at 0.
    pub fn tick_cooldowns(&mut self) {
        self.cooldowns = self
            .cooldowns
            .iter()
            .map(|(&spell, &remaining)| (spell, remaining.saturating_sub(1)))
            .collect();
    }
}

/// Final result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    /// Single winner.
    Player(PlayerId),
    /// Both units fell together.
    Draw,
}

impl Winner {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, Winner::Player(p) if *p == player)
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Winner::Player(player) => write!(f, "{player}"),
            Winner::Draw => f.write_str("DRAW"),
        }
    }
}

/// Bounded event log. Oldest entries are evicted first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    entries: Vector<String>,
    capacity: usize,
}

impl GameLog {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity,
        }
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_back(entry.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

/// One immutable snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board: Board,
    pub turn: Turn,
    pub units: PlayerMap<Unit>,
    pub winner: Option<Winner>,
    pub log: GameLog,
}

impl MatchState {
    /// Build the initial snapshot for a configuration.
    pub fn new(config: &MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::initial(config))
    }

    fn initial(config: &MatchConfig) -> Self {
        Self {
            board: config.board,
            turn: Turn::default(),
            units: PlayerMap::new(|player| {
                Unit::new(
                    player,
                    config.characters[player],
                    config.start[player],
                    config.starting_hp,
                )
            }),
            winner: None,
            log: GameLog::new(config.log_capacity),
        }
    }

    #[must_use]
    pub fn unit(&self, player: PlayerId) -> &Unit {
        &self.units[player]
    }

    pub fn unit_mut(&mut self, player: PlayerId) -> &mut Unit {
        &mut self.units[player]
    }

    /// The living unit standing on `position`, if any. Dead units do not
    /// occupy tiles.
    #[must_use]
    pub fn unit_at(&self, position: Position) -> Option<PlayerId> {
        self.units
            .iter()
            .find(|(_, unit)| unit.is_alive() && unit.position == position)
            .map(|(player, _)| player)
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.unit_at(position).is_some()
    }

    /// Whether `player` may still spend this turn's action.
    #[must_use]
    pub fn can_act(&self, player: PlayerId) -> bool {
        self.winner.is_none() && self.turn.current == player && !self.turn.action_taken
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for MatchState {
    /// The built-in ruleset's initial position.
    fn default() -> Self {
        Self::initial(&MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = MatchState::default();

        assert_eq!(state.turn.current, PlayerId::P1);
        assert_eq!(state.turn.number, 1);
        assert!(!state.turn.action_taken);
        assert_eq!(state.winner, None);
        assert!(state.log.is_empty());

        let p1 = state.unit(PlayerId::P1);
        assert_eq!(p1.position, Position::new(2, 5));
        assert_eq!(p1.hp, 10);
        assert_eq!(p1.guard(), None);
        assert_eq!(p1.cooldowns.len(), 4);
        assert!(p1.cooldowns.values().all(|&cd| cd == 0));

        assert_eq!(state.unit(PlayerId::P2).position, Position::new(3, 1));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MatchConfig::default().with_starting_hp(0);
        assert_eq!(MatchState::new(&config), Err(ConfigError::ZeroHp));
    }

    #[test]
    fn test_board_contains() {
        let board = Board::default();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(5, 6)));
        assert!(!board.contains(Position::new(6, 0)));
        assert!(!board.contains(Position::new(0, 7)));
        assert!(!board.contains(Position::new(-1, 3)));
    }

    #[test]
    fn test_unit_at_ignores_dead_units() {
        let mut state = MatchState::default();
        let p2_tile = state.unit(PlayerId::P2).position;
        assert_eq!(state.unit_at(p2_tile), Some(PlayerId::P2));

        state.unit_mut(PlayerId::P2).hp = 0;
        assert_eq!(state.unit_at(p2_tile), None);
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let mut unit = Unit::new(PlayerId::P1, Character::Duelist, Position::new(0, 0), 3);
        unit.take_damage(2);
        assert_eq!(unit.hp, 1);
        unit.take_damage(5);
        assert_eq!(unit.hp, 0);
        assert!(!unit.is_alive());
    }

    #[test]
    fn test_tick_cooldowns_floors_at_zero() {
        let mut unit = Unit::new(PlayerId::P1, Character::Duelist, Position::new(0, 0), 10);
        unit.cooldowns.insert(SpellId::Force, 2);

        unit.tick_cooldowns();
        assert_eq!(unit.cooldown(SpellId::Force), Some(1));
        assert_eq!(unit.cooldown(SpellId::Strike), Some(0));

        unit.tick_cooldowns();
        unit.tick_cooldowns();
        assert_eq!(unit.cooldown(SpellId::Force), Some(0));
        assert_eq!(unit.cooldown(SpellId::Shot), None);
    }

    #[test]
    fn test_log_evicts_oldest() {
        let mut log = GameLog::new(3);
        for i in 0..5 {
            log.push(format!("event {i}"));
        }

        assert_eq!(log.len(), 3);
        let entries: Vec<_> = log.iter().collect();
        assert_eq!(entries, vec!["event 2", "event 3", "event 4"]);
        assert_eq!(log.last(), Some("event 4"));
    }

    #[test]
    fn test_winner() {
        assert!(Winner::Player(PlayerId::P1).is_winner(PlayerId::P1));
        assert!(!Winner::Player(PlayerId::P1).is_winner(PlayerId::P2));
        assert!(!Winner::Draw.is_winner(PlayerId::P1));
        assert_eq!(Winner::Draw.to_string(), "DRAW");
    }

    #[test]
    fn test_clone_is_independent() {
        let state = MatchState::default();
        let mut next = state.clone();
        next.unit_mut(PlayerId::P1).cooldowns.insert(SpellId::Dash, 2);
        next.log.push("P1 dashed to (2,3)");

        assert_eq!(state.unit(PlayerId::P1).cooldown(SpellId::Dash), Some(0));
        assert!(state.log.is_empty());
    }

    #[test]
    fn test_state_serialization() {
        let state = MatchState::default();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
