//! Match configuration.
//!
//! `MatchConfig` fixes everything about a match before the first action:
//! - `Board`: grid size and the ring-out rule
//! - Starting hp and start tiles for both units
//! - Each unit's `Character` (spell loadout)
//! - Log capacity and how action turn numbers are checked
//!
//! `MatchConfig::default()` is the built-in ruleset.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{PlayerId, PlayerMap};
use super::position::Position;
use super::state::Board;
use crate::spells::Character;

/// Default hp for both units.
pub const DEFAULT_STARTING_HP: u32 = 10;

/// Default number of log lines retained in a snapshot.
pub const DEFAULT_LOG_CAPACITY: usize = 12;

/// How the engine treats the `turn_number` carried by an action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnCheck {
    /// The number is informational and never compared.
    #[default]
    Advisory,
    /// An action stamped with a number other than the current turn is
    /// rejected. Unstamped actions are accepted.
    Strict,
}

/// Complete configuration for a match.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{MatchConfig, PlayerId, Position, TurnCheck};
/// use grid_duel::spells::Character;
///
/// let config = MatchConfig::default()
///     .with_character(PlayerId::P2, Character::Ranged)
///     .with_turn_check(TurnCheck::Strict);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.start[PlayerId::P1], Position::new(2, 5));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub board: Board,
    pub starting_hp: u32,
    pub start: PlayerMap<Position>,
    pub characters: PlayerMap<Character>,
    pub log_capacity: usize,
    pub turn_check: TurnCheck,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board: Board::default(),
            starting_hp: DEFAULT_STARTING_HP,
            start: PlayerMap::from_pair(Position::new(2, 5), Position::new(3, 1)),
            characters: PlayerMap::with_value(Character::Duelist),
            log_capacity: DEFAULT_LOG_CAPACITY,
            turn_check: TurnCheck::Advisory,
        }
    }
}

impl MatchConfig {
    #[must_use]
    pub fn with_board(mut self, cols: i32, rows: i32, ring_out: bool) -> Self {
        self.board = Board::new(cols, rows, ring_out);
        self
    }

    #[must_use]
    pub fn with_starting_hp(mut self, hp: u32) -> Self {
        self.starting_hp = hp;
        self
    }

    #[must_use]
    pub fn with_start(mut self, player: PlayerId, position: Position) -> Self {
        self.start[player] = position;
        self
    }

    #[must_use]
    pub fn with_character(mut self, player: PlayerId, character: Character) -> Self {
        self.characters[player] = character;
        self
    }

    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_turn_check(mut self, turn_check: TurnCheck) -> Self {
        self.turn_check = turn_check;
        self
    }

    /// Check that the configuration describes a playable initial state.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.cols < 1 || self.board.rows < 1 {
            return Err(ConfigError::EmptyBoard {
                cols: self.board.cols,
                rows: self.board.rows,
            });
        }
        for (player, &position) in self.start.iter() {
            if !self.board.contains(position) {
                return Err(ConfigError::StartOutOfBounds { player, position });
            }
        }
        if self.start[PlayerId::P1] == self.start[PlayerId::P2] {
            return Err(ConfigError::OverlappingStart(self.start[PlayerId::P1]));
        }
        if self.starting_hp == 0 {
            return Err(ConfigError::ZeroHp);
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::ZeroLogCapacity);
        }
        Ok(())
    }
}
