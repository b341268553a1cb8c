//! Core match types: players, positions, actions, configuration, state.
//!
//! This module is the state model. It holds shape and invariants only;
//! every transition lives in `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{MatchConfig, TurnCheck, DEFAULT_LOG_CAPACITY, DEFAULT_STARTING_HP};
pub use error::{ActionError, ConfigError};
pub use player::{PlayerId, PlayerMap};
pub use position::{Direction, Position};
pub use state::{Board, GameLog, Guard, MatchState, Status, Turn, Unit, Winner};
