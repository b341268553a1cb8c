//! Rejection and configuration errors.
//!
//! `ActionError` names why an action was refused. The engine's
//! `apply_action` never surfaces it: a rejected action simply returns the
//! input snapshot. `try_apply_action` and the session expose the reason for
//! callers that want it.

use super::player::PlayerId;
use super::position::Position;
use crate::spells::SpellId;

/// Why an action was rejected. No variant implies partial application.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("match is already over")]
    MatchOver,

    #[error("not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("action already taken this turn")]
    ActionAlreadyTaken,

    #[error("stale turn number {submitted}, current turn is {current}")]
    StaleTurn { submitted: u32, current: u32 },

    #[error("spell {0} is not defined")]
    UnknownSpell(SpellId),

    #[error("spell {0} is not in the caster's loadout")]
    SpellNotInLoadout(SpellId),

    #[error("spell {spell} on cooldown for {remaining} more turn(s)")]
    OnCooldown { spell: SpellId, remaining: u32 },

    #[error("tile {0} is out of bounds")]
    OutOfBounds(Position),

    #[error("tile {0} is not adjacent")]
    NotAdjacent(Position),

    #[error("tile {target} is out of range {range}")]
    OutOfRange { target: Position, range: u32 },

    #[error("tile {0} is occupied")]
    Occupied(Position),

    #[error("path to {0} is blocked")]
    PathBlocked(Position),

    #[error("tile {0} is not in a straight line")]
    NotStraightLine(Position),

    #[error("invalid target {0}")]
    InvalidTarget(Position),

    #[error("target is already defeated")]
    TargetDead,

    #[error("tile {0} does not increase distance from the enemy")]
    NotRetreating(Position),
}

/// Why a `MatchConfig` cannot produce a legal initial state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board must be at least 1x1, got {cols}x{rows}")]
    EmptyBoard { cols: i32, rows: i32 },

    #[error("{player} starts off the board at {position}")]
    StartOutOfBounds { player: PlayerId, position: Position },

    #[error("both units start on {0}")]
    OverlappingStart(Position),

    #[error("starting hp must be positive")]
    ZeroHp,

    #[error("log capacity must be positive")]
    ZeroLogCapacity,
}
