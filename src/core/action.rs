//! Action representation: what a player submits to the engine.
//!
//! An action is one of three verbs:
//! - `Move` one tile to an adjacent empty tile
//! - `Cast` a spell at a target tile
//! - `EndTurn`, forfeiting any unused action
//!
//! Every action names the acting player and may carry the turn number the
//! submitter believed was current. Whether that number is checked depends on
//! `TurnCheck`.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use crate::spells::SpellId;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{Action, PlayerId, Position};
/// use grid_duel::spells::SpellId;
///
/// let step = Action::move_to(PlayerId::P1, Position::new(2, 4));
/// let guard = Action::cast(PlayerId::P1, SpellId::Guard, Position::new(2, 5)).on_turn(1);
/// let pass = Action::end_turn(PlayerId::P2);
///
/// assert_eq!(guard.turn_number(), Some(1));
/// assert!(pass.is_end_turn());
/// assert!(!step.is_end_turn());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Move {
        #[serde(rename = "playerId")]
        player: PlayerId,
        #[serde(rename = "turnNumber", default, skip_serializing_if = "Option::is_none")]
        turn_number: Option<u32>,
        to: Position,
    },
    Cast {
        #[serde(rename = "playerId")]
        player: PlayerId,
        #[serde(rename = "turnNumber", default, skip_serializing_if = "Option::is_none")]
        turn_number: Option<u32>,
        #[serde(rename = "spellId")]
        spell: SpellId,
        target: Position,
    },
    EndTurn {
        #[serde(rename = "playerId")]
        player: PlayerId,
        #[serde(rename = "turnNumber", default, skip_serializing_if = "Option::is_none")]
        turn_number: Option<u32>,
    },
}

impl Action {
    #[must_use]
    pub fn move_to(player: PlayerId, to: Position) -> Self {
        Action::Move {
            player,
            turn_number: None,
            to,
        }
    }

    #[must_use]
    pub fn cast(player: PlayerId, spell: SpellId, target: Position) -> Self {
        Action::Cast {
            player,
            turn_number: None,
            spell,
            target,
        }
    }

    #[must_use]
    pub fn end_turn(player: PlayerId) -> Self {
        Action::EndTurn {
            player,
            turn_number: None,
        }
    }

    /// Stamp the turn number the submitter observed.
    #[must_use]
    pub fn on_turn(mut self, number: u32) -> Self {
        match &mut self {
            Action::Move { turn_number, .. }
            | Action::Cast { turn_number, .. }
            | Action::EndTurn { turn_number, .. } => *turn_number = Some(number),
        }
        self
    }

    /// The acting player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Action::Move { player, .. }
            | Action::Cast { player, .. }
            | Action::EndTurn { player, .. } => *player,
        }
    }

    #[must_use]
    pub fn turn_number(&self) -> Option<u32> {
        match self {
            Action::Move { turn_number, .. }
            | Action::Cast { turn_number, .. }
            | Action::EndTurn { turn_number, .. } => *turn_number,
        }
    }

    #[must_use]
    pub fn is_end_turn(&self) -> bool {
        matches!(self, Action::EndTurn { .. })
    }

    /// Short verb for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Move { .. } => "MOVE",
            Action::Cast { .. } => "CAST",
            Action::EndTurn { .. } => "END_TURN",
        }
    }
}

/// An accepted action with metadata for history tracking.
///
/// Used for:
/// - Replay of a match from its initial configuration
/// - Debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Position of this action in the match history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player: action.player(),
            action,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_accessors() {
        let action = Action::cast(PlayerId::P2, SpellId::Strike, Position::new(2, 5));

        assert_eq!(action.player(), PlayerId::P2);
        assert_eq!(action.turn_number(), None);
        assert_eq!(action.kind(), "CAST");
        assert!(!action.is_end_turn());
    }

    #[test]
    fn test_on_turn_stamps_every_variant() {
        let actions = [
            Action::move_to(PlayerId::P1, Position::new(0, 0)).on_turn(3),
            Action::cast(PlayerId::P1, SpellId::Dash, Position::new(0, 0)).on_turn(3),
            Action::end_turn(PlayerId::P1).on_turn(3),
        ];

        for action in &actions {
            assert_eq!(action.turn_number(), Some(3));
        }
    }

    #[test]
    fn test_action_record() {
        let action = Action::end_turn(PlayerId::P2);
        let record = ActionRecord::new(action.clone(), 4, 7);

        assert_eq!(record.player, PlayerId::P2);
        assert_eq!(record.action, action);
        assert_eq!(record.turn, 4);
        assert_eq!(record.sequence, 7);
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::cast(PlayerId::P1, SpellId::Force, Position::new(2, 4)).on_turn(1);
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"CAST\""));
        assert!(json.contains("\"playerId\":\"P1\""));
        assert!(json.contains("\"spellId\":\"FORCE\""));
        assert!(json.contains("\"turnNumber\":1"));

        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_end_turn_without_turn_number_deserializes() {
        let action: Action = serde_json::from_str(r#"{"type":"END_TURN","playerId":"P2"}"#).unwrap();
        assert_eq!(action, Action::end_turn(PlayerId::P2));
    }

    #[test]
    fn test_external_wire_shape() {
        let json = r#"{"type":"MOVE","playerId":"P1","turnNumber":2,"to":{"x":2,"y":4}}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action, Action::move_to(PlayerId::P1, Position::new(2, 4)).on_turn(2));

        let json = r#"{"type":"CAST","playerId":"P2","spellId":"GUARD","target":{"x":3,"y":1}}"#;
        let action: Action = serde_json::from_str(json).unwrap();
        assert_eq!(action, Action::cast(PlayerId::P2, SpellId::Guard, Position::new(3, 1)));
    }
}
