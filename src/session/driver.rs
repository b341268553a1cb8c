//! Single-writer match driver.

use std::collections::VecDeque;
use std::sync::Arc;

use im::Vector;

use crate::core::{Action, ActionError, ActionRecord, ConfigError, MatchConfig, MatchState, Winner};
use crate::rules::{DuelRules, RulesEngine, Snapshot};

/// Failure while rebuilding a session from recorded actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("recorded action {sequence} was rejected: {source}")]
    Rejected {
        sequence: u32,
        #[source]
        source: ActionError,
    },
}

/// Owns the authoritative snapshot of one match.
///
/// Every command goes through `submit`, one at a time, so a session is the
/// serialization point for a match. Readers can hold on to any snapshot
/// returned by `state()`; later actions never mutate it.
///
/// ## Example
///
/// ```
/// use grid_duel::core::{Action, MatchConfig, PlayerId, Position};
/// use grid_duel::session::MatchSession;
///
/// let mut session = MatchSession::new(MatchConfig::default()).unwrap();
/// session.submit(Action::move_to(PlayerId::P1, Position::new(2, 4))).unwrap();
///
/// assert_eq!(session.history().len(), 1);
/// assert!(session.submit(Action::end_turn(PlayerId::P1)).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct MatchSession<R: RulesEngine = DuelRules> {
    rules: R,
    config: MatchConfig,
    state: Snapshot,
    history: Vector<ActionRecord>,
    queue: VecDeque<Action>,
}

impl MatchSession<DuelRules> {
    /// Start a match under the standard spells and the config's turn check.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        let rules = DuelRules::from_config(&config);
        Self::with_rules(config, rules)
    }

    /// Rebuild a session by resubmitting `records` in order.
    ///
    /// Resolution is deterministic, so the result matches the session that
    /// produced the records.
    pub fn replay<'a>(
        config: MatchConfig,
        records: impl IntoIterator<Item = &'a ActionRecord>,
    ) -> Result<Self, SessionError> {
        let mut session = Self::new(config)?;
        for record in records {
            session
                .submit(record.action.clone())
                .map_err(|source| SessionError::Rejected {
                    sequence: record.sequence,
                    source,
                })?;
        }
        Ok(session)
    }
}

impl<R: RulesEngine> MatchSession<R> {
    /// Start a match with a custom rules engine.
    pub fn with_rules(config: MatchConfig, rules: R) -> Result<Self, ConfigError> {
        let state = Arc::new(MatchState::new(&config)?);
        tracing::debug!(
            cols = config.board.cols,
            rows = config.board.rows,
            hp = config.starting_hp,
            "match session started"
        );
        Ok(Self {
            rules,
            config,
            state,
            history: Vector::new(),
            queue: VecDeque::new(),
        })
    }

    /// Apply `action` to the current snapshot.
    ///
    /// On acceptance the new snapshot becomes current and the action is
    /// appended to the history. On rejection nothing changes.
    pub fn submit(&mut self, action: Action) -> Result<Snapshot, ActionError> {
        let turn = self.state.turn.number;
        let next = Arc::new(self.rules.try_apply_action(&self.state, &action)?);

        let sequence = u32::try_from(self.history.len()).unwrap_or(u32::MAX);
        self.history.push_back(ActionRecord::new(action, turn, sequence));
        self.state = Arc::clone(&next);
        Ok(next)
    }

    /// Queue an action for the next `drain`.
    pub fn enqueue(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Submit queued actions in arrival order, each against the snapshot
    /// left by the one before it.
    pub fn drain(&mut self) -> Vec<Result<Snapshot, ActionError>> {
        let mut results = Vec::with_capacity(self.queue.len());
        while let Some(action) = self.queue.pop_front() {
            let result = self.submit(action);
            if let Err(error) = &result {
                tracing::trace!(%error, "queued action rejected");
            }
            results.push(result);
        }
        results
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Snapshot {
        Arc::clone(&self.state)
    }

    /// Accepted actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The winner, once decided.
    #[must_use]
    pub fn result(&self) -> Option<Winner> {
        self.rules.is_terminal(&self.state)
    }
}
