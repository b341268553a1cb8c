//! Match sessions.
//!
//! A `MatchSession` is the single writer for one match: it holds the
//! current snapshot, feeds commands to the rules engine one at a time and
//! keeps the history of accepted actions for replay.

mod driver;

pub use driver::{MatchSession, SessionError};
