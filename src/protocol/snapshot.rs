//! JSON snapshot publication.
//!
//! The full game state is published as a single JSON line after every
//! successful command; the rendering layer consumes it read-only. Terminal
//! results publish a per-player verdict map in the same way.

use std::collections::BTreeMap;

use crate::board::state::{GameState, PlayerId};
use crate::resolve::action::Verdict;

/// Serializes a snapshot to its single-line wire form.
pub fn format_state(state: &GameState) -> String {
    serde_json::to_string(state).expect("game state always serializes")
}

/// Parses a snapshot back from its wire form.
pub fn parse_state(json: &str) -> Result<GameState, serde_json::Error> {
    serde_json::from_str(json)
}

/// Serializes a terminal verdict map.
pub fn format_verdicts(verdicts: &BTreeMap<PlayerId, Verdict>) -> String {
    serde_json::to_string(verdicts).expect("verdict map always serializes")
}
