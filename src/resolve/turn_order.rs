//! Turn-order resolution.
//!
//! Walks the fixed seating order to find the next active player and detects
//! the win condition. Pure functions over the player records.

use std::collections::BTreeMap;

use crate::board::state::{Player, PlayerId};

/// Returns the next non-bankrupt player after `current` in seating order.
///
/// Walks circularly for at most `seating.len()` steps; if every other
/// player is bankrupt the caller itself is returned.
pub fn next_active_player(
    current: &PlayerId,
    seating: &[PlayerId],
    players: &BTreeMap<PlayerId, Player>,
) -> PlayerId {
    let start = seating.iter().position(|id| id == current).unwrap_or(0);
    for step in 1..=seating.len() {
        let candidate = &seating[(start + step) % seating.len()];
        let bankrupt = players.get(candidate).map_or(true, |p| p.is_bankrupt);
        if !bankrupt {
            return candidate.clone();
        }
    }
    current.clone()
}

/// Returns true when at most one non-bankrupt player remains among two or
/// more seated players. A single-player game never auto-ends this way.
pub fn game_is_over(seating: &[PlayerId], players: &BTreeMap<PlayerId, Player>) -> bool {
    if seating.len() < 2 {
        return false;
    }
    let active = players.values().filter(|p| !p.is_bankrupt).count();
    active <= 1
}
