//! Game state representation.
//!
//! Holds the complete snapshot of a game at a given point in time: player
//! records, seating order, tile ownership, dice, and the turn phase. The
//! snapshot serializes to the camelCase JSON shape that renderers consume.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::tile::{Money, BOARD_SIZE};

/// Starting balance for every player.
pub const START_MONEY: Money = 1500;

/// Maximum number of seated players.
pub const MAX_PLAYERS: usize = 6;

/// Upgrade ceiling for zone tiles.
pub const MAX_LEVEL: u8 = 4;

/// An externally assigned player identity.
///
/// The engine never invents these; they arrive fully formed from the lobby
/// layer at setup and are treated as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        PlayerId(id.to_string())
    }
}

/// The phase within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Waiting for the turn owner to roll.
    Roll,
    /// The turn owner landed on an affordable, unowned property and must
    /// decide whether to buy it.
    BuyOrPass,
    /// Movement is resolved; the turn owner may upgrade, then must end.
    End,
}

/// Per-tile ownership state. `level > 0` only ever occurs on owned zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileState {
    pub owner_id: Option<PlayerId>,
    pub level: u8,
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub money: Money,
    pub position: usize,
    pub is_jailed: bool,
    pub jail_turns: u8,
    /// Monotonic: once true, never cleared.
    pub is_bankrupt: bool,
}

/// The canonical, serializable game snapshot.
///
/// Mutated exclusively by the command reducer; every observer sees either
/// the previous snapshot or the next one, never a partial update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub players: BTreeMap<PlayerId, Player>,
    /// Seating order, fixed at setup.
    pub player_ids: Vec<PlayerId>,
    pub turn_player_id: PlayerId,
    /// Ownership state per board index, aligned with the static tile table.
    pub board: Vec<TileState>,
    /// `[0, 0]` means not yet rolled this turn.
    pub dice: [u8; 2],
    pub phase: Phase,
    /// Human-readable log line for the most recent event.
    pub last_action_text: String,
    /// Set only while a buy decision is pending.
    pub current_tile_index: Option<usize>,
}

impl GameState {
    /// Creates the initial state for the given seating order.
    ///
    /// Returns `None` unless 1 to 6 distinct player ids are supplied.
    pub fn new(seating: Vec<PlayerId>) -> Option<GameState> {
        if seating.is_empty() || seating.len() > MAX_PLAYERS {
            return None;
        }

        let mut players = BTreeMap::new();
        for id in &seating {
            let replaced = players.insert(
                id.clone(),
                Player {
                    id: id.clone(),
                    money: START_MONEY,
                    position: 0,
                    is_jailed: false,
                    jail_turns: 0,
                    is_bankrupt: false,
                },
            );
            if replaced.is_some() {
                return None;
            }
        }

        Some(GameState {
            players,
            turn_player_id: seating[0].clone(),
            player_ids: seating,
            board: vec![TileState::default(); BOARD_SIZE],
            dice: [0, 0],
            phase: Phase::Roll,
            last_action_text: "Game Started".to_string(),
            current_tile_index: None,
        })
    }
}
