//! Board representation and game-state types.
//!
//! Contains the static tile table for the fixed 40-tile layout and the
//! mutable per-game snapshot (players, ownership, dice, phase).

pub mod state;
pub mod tile;

pub use state::{
    GameState, Phase, Player, PlayerId, TileState, MAX_LEVEL, MAX_PLAYERS, START_MONEY,
};
pub use tile::{
    tile, tiles_in_group, tiles_of_kind, Money, TileDescriptor, TileKind, ZoneGroup, ALL_GROUPS,
    BOARD, BOARD_SIZE, DETENTION_INDEX, START_INDEX,
};
