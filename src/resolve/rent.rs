//! Rent computation.
//!
//! Pure mapping from (tile index, ownership state, dice total) to the
//! amount owed. No side effects; callers decide who pays whom.

use crate::board::state::{PlayerId, TileState};
use crate::board::tile::{tile, tiles_in_group, tiles_of_kind, Money, TileKind, ZoneGroup};

/// Utility rent is `dice total x 10` when the owner holds both utilities,
/// `x 4` otherwise.
const UTILITY_PAIR_MULTIPLIER: Money = 10;
const UTILITY_SINGLE_MULTIPLIER: Money = 4;

/// Transit rent doubles per hub held: 25, 50, 100, 200.
const TRANSIT_BASE_RENT: Money = 25;

/// Counts tiles of `kind` currently owned by `owner`.
pub fn owned_count(kind: TileKind, owner: &PlayerId, board: &[TileState]) -> usize {
    tiles_of_kind(kind)
        .filter(|t| board[t.id].owner_id.as_ref() == Some(owner))
        .count()
}

/// Returns true if `owner` holds every tile in the color group.
pub fn holds_full_group(group: ZoneGroup, owner: &PlayerId, board: &[TileState]) -> bool {
    tiles_in_group(group).all(|t| board[t.id].owner_id.as_ref() == Some(owner))
}

/// Computes the amount owed for landing on `tile_index`.
///
/// Penalty tiles charge their flat tax regardless of ownership; every other
/// unowned tile charges nothing. Zone rent doubles on an unimproved full
/// set, and an upgrade level `L > 0` instead multiplies the base rent by
/// `1 + 4L` (the two bonuses never stack).
pub fn compute_rent(tile_index: usize, board: &[TileState], dice_total: u32) -> Money {
    let descriptor = tile(tile_index);

    if descriptor.kind == TileKind::Penalty {
        return descriptor.rent.unwrap_or(0);
    }

    let Some(owner) = board[tile_index].owner_id.as_ref() else {
        return 0;
    };

    match descriptor.kind {
        TileKind::Utility => {
            let multiplier = if owned_count(TileKind::Utility, owner, board) == 2 {
                UTILITY_PAIR_MULTIPLIER
            } else {
                UTILITY_SINGLE_MULTIPLIER
            };
            Money::from(dice_total) * multiplier
        }
        TileKind::Transit => {
            // The owner holds at least this hub, so the count is 1..=4.
            let held = owned_count(TileKind::Transit, owner, board);
            TRANSIT_BASE_RENT << (held - 1)
        }
        TileKind::Zone => {
            let base = descriptor.rent.unwrap_or(0);
            let level = board[tile_index].level;
            if level > 0 {
                return base * (1 + Money::from(level) * 4);
            }
            let full_set = descriptor
                .group
                .is_some_and(|g| holds_full_group(g, owner, board));
            if full_set {
                base * 2
            } else {
                base
            }
        }
        _ => 0,
    }
}
