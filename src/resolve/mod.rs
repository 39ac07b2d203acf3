//! Command resolution.
//!
//! Turns validated player actions into new game snapshots: rent
//! arithmetic, turn-order walking, and the copy-on-write reducer itself.

pub mod action;
pub mod dice;
pub mod rent;
pub mod turn_order;

pub use action::{
    apply_action, Action, InvalidCommand, Outcome, Verdict, BAIL_COST, DEFAULT_UPGRADE_COST,
    EVENT_SWING, PASS_START_BONUS,
};
pub use dice::{RandomSource, RngSource, ScriptedSource};
pub use rent::{compute_rent, holds_full_group, owned_count};
pub use turn_order::{game_is_over, next_active_player};
