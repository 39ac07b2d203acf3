//! Command reduction.
//!
//! Validates a player action against the current snapshot and applies it,
//! producing a fresh snapshot. The reducer is copy-on-write: the input
//! state is never touched, so a rejected action trivially leaves no
//! partial mutation behind. Legality is decided up front by an explicit
//! (phase, action) table plus turn ownership, before any handler runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::board::state::{GameState, Phase, Player, PlayerId, MAX_LEVEL};
use crate::board::tile::{tile, Money, TileKind, BOARD_SIZE, DETENTION_INDEX};

use super::dice::RandomSource;
use super::rent::compute_rent;
use super::turn_order::{game_is_over, next_active_player};

/// Bonus for passing or landing on Start during a move.
pub const PASS_START_BONUS: Money = 200;

/// Bail paid after the third failed escape attempt.
pub const BAIL_COST: Money = 50;

/// Swing of an event tile outcome, up or down.
pub const EVENT_SWING: Money = 50;

/// Upgrade cost fallback for a zone without a configured price.
pub const DEFAULT_UPGRADE_COST: Money = 100;

/// Failed escape attempts before bail is forced.
const JAIL_ATTEMPT_LIMIT: u8 = 3;

/// A player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    RollDice,
    BuyProperty,
    UpgradeProperty,
    EndTurn,
}

/// Terminal per-player result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Won,
    Lost,
}

/// What a successfully applied action produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The next snapshot.
    State(GameState),
    /// The game ended; the prior snapshot stands unmodified.
    GameOver(BTreeMap<PlayerId, Verdict>),
}

/// Rejection of a command. Raised synchronously with zero state mutation;
/// the variants exist only as diagnostics for the dispatch layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidCommand {
    #[error("it is not {0}'s turn")]
    NotYourTurn(PlayerId),

    #[error("command is not legal in the current phase")]
    WrongPhase,

    #[error("unknown player '{0}'")]
    UnknownPlayer(PlayerId),

    #[error("no purchase is pending")]
    NoPendingPurchase,

    #[error("cannot afford cost of {0}")]
    InsufficientFunds(Money),

    #[error("tile cannot be upgraded")]
    NotUpgradable,

    #[error("tile is already at maximum level")]
    MaxLevelReached,

    #[error("no game is in progress")]
    NoGame,

    #[error("the game is already over")]
    GameFinished,
}

/// The table of legal (phase, action) pairs. Upgrading is gated to the End
/// phase; ending the turn is legal from any phase (ending during BuyOrPass
/// is how a purchase is declined).
fn action_allowed(phase: Phase, action: Action) -> bool {
    matches!(
        (phase, action),
        (Phase::Roll, Action::RollDice)
            | (Phase::BuyOrPass, Action::BuyProperty)
            | (Phase::End, Action::UpgradeProperty)
            | (_, Action::EndTurn)
    )
}

/// Validates and applies one action for `caller` against `state`.
///
/// Randomness (dice, event outcomes) is drawn from `random` synchronously
/// within the call. On success the returned [`Outcome`] carries either the
/// next snapshot or the terminal verdict map.
pub fn apply_action(
    state: &GameState,
    caller: &PlayerId,
    action: Action,
    random: &mut dyn RandomSource,
) -> Result<Outcome, InvalidCommand> {
    if !state.players.contains_key(caller) {
        return Err(InvalidCommand::UnknownPlayer(caller.clone()));
    }
    if state.turn_player_id != *caller {
        return Err(InvalidCommand::NotYourTurn(caller.clone()));
    }
    if !action_allowed(state.phase, action) {
        return Err(InvalidCommand::WrongPhase);
    }

    match action {
        Action::RollDice => Ok(Outcome::State(roll_dice(state, caller, random))),
        Action::BuyProperty => buy_property(state, caller).map(Outcome::State),
        Action::UpgradeProperty => upgrade_property(state, caller).map(Outcome::State),
        Action::EndTurn => end_turn(state, caller),
    }
}

fn caller_record(state: &GameState, caller: &PlayerId) -> Player {
    state
        .players
        .get(caller)
        .cloned()
        .expect("caller validated in apply_action")
}

fn roll_dice(state: &GameState, caller: &PlayerId, random: &mut dyn RandomSource) -> GameState {
    let mut next = state.clone();
    let d1 = random.roll_die();
    let d2 = random.roll_die();
    next.dice = [d1, d2];
    let total = u32::from(d1) + u32::from(d2);

    let mut player = caller_record(state, caller);

    if player.is_jailed {
        if d1 == d2 {
            player.is_jailed = false;
            next.last_action_text = "Rolled doubles! Escaped Detention.".to_string();
        } else {
            player.jail_turns += 1;
            if player.jail_turns >= JAIL_ATTEMPT_LIMIT {
                player.is_jailed = false;
                player.money -= BAIL_COST;
                next.last_action_text = "Paid bail after 3 turns.".to_string();
            } else {
                next.last_action_text = "Stuck in Detention.".to_string();
                next.phase = Phase::End;
                next.players.insert(caller.clone(), player);
                return next;
            }
        }
    }

    // The Start bonus is decided from the pre-move position: a single roll
    // moves at most 12 tiles, so it wraps at most once.
    let raw = player.position + total as usize;
    if raw >= BOARD_SIZE {
        player.money += PASS_START_BONUS;
    }
    player.position = raw % BOARD_SIZE;

    let landed = tile(player.position);

    if landed.kind == TileKind::GoToDetention {
        player.position = DETENTION_INDEX;
        player.is_jailed = true;
        player.jail_turns = 0;
        next.last_action_text = "Sent to Detention!".to_string();
        next.phase = Phase::End;
        next.players.insert(caller.clone(), player);
        return next;
    }

    let owner = next.board[player.position].owner_id.clone();
    match owner {
        Some(ref owner) if owner != caller => {
            let rent = compute_rent(player.position, &next.board, total);
            player.money -= rent;
            if let Some(creditor) = next.players.get_mut(owner) {
                creditor.money += rent;
            }
            next.last_action_text = format!("Paid {} rent to {}", rent, owner);

            if player.money < 0 {
                // The creditor keeps the rent; the debtor's holdings revert
                // to unowned rather than transferring.
                player.is_bankrupt = true;
                for t in next.board.iter_mut() {
                    if t.owner_id.as_ref() == Some(caller) {
                        t.owner_id = None;
                        t.level = 0;
                    }
                }
                next.last_action_text = "Bankrupt!".to_string();
            }
            next.phase = Phase::End;
        }
        Some(_) => {
            next.last_action_text = format!("Visited your property {}.", landed.name);
            next.phase = Phase::End;
        }
        None => match landed.kind {
            TileKind::Zone | TileKind::Transit | TileKind::Utility => {
                let price = landed.price.unwrap_or(0);
                if player.money >= price {
                    next.phase = Phase::BuyOrPass;
                    next.current_tile_index = Some(player.position);
                    next.last_action_text =
                        format!("Landed on {}. Buy for {}?", landed.name, price);
                } else {
                    next.last_action_text = format!("Landed on {}. Can't afford.", landed.name);
                    next.phase = Phase::End;
                }
            }
            TileKind::Penalty => {
                let tax = landed.rent.unwrap_or(0);
                player.money -= tax;
                next.last_action_text = format!("Paid penalty {}", tax);
                next.phase = Phase::End;
            }
            TileKind::Event => {
                if random.event_is_lucky() {
                    player.money += EVENT_SWING;
                    next.last_action_text = "Data Mining Success! +50".to_string();
                } else {
                    player.money -= EVENT_SWING;
                    next.last_action_text = "Firewall Breach! -50".to_string();
                }
                next.phase = Phase::End;
            }
            _ => {
                next.last_action_text = format!("Landed on {}", landed.name);
                next.phase = Phase::End;
            }
        },
    }

    next.players.insert(caller.clone(), player);
    next
}

fn buy_property(state: &GameState, caller: &PlayerId) -> Result<GameState, InvalidCommand> {
    let index = state
        .current_tile_index
        .ok_or(InvalidCommand::NoPendingPurchase)?;
    let descriptor = tile(index);
    let price = descriptor.price.unwrap_or(0);

    // Affordability was pre-checked when the phase was entered, but the
    // purchase re-validates it anyway.
    let player = caller_record(state, caller);
    if player.money < price {
        return Err(InvalidCommand::InsufficientFunds(price));
    }

    let mut next = state.clone();
    if let Some(buyer) = next.players.get_mut(caller) {
        buyer.money -= price;
    }
    next.board[index].owner_id = Some(caller.clone());
    next.current_tile_index = None;
    next.phase = Phase::End;
    next.last_action_text = format!("Bought {}", descriptor.name);
    Ok(next)
}

fn upgrade_property(state: &GameState, caller: &PlayerId) -> Result<GameState, InvalidCommand> {
    let player = caller_record(state, caller);
    let index = player.position;
    let descriptor = tile(index);
    let tile_state = &state.board[index];

    if tile_state.owner_id.as_ref() != Some(caller) || descriptor.kind != TileKind::Zone {
        return Err(InvalidCommand::NotUpgradable);
    }
    if tile_state.level >= MAX_LEVEL {
        return Err(InvalidCommand::MaxLevelReached);
    }

    let cost = descriptor.price.unwrap_or(DEFAULT_UPGRADE_COST);
    if player.money < cost {
        return Err(InvalidCommand::InsufficientFunds(cost));
    }

    let mut next = state.clone();
    if let Some(owner) = next.players.get_mut(caller) {
        owner.money -= cost;
    }
    next.board[index].level += 1;
    next.last_action_text = format!(
        "Upgraded {} to Level {}",
        descriptor.name, next.board[index].level
    );
    Ok(next)
}

fn end_turn(state: &GameState, caller: &PlayerId) -> Result<Outcome, InvalidCommand> {
    let caller_active = !caller_record(state, caller).is_bankrupt;

    // A caller who alone remains active among two or more seats has won.
    if caller_active && game_is_over(&state.player_ids, &state.players) {
        let verdicts = state
            .player_ids
            .iter()
            .map(|id| {
                let verdict = if id == caller {
                    Verdict::Won
                } else {
                    Verdict::Lost
                };
                (id.clone(), verdict)
            })
            .collect();
        return Ok(Outcome::GameOver(verdicts));
    }

    let next_player = next_active_player(caller, &state.player_ids, &state.players);
    let mut next = state.clone();
    next.turn_player_id = next_player.clone();
    next.phase = Phase::Roll;
    next.dice = [0, 0];
    next.current_tile_index = None;
    next.last_action_text = format!("{}'s Turn", next_player);
    Ok(Outcome::State(next))
}
