//! Randomness injection for the command reducer.
//!
//! The reducer never calls an ambient RNG. Every random decision goes
//! through a [`RandomSource`], so a session can run on entropy while tests
//! and replays script the exact dice and event outcomes.

use std::collections::VecDeque;

use rand::Rng;

/// Supplies the random decisions a turn can require.
pub trait RandomSource {
    /// Returns a uniform die face in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Resolves an event tile: `true` pays out, `false` deducts.
    fn event_is_lucky(&mut self) -> bool;
}

/// A [`RandomSource`] backed by any `rand` generator.
#[derive(Debug)]
pub struct RngSource<R: Rng>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn roll_die(&mut self) -> u8 {
        self.0.gen_range(1..=6)
    }

    fn event_is_lucky(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// Replays a fixed script of dice faces and event outcomes.
///
/// Used by tests and replay tooling to drive the reducer deterministically.
///
/// # Panics
/// Panics when asked for more outcomes than the script contains.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    dice: VecDeque<u8>,
    events: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new(dice: &[u8], events: &[bool]) -> Self {
        ScriptedSource {
            dice: dice.iter().copied().collect(),
            events: events.iter().copied().collect(),
        }
    }

    pub fn with_dice(dice: &[u8]) -> Self {
        Self::new(dice, &[])
    }
}

impl RandomSource for ScriptedSource {
    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().expect("dice script exhausted")
    }

    fn event_is_lucky(&mut self) -> bool {
        self.events.pop_front().expect("event script exhausted")
    }
}
