//! Engine session driver.
//!
//! Holds the current game between commands, owns the entropy source, and
//! writes protocol responses. The reducer itself is pure; this is the only
//! place a snapshot is replaced and the terminal result is latched. Once a
//! game ends, every further action is refused until the next `newgame`.

use std::collections::BTreeMap;
use std::io::Write;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::state::{GameState, PlayerId};
use crate::protocol::snapshot::{format_state, format_verdicts};
use crate::resolve::action::{apply_action, Action, InvalidCommand, Outcome, Verdict};
use crate::resolve::dice::RngSource;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Option<GameState>,
    /// Latched terminal result of the current game, if it has ended.
    pub result: Option<BTreeMap<PlayerId, Verdict>>,
    random: RngSource<SmallRng>,
}

impl Engine {
    /// Creates an engine with no game in progress, seeded from entropy.
    pub fn new() -> Self {
        Engine {
            game: None,
            result: None,
            random: RngSource(SmallRng::from_entropy()),
        }
    }

    /// Creates an engine with a fixed seed for replayable sessions.
    pub fn from_seed(seed: u64) -> Self {
        Engine {
            game: None,
            result: None,
            random: RngSource(SmallRng::seed_from_u64(seed)),
        }
    }

    /// Starts a new game with the given seating order.
    /// Returns an error message on a rejected seating list.
    pub fn new_game(&mut self, seating: Vec<PlayerId>) -> Result<(), String> {
        match GameState::new(seating) {
            Some(game) => {
                self.game = Some(game);
                self.result = None;
                Ok(())
            }
            None => Err("newgame requires 1 to 6 distinct player ids".to_string()),
        }
    }

    /// Applies one player action to the current game.
    ///
    /// Returns the terminal verdict map when this action ended the game,
    /// `None` when play continues.
    pub fn apply(
        &mut self,
        caller: &PlayerId,
        action: Action,
    ) -> Result<Option<&BTreeMap<PlayerId, Verdict>>, InvalidCommand> {
        if self.result.is_some() {
            return Err(InvalidCommand::GameFinished);
        }
        let game = self.game.as_ref().ok_or(InvalidCommand::NoGame)?;

        match apply_action(game, caller, action, &mut self.random)? {
            Outcome::State(next) => {
                self.game = Some(next);
                Ok(None)
            }
            Outcome::GameOver(verdicts) => {
                self.result = Some(verdicts);
                Ok(self.result.as_ref())
            }
        }
    }

    /// Handles `newgame`: initializes a game and publishes the snapshot.
    pub fn handle_newgame<W: Write>(&mut self, seating: Vec<PlayerId>, out: &mut W) {
        match self.new_game(seating) {
            Ok(()) => self.handle_state(out),
            Err(msg) => {
                writeln!(out, "error {}", msg).unwrap();
                out.flush().unwrap();
            }
        }
    }

    /// Handles a player action: publishes the new snapshot, the terminal
    /// verdicts, or the rejection.
    pub fn handle_action<W: Write>(&mut self, caller: &PlayerId, action: Action, out: &mut W) {
        match self.apply(caller, action) {
            Ok(None) => self.handle_state(out),
            Ok(Some(verdicts)) => {
                writeln!(out, "gameover {}", format_verdicts(verdicts)).unwrap();
                out.flush().unwrap();
            }
            Err(rejection) => {
                writeln!(out, "invalid {}", rejection).unwrap();
                out.flush().unwrap();
            }
        }
    }

    /// Handles `state`: reprints the current snapshot.
    pub fn handle_state<W: Write>(&self, out: &mut W) {
        match &self.game {
            Some(game) => writeln!(out, "state {}", format_state(game)).unwrap(),
            None => writeln!(out, "error no game in progress").unwrap(),
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
