//! Driver command parser.
//!
//! Parses incoming driver-protocol commands from raw text into structured
//! `Command` variants that the main loop can dispatch on.

use crate::board::state::PlayerId;
use crate::resolve::action::Action;

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a game with the given seating order: `newgame <id> [<id> ...]`.
    NewGame { players: Vec<PlayerId> },

    /// A player action: `roll|buy|upgrade|end <id>`.
    Act { player: PlayerId, action: Action },

    /// Reprint the current snapshot.
    State,

    /// Terminate the driver process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return None;
    };

    match head {
        "state" => Some(Command::State),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(&tokens),
        "roll" => parse_act(&tokens, Action::RollDice),
        "buy" => parse_act(&tokens, Action::BuyProperty),
        "upgrade" => parse_act(&tokens, Action::UpgradeProperty),
        "end" => parse_act(&tokens, Action::EndTurn),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `newgame <id> [<id> ...]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        eprintln!("malformed newgame: expected 'newgame <id> [<id> ...]'");
        return None;
    }
    let players = tokens[1..].iter().map(|t| PlayerId::from(*t)).collect();
    Some(Command::NewGame { players })
}

/// Parses `<action> <id>` for the four player actions.
fn parse_act(tokens: &[&str], action: Action) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed {}: expected '{} <player>'", tokens[0], tokens[0]);
        return None;
    }
    Some(Command::Act {
        player: PlayerId::from(tokens[1]),
        action,
    })
}
