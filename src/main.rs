//! Neongrid -- a property-trading board game engine.
//!
//! This binary reads driver commands from stdin and writes JSON snapshot
//! responses to stdout. The rendering and transport layers sit on the
//! other side of this pipe.

use std::io::{self, BufRead};

use neongrid::engine::Engine;
use neongrid::protocol::parser::{parse_command, Command};

/// Runs the main driver loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame { players } => {
                engine.handle_newgame(players, &mut out);
            }
            Command::Act { player, action } => {
                engine.handle_action(&player, action, &mut out);
            }
            Command::State => {
                engine.handle_state(&mut out);
            }
            Command::Quit => {
                break;
            }
        }
    }
}
