//! Driver protocol.
//!
//! Text commands in, JSON snapshots out. The transport that carries these
//! lines (websocket, pipe, test harness) is not the engine's concern.

pub mod parser;
pub mod snapshot;

pub use parser::{parse_command, Command};
pub use snapshot::{format_state, format_verdicts, parse_state};
