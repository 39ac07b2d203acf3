//! Neongrid engine library.
//!
//! Exposes the board model, the pure command reducer, and the driver
//! protocol modules for use by integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod protocol;
pub mod resolve;
