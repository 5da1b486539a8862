//! # Connect Four
//!
//! Console four-in-a-row on a 7x7 grid. Each seat is either a human typing
//! column numbers or an automated participant dropping pieces at random.
//!
//! ## Modules
//!
//! - [`game`] — Board with gravity placement and run detection, player ids, modes
//! - [`agent`] — Participant trait with human and random implementations
//! - [`session`] — Game engine: setup, turn cycle, outcomes, replay
//! - [`ui`] — Input source and presenter contracts, console implementations
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod agent;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod ui;

#[cfg(test)]
mod testing;
