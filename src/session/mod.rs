//! The game engine: mode selection, participant setup, the turn cycle and
//! the replay decision, driven as a small state machine.

mod engine;

pub use engine::{parse_replay, round_outcome, GameEngine, Outcome, Phase, RoundSummary};
