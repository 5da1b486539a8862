//! Core Connect Four game logic: the 7x7 board with gravity placement and
//! run detection, participant identities, and the selectable game modes.

mod board;
mod mode;
mod player;

pub use board::{Board, Cell, MoveError, COLS, ROWS, RUN};
pub use mode::{Mode, ModeSet};
pub use player::PlayerId;
