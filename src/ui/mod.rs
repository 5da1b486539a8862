//! The engine's two external collaborators: an [`InputSource`] supplying raw
//! tokens and a [`Presenter`] rendering boards and outcome events, plus the
//! line-based console implementations of both.

pub mod board_widget;
mod console;
mod input;

pub use console::ConsolePresenter;
pub use input::{InputSource, LineInput};

use std::io;

use crate::agent::Seat;
use crate::error::{InputError, SessionError};
use crate::game::{Board, Mode, ModeSet, PlayerId};

/// What the engine is asking for.
#[derive(Debug, Clone, Copy)]
pub enum Prompt<'a> {
    Mode(&'a ModeSet),
    Name(PlayerId),
    Column(&'a Seat),
    Replay,
}

/// Round results and rejected moves, in the order they happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    Win(&'a Seat),
    /// An automated participant beat the lone human.
    LossToAutomated(&'a Seat),
    Draw,
    InvalidMove(InputError),
}

/// Presentation sink. Nothing here feeds back into game state.
pub trait Presenter {
    /// Ask for the next token.
    fn prompt(&mut self, prompt: &Prompt<'_>) -> io::Result<()>;

    fn mode_selected(&mut self, mode: Mode) -> io::Result<()>;

    /// Called after setup and after every applied move.
    fn board(&mut self, board: &Board, round_over: bool) -> io::Result<()>;

    /// Announce an automated participant before it starts thinking.
    fn turn(&mut self, seat: &Seat) -> io::Result<()>;

    /// Echo the column an automated participant chose.
    fn automated_move(&mut self, seat: &Seat, column: usize) -> io::Result<()>;

    fn event(&mut self, event: &Event<'_>) -> io::Result<()>;

    /// A mode or replay answer was not accepted.
    fn rejected(&mut self, error: &InputError) -> io::Result<()>;
}

/// Both collaborators, borrowed for the duration of one request.
pub struct Io<'a> {
    pub input: &'a mut dyn InputSource,
    pub presenter: &'a mut dyn Presenter,
}

impl Io<'_> {
    /// Show the prompt, then read one token.
    pub fn request(&mut self, prompt: &Prompt<'_>) -> Result<String, SessionError> {
        self.presenter.prompt(prompt)?;
        self.input.read_token()
    }
}
