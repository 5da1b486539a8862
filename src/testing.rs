//! Scripted collaborators for driving the engine in tests.

use std::collections::VecDeque;
use std::io;

use crate::agent::Seat;
use crate::error::{InputError, SessionError};
use crate::game::{Board, Cell, Mode, PlayerId};
use crate::ui::{Event, InputSource, Presenter, Prompt};

/// Hands out tokens in order, then reports the input as closed.
pub struct ScriptedInput {
    tokens: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<T: Into<String>>(tokens: impl IntoIterator<Item = T>) -> Self {
        ScriptedInput {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_token(&mut self) -> Result<String, SessionError> {
        self.tokens.pop_front().ok_or(SessionError::InputClosed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    ModePrompt,
    NamePrompt(PlayerId),
    ColumnPrompt(PlayerId),
    ReplayPrompt,
    ModeSelected(Mode),
    Board { round_over: bool, pieces: usize },
    Turn(PlayerId),
    AutomatedMove { player: PlayerId, column: usize },
    Win(PlayerId),
    LossToAutomated(PlayerId),
    Draw,
    InvalidMove(InputError),
    Rejected(InputError),
}

/// Remembers every call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub records: Vec<Record>,
}

impl RecordingPresenter {
    pub fn invalid_moves(&self) -> Vec<InputError> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::InvalidMove(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn rejections(&self) -> Vec<InputError> {
        self.records
            .iter()
            .filter_map(|r| match r {
                Record::Rejected(err) => Some(err.clone()),
                _ => None,
            })
            .collect()
    }

    /// Win, loss and draw records only.
    pub fn outcomes(&self) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| matches!(r, Record::Win(_) | Record::LossToAutomated(_) | Record::Draw))
            .cloned()
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn prompt(&mut self, prompt: &Prompt<'_>) -> io::Result<()> {
        self.records.push(match prompt {
            Prompt::Mode(_) => Record::ModePrompt,
            Prompt::Name(id) => Record::NamePrompt(*id),
            Prompt::Column(seat) => Record::ColumnPrompt(seat.id),
            Prompt::Replay => Record::ReplayPrompt,
        });
        Ok(())
    }

    fn mode_selected(&mut self, mode: Mode) -> io::Result<()> {
        self.records.push(Record::ModeSelected(mode));
        Ok(())
    }

    fn board(&mut self, board: &Board, round_over: bool) -> io::Result<()> {
        let pieces = board
            .rows()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != Cell::Empty)
            .count();
        self.records.push(Record::Board { round_over, pieces });
        Ok(())
    }

    fn turn(&mut self, seat: &Seat) -> io::Result<()> {
        self.records.push(Record::Turn(seat.id));
        Ok(())
    }

    fn automated_move(&mut self, seat: &Seat, column: usize) -> io::Result<()> {
        self.records.push(Record::AutomatedMove {
            player: seat.id,
            column,
        });
        Ok(())
    }

    fn event(&mut self, event: &Event<'_>) -> io::Result<()> {
        self.records.push(match event {
            Event::Win(seat) => Record::Win(seat.id),
            Event::LossToAutomated(seat) => Record::LossToAutomated(seat.id),
            Event::Draw => Record::Draw,
            Event::InvalidMove(err) => Record::InvalidMove(err.clone()),
        });
        Ok(())
    }

    fn rejected(&mut self, error: &InputError) -> io::Result<()> {
        self.records.push(Record::Rejected(error.clone()));
        Ok(())
    }
}
