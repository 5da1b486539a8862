use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::board_widget::{paint, render_board, FRAME_WIDTH};
use super::{Event, Presenter, Prompt};
use crate::agent::Seat;
use crate::config::DisplayConfig;
use crate::error::InputError;
use crate::game::{Board, Mode};

/// Line-based console rendering with an optional colored frame.
pub struct ConsolePresenter<W: Write> {
    out: W,
    color: bool,
    clear_screen: bool,
}

impl<W: Write> ConsolePresenter<W> {
    pub fn new(out: W, display: &DisplayConfig) -> Self {
        ConsolePresenter {
            out,
            color: display.color,
            clear_screen: display.clear_screen,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self, fill: char) -> io::Result<()> {
        writeln!(self.out, "{}", fill.to_string().repeat(FRAME_WIDTH + 2))
    }

    fn boxed(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "|{:^width$}|", text, width = FRAME_WIDTH)
    }

    /// Clear the screen (when enabled) and draw the title banner.
    fn title(&mut self) -> io::Result<()> {
        if self.clear_screen {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        self.rule('=')?;
        self.boxed("")?;
        self.boxed("CONNECT FOUR")?;
        self.boxed("")?;
        self.rule('-')
    }

    fn name(&self, seat: &Seat) -> String {
        paint(&seat.name, seat.id, self.color)
    }
}

fn invalid_move_reason(error: &InputError) -> &'static str {
    match error {
        InputError::Malformed(_) => "Not a valid column no.",
        InputError::OutOfRange { .. } => "Column no. out of range",
        InputError::ColumnFull(_) => "Column is already full",
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn prompt(&mut self, prompt: &Prompt<'_>) -> io::Result<()> {
        match prompt {
            Prompt::Mode(modes) => {
                self.title()?;
                self.boxed("<<<<<<<<<<<< SELECT MODE >>>>>>>>>>>>")?;
                self.boxed("")?;
                for (i, mode) in modes.modes().iter().enumerate() {
                    self.boxed(&format!("[{}]: {:<24}", i + 1, mode.name()))?;
                }
                self.boxed("")?;
                self.rule('=')?;
                write!(self.out, "Please select game mode: ")?;
            }
            Prompt::Name(id) => {
                writeln!(self.out)?;
                let marker = paint("   ", *id, self.color);
                write!(self.out, "{marker} Please enter Player {id}'s name: ")?;
            }
            Prompt::Column(seat) => {
                let name = self.name(seat);
                write!(self.out, "{name}'s turn: ")?;
            }
            Prompt::Replay => {
                write!(self.out, "Do you want to play again (Y/N)? ")?;
            }
        }
        self.out.flush()
    }

    fn mode_selected(&mut self, mode: Mode) -> io::Result<()> {
        self.title()?;
        let banner = format!("<<<<<<<<  {}  >>>>>>>>", mode.name().to_uppercase());
        self.boxed(&banner)?;
        self.rule('-')?;
        self.out.flush()
    }

    fn board(&mut self, board: &Board, round_over: bool) -> io::Result<()> {
        self.title()?;
        for line in render_board(board, self.color) {
            writeln!(self.out, "{line}")?;
        }
        if !round_over {
            self.boxed(" Please input column no. to cast move: ")?;
            self.rule('=')?;
        }
        self.out.flush()
    }

    fn turn(&mut self, seat: &Seat) -> io::Result<()> {
        let name = self.name(seat);
        write!(self.out, "{name}'s turn: ")?;
        self.out.flush()
    }

    fn automated_move(&mut self, _seat: &Seat, column: usize) -> io::Result<()> {
        writeln!(self.out, "{}", column + 1)?;
        self.out.flush()
    }

    fn event(&mut self, event: &Event<'_>) -> io::Result<()> {
        match event {
            Event::Win(seat) => {
                let name = self.name(seat);
                writeln!(self.out, "| Congratulations! {name} wins!")?;
                self.rule('=')?;
            }
            Event::LossToAutomated(seat) => {
                let name = self.name(seat);
                writeln!(self.out, "| Sorry, {name} wins! =(")?;
                self.rule('=')?;
            }
            Event::Draw => {
                self.boxed(" The game is a draw!")?;
                self.rule('=')?;
            }
            Event::InvalidMove(error) => {
                writeln!(self.out, "Invalid move. {}!", invalid_move_reason(error))?;
            }
        }
        self.out.flush()
    }

    fn rejected(&mut self, error: &InputError) -> io::Result<()> {
        writeln!(self.out, "Invalid option entered! ({error})")?;
        self.out.flush()
    }
}
