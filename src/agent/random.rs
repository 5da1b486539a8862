use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::participant::{Participant, Seat};
use crate::error::SessionError;
use crate::game::{Board, PlayerId, COLS};
use crate::ui::Io;

/// A participant that picks uniformly at random among the open columns.
pub struct RandomParticipant {
    seat: Seat,
    rng: StdRng,
    think_time: Duration,
}

impl RandomParticipant {
    pub fn new(name: impl Into<String>, id: PlayerId) -> Self {
        RandomParticipant {
            seat: Seat::new(name, id),
            rng: StdRng::from_os_rng(),
            think_time: Duration::ZERO,
        }
    }

    /// Deterministic move sequence for a given seed.
    pub fn with_seed(name: impl Into<String>, id: PlayerId, seed: u64) -> Self {
        RandomParticipant {
            seat: Seat::new(name, id),
            rng: StdRng::seed_from_u64(seed),
            think_time: Duration::ZERO,
        }
    }

    /// Pause this long before and after announcing each move.
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time = think_time;
        self
    }

    /// Draw a column. Always in `0..COLS`; only a full board falls back to
    /// drawing from every column.
    pub fn pick_column(&mut self, board: &Board) -> usize {
        let open = board.open_columns();
        if open.is_empty() {
            return self.rng.random_range(0..COLS);
        }
        open[self.rng.random_range(0..open.len())]
    }

    fn pause(&self) {
        if !self.think_time.is_zero() {
            thread::sleep(self.think_time);
        }
    }
}

impl Participant for RandomParticipant {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn is_automated(&self) -> bool {
        true
    }

    fn select_column(&mut self, board: &Board, io: &mut Io<'_>) -> Result<usize, SessionError> {
        io.presenter.turn(&self.seat)?;
        self.pause();
        let col = self.pick_column(board);
        io.presenter.automated_move(&self.seat, col)?;
        self.pause();
        Ok(col)
    }
}
