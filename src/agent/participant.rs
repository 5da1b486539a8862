use crate::error::SessionError;
use crate::game::{Board, PlayerId};
use crate::ui::Io;

/// Who a participant is: display name plus the identity stamped on the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    pub id: PlayerId,
}

impl Seat {
    pub fn new(name: impl Into<String>, id: PlayerId) -> Self {
        Seat {
            name: name.into(),
            id,
        }
    }
}

/// Anything that can occupy a seat in a round.
pub trait Participant {
    fn seat(&self) -> &Seat;

    /// Whether moves are generated without outside input.
    fn is_automated(&self) -> bool;

    /// Produce one column in `0..COLS`, retrying internally until the choice
    /// is in range. Capacity is not checked here; the engine asks again when
    /// the column turns out to be full.
    fn select_column(&mut self, board: &Board, io: &mut Io<'_>) -> Result<usize, SessionError>;
}
