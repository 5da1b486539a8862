use super::participant::{Participant, Seat};
use crate::error::{InputError, SessionError};
use crate::game::{Board, PlayerId, COLS};
use crate::ui::{Event, Io, Prompt};

/// A participant whose moves are typed in as 1-based column numbers.
pub struct HumanParticipant {
    seat: Seat,
}

impl HumanParticipant {
    pub fn new(name: impl Into<String>, id: PlayerId) -> Self {
        HumanParticipant {
            seat: Seat::new(name, id),
        }
    }
}

/// Convert a 1-based column token to a 0-based index in `0..COLS`.
pub fn parse_column(token: &str) -> Result<usize, InputError> {
    let token = token.trim();
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::Malformed(token.to_string()))?;
    match value.checked_sub(1).map(usize::try_from) {
        Some(Ok(col)) if col < COLS => Ok(col),
        _ => Err(InputError::OutOfRange { value, max: COLS }),
    }
}

impl Participant for HumanParticipant {
    fn seat(&self) -> &Seat {
        &self.seat
    }

    fn is_automated(&self) -> bool {
        false
    }

    fn select_column(&mut self, _board: &Board, io: &mut Io<'_>) -> Result<usize, SessionError> {
        loop {
            let token = io.request(&Prompt::Column(&self.seat))?;
            match parse_column(&token) {
                Ok(col) => return Ok(col),
                Err(err) => {
                    log::debug!("{} entered {:?}: {}", self.seat.name, token, err);
                    io.presenter.event(&Event::InvalidMove(err))?;
                }
            }
        }
    }
}
