use std::fmt;

/// Numeric identity of a participant. Doubles as the mark stamped into the
/// grid and as the key for win attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const FIRST: PlayerId = PlayerId(1);
    pub const SECOND: PlayerId = PlayerId(2);

    /// The participant who acts on a given 1-based turn: odd turns belong
    /// to the first participant, even turns to the second.
    pub fn for_turn(turn: u32) -> PlayerId {
        if turn % 2 == 1 {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::FIRST => PlayerId::SECOND,
            _ => PlayerId::FIRST,
        }
    }

    /// Zero-based seat index.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn number(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
