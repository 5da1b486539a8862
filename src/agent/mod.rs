mod human;
mod participant;
mod random;

pub use human::{parse_column, HumanParticipant};
pub use participant::{Participant, Seat};
pub use random::RandomParticipant;
