//! Bounded debate state machine

pub mod round;
pub mod transcript;

pub use round::{DebateRound, PositionStatement};
pub use transcript::DebateTranscript;
