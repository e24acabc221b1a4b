//! Text analysis layers applied to each transcribed call.

pub mod entities;
pub mod intent;
pub mod urgency;
