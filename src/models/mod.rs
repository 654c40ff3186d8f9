//! Core data models for the league tracker.

mod leaderboard;
mod matches;
mod prediction;
mod profile;
mod standings;
mod team;

pub use leaderboard::*;
pub use matches::*;
pub use prediction::*;
pub use profile::*;
pub use standings::*;
pub use team::*;
