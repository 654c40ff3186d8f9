//! Route handlers.

pub mod leaderboard;
pub mod matches;
pub mod meta;
pub mod predictions;
pub mod standings;
pub mod teams;
