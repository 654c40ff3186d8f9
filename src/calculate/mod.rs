//! Standings and leaderboard computation.
//!
//! The calculation engine is pure: it takes snapshots of league data and
//! returns freshly allocated aggregates, with no I/O and no state between
//! calls. Callers re-run it from a full snapshot after every data change.
//!
//! - **standings**: per-team win/draw/loss records and group ranking
//! - **leaderboard**: per-user prediction scores and outcome counters

mod leaderboard;
mod standings;

pub use leaderboard::*;
pub use standings::*;
