//! # League Tracker
//!
//! A two-group football league tracker with a match prediction game.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (teams, matches, predictions, profiles)
//! - **calculate**: Standings and leaderboard computation (pure functions)
//! - **storage**: JSONL persistence for league data
//! - **repo**: Repository abstraction over the data store, with change notifications
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod repo;
pub mod storage;

pub use models::*;
