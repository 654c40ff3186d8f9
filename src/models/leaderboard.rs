//! Derived leaderboard models.

use serde::{Deserialize, Serialize};

use super::{Profile, Role};

/// A profile extended with its prediction score and outcome counters.
///
/// Invariant: `total_predictions == correct_predictions + wrong_predictions
/// + pending_predictions`, and `score == correct_predictions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileWithScore {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub score: u32,
    pub total_predictions: u32,
    pub correct_predictions: u32,
    pub wrong_predictions: u32,
    pub pending_predictions: u32,
}

impl ProfileWithScore {
    /// Zeroed counters for a profile.
    pub fn zeroed(profile: &Profile) -> Self {
        Self {
            id: profile.id.clone(),
            username: profile.username.clone(),
            role: profile.role,
            score: 0,
            total_predictions: 0,
            correct_predictions: 0,
            wrong_predictions: 0,
            pending_predictions: 0,
        }
    }
}
