//! Match model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a match.
///
/// `Completed` is advisory: a match only counts toward standings and
/// prediction scoring once both scores are actually present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Completed,
}

/// A league match between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier
    pub id: i64,

    /// Home side
    pub team_a_id: i64,

    /// Away side (must differ from `team_a_id`)
    pub team_b_id: i64,

    /// Final score for team A, set together with `team_b_score`
    pub team_a_score: Option<u32>,

    /// Final score for team B
    pub team_b_score: Option<u32>,

    pub status: MatchStatus,

    /// Scheduled date, if known
    pub match_date: Option<NaiveDate>,
}

impl Match {
    /// Create a new scheduled match with no scores.
    pub fn new(id: i64, team_a_id: i64, team_b_id: i64) -> Self {
        Self {
            id,
            team_a_id,
            team_b_id,
            team_a_score: None,
            team_b_score: None,
            status: MatchStatus::Scheduled,
            match_date: None,
        }
    }

    /// Builder method to set the match date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.match_date = Some(date);
        self
    }

    /// Builder method to record a final result.
    pub fn with_result(mut self, team_a_score: u32, team_b_score: u32) -> Self {
        self.team_a_score = Some(team_a_score);
        self.team_b_score = Some(team_b_score);
        self.status = MatchStatus::Completed;
        self
    }

    /// Whether both final scores are present.
    pub fn has_scores(&self) -> bool {
        self.team_a_score.is_some() && self.team_b_score.is_some()
    }
}
