//! Prediction model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A predicted (or actual) match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionResult {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
    #[serde(rename = "draw")]
    Draw,
}

impl fmt::Display for PredictionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictionResult::TeamA => write!(f, "teamA"),
            PredictionResult::TeamB => write!(f, "teamB"),
            PredictionResult::Draw => write!(f, "draw"),
        }
    }
}

impl FromStr for PredictionResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teamA" => Ok(PredictionResult::TeamA),
            "teamB" => Ok(PredictionResult::TeamB),
            "draw" => Ok(PredictionResult::Draw),
            other => Err(format!(
                "invalid prediction '{}' (expected teamA, teamB or draw)",
                other
            )),
        }
    }
}

/// A user's pick for one match.
///
/// At most one prediction exists per (match, user) pair; the repository
/// enforces this with upsert semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub match_id: i64,

    pub user_id: String,

    pub prediction: PredictionResult,
}

impl Prediction {
    pub fn new(match_id: i64, user_id: impl Into<String>, prediction: PredictionResult) -> Self {
        Self {
            id: None,
            match_id,
            user_id: user_id.into(),
            prediction,
        }
    }
}
