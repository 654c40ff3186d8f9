//! Repository abstraction over the league data store.
//!
//! The calculators only ever see plain snapshots; this layer owns all reads
//! and mutations. Every successful mutation is published on a broadcast
//! channel so callers can re-fetch and recompute instead of tracking state
//! of their own.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::info;

use crate::models::{Match, MatchStatus, Prediction, PredictionResult, Profile, Team};
use crate::storage::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

/// A data change notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEvent {
    MatchUpdated { match_id: i64 },
    TeamUpdated { team_id: i64 },
    PredictionUpserted { match_id: i64, user_id: String },
}

/// Read and mutation operations on league data.
///
/// Reads return full snapshots; empty lists are valid. Mutations are the
/// only way data changes, and each one emits a [`ChangeEvent`].
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError>;

    /// All matches, ordered by date (undated last) then id.
    async fn list_matches(&self) -> Result<Vec<Match>, RepoError>;

    async fn list_predictions(&self) -> Result<Vec<Prediction>, RepoError>;

    async fn list_profiles(&self) -> Result<Vec<Profile>, RepoError>;

    /// Record a final score and mark the match completed.
    async fn save_match_result(
        &self,
        match_id: i64,
        team_a_score: u32,
        team_b_score: u32,
    ) -> Result<Match, RepoError>;

    /// Reschedule a match. Rejected once the match is completed.
    async fn update_match_date(&self, match_id: i64, date: NaiveDate) -> Result<Match, RepoError>;

    async fn update_team_name(&self, team_id: i64, name: String) -> Result<Team, RepoError>;

    /// Insert or replace the prediction keyed by (match, user).
    async fn upsert_prediction(
        &self,
        match_id: i64,
        user_id: String,
        prediction: PredictionResult,
    ) -> Result<Prediction, RepoError>;

    /// Subscribe to change notifications.
    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent>;
}

/// JSONL-backed repository.
///
/// Mutations are read-modify-rewrite over a whole entity file, so they hold
/// `write_lock` for their full duration; without it two concurrent writers
/// would each rewrite from the same snapshot and the last one would win.
pub struct JsonlRepository {
    storage: StorageConfig,
    changes: broadcast::Sender<ChangeEvent>,
    write_lock: Mutex<()>,
}

impl JsonlRepository {
    pub fn new(storage: StorageConfig) -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            storage,
            changes,
            write_lock: Mutex::new(()),
        }
    }

    fn read_matches(&self) -> Result<Vec<Match>, RepoError> {
        let reader = JsonlReader::<Match>::for_entity(&self.storage, EntityType::Match);
        Ok(reader.read_all()?)
    }

    fn write_matches(&self, matches: &[Match]) -> Result<(), RepoError> {
        let writer = JsonlWriter::<Match>::for_entity(&self.storage, EntityType::Match);
        writer.write_all(matches)?;
        Ok(())
    }

    fn notify(&self, event: ChangeEvent) {
        // No receivers is fine; nobody is watching yet.
        let _ = self.changes.send(event);
    }
}

#[async_trait]
impl LeagueRepository for JsonlRepository {
    async fn list_teams(&self) -> Result<Vec<Team>, RepoError> {
        let reader = JsonlReader::<Team>::for_entity(&self.storage, EntityType::Team);
        Ok(reader.read_all()?)
    }

    async fn list_matches(&self) -> Result<Vec<Match>, RepoError> {
        let mut matches = self.read_matches()?;
        matches.sort_by(|a, b| match (a.match_date, b.match_date) {
            (Some(da), Some(db)) => da.cmp(&db).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.id.cmp(&b.id),
        });
        Ok(matches)
    }

    async fn list_predictions(&self) -> Result<Vec<Prediction>, RepoError> {
        let reader = JsonlReader::<Prediction>::for_entity(&self.storage, EntityType::Prediction);
        Ok(reader.read_all()?)
    }

    async fn list_profiles(&self) -> Result<Vec<Profile>, RepoError> {
        let reader = JsonlReader::<Profile>::for_entity(&self.storage, EntityType::Profile);
        Ok(reader.read_all()?)
    }

    async fn save_match_result(
        &self,
        match_id: i64,
        team_a_score: u32,
        team_b_score: u32,
    ) -> Result<Match, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut matches = self.read_matches()?;
        let m = matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| RepoError::NotFound(format!("match {}", match_id)))?;

        m.team_a_score = Some(team_a_score);
        m.team_b_score = Some(team_b_score);
        m.status = MatchStatus::Completed;
        let updated = m.clone();

        self.write_matches(&matches)?;
        info!(
            "Recorded result {}-{} for match {}",
            team_a_score, team_b_score, match_id
        );
        self.notify(ChangeEvent::MatchUpdated { match_id });
        Ok(updated)
    }

    async fn update_match_date(&self, match_id: i64, date: NaiveDate) -> Result<Match, RepoError> {
        let _guard = self.write_lock.lock().await;
        let mut matches = self.read_matches()?;
        let m = matches
            .iter_mut()
            .find(|m| m.id == match_id)
            .ok_or_else(|| RepoError::NotFound(format!("match {}", match_id)))?;

        if m.status == MatchStatus::Completed {
            return Err(RepoError::Conflict(format!(
                "match {} is completed and cannot be rescheduled",
                match_id
            )));
        }

        m.match_date = Some(date);
        let updated = m.clone();

        self.write_matches(&matches)?;
        info!("Rescheduled match {} to {}", match_id, date);
        self.notify(ChangeEvent::MatchUpdated { match_id });
        Ok(updated)
    }

    async fn update_team_name(&self, team_id: i64, name: String) -> Result<Team, RepoError> {
        let _guard = self.write_lock.lock().await;
        let reader = JsonlReader::<Team>::for_entity(&self.storage, EntityType::Team);
        let mut teams = reader.read_all()?;
        let team = teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| RepoError::NotFound(format!("team {}", team_id)))?;

        team.name = name;
        let updated = team.clone();

        let writer = JsonlWriter::<Team>::for_entity(&self.storage, EntityType::Team);
        writer.write_all(&teams)?;
        info!("Renamed team {} to '{}'", team_id, updated.name);
        self.notify(ChangeEvent::TeamUpdated { team_id });
        Ok(updated)
    }

    async fn upsert_prediction(
        &self,
        match_id: i64,
        user_id: String,
        prediction: PredictionResult,
    ) -> Result<Prediction, RepoError> {
        let _guard = self.write_lock.lock().await;
        let reader = JsonlReader::<Prediction>::for_entity(&self.storage, EntityType::Prediction);
        let mut predictions = reader.read_all()?;

        let upserted = match predictions
            .iter_mut()
            .find(|p| p.match_id == match_id && p.user_id == user_id)
        {
            Some(existing) => {
                existing.prediction = prediction;
                existing.clone()
            }
            None => {
                let next_id = predictions
                    .iter()
                    .filter_map(|p| p.id)
                    .max()
                    .unwrap_or(0)
                    + 1;
                let mut new = Prediction::new(match_id, user_id.clone(), prediction);
                new.id = Some(next_id);
                predictions.push(new.clone());
                new
            }
        };

        let writer = JsonlWriter::<Prediction>::for_entity(&self.storage, EntityType::Prediction);
        writer.write_all(&predictions)?;
        info!(
            "Stored prediction {} for match {} by {}",
            prediction, match_id, upserted.user_id
        );
        self.notify(ChangeEvent::PredictionUpserted { match_id, user_id });
        Ok(upserted)
    }

    fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.changes.subscribe()
    }
}
