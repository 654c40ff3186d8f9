use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Match;

pub async fn list_matches(State(state): State<AppState>) -> Result<Json<Vec<Match>>, ApiError> {
    let matches = state.repo.list_matches().await?;
    Ok(Json(matches))
}

#[derive(Debug, Deserialize)]
pub struct RecordResultBody {
    pub team_a_score: u32,
    pub team_b_score: u32,
}

pub async fn record_result(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<RecordResultBody>,
) -> Result<Json<Match>, ApiError> {
    let updated = state
        .repo
        .save_match_result(id, body.team_a_score, body.team_b_score)
        .await?;
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct SetDateBody {
    pub match_date: String,
}

pub async fn set_date(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetDateBody>,
) -> Result<Json<Match>, ApiError> {
    let date = NaiveDate::parse_from_str(&body.match_date, "%Y-%m-%d").map_err(|_| {
        ApiError::BadRequest(format!(
            "invalid match_date '{}' (expected YYYY-MM-DD)",
            body.match_date
        ))
    })?;

    let updated = state.repo.update_match_date(id, date).await?;
    Ok(Json(updated))
}
