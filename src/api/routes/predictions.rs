use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::match_outcome;
use crate::models::{Prediction, PredictionResult};

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub user_id: Option<String>,
}

pub async fn list_predictions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Prediction>>, ApiError> {
    let mut predictions = state.repo.list_predictions().await?;
    if let Some(user_id) = params.user_id {
        predictions.retain(|p| p.user_id == user_id);
    }
    Ok(Json(predictions))
}

#[derive(Debug, Deserialize)]
pub struct SubmitPredictionBody {
    pub match_id: i64,
    pub user_id: String,
    pub prediction: PredictionResult,
}

/// Upsert a user's pick for a match. Picks are locked once the match has a
/// decided outcome.
pub async fn submit_prediction(
    State(state): State<AppState>,
    Json(body): Json<SubmitPredictionBody>,
) -> Result<Json<Prediction>, ApiError> {
    let matches = state.repo.list_matches().await?;
    let m = matches
        .iter()
        .find(|m| m.id == body.match_id)
        .ok_or_else(|| ApiError::NotFound(format!("match {}", body.match_id)))?;

    if match_outcome(m).is_some() {
        return Err(ApiError::Conflict(format!(
            "match {} is already decided",
            body.match_id
        )));
    }

    let prediction = state
        .repo
        .upsert_prediction(body.match_id, body.user_id, body.prediction)
        .await?;
    Ok(Json(prediction))
}
