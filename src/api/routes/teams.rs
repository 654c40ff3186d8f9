use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Team;

pub async fn list_teams(State(state): State<AppState>) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = state.repo.list_teams().await?;
    Ok(Json(teams))
}

#[derive(Debug, Deserialize)]
pub struct UpdateTeamNameBody {
    pub name: String,
}

pub async fn update_team_name(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTeamNameBody>,
) -> Result<Json<Team>, ApiError> {
    let name = body.name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("team name must not be empty".into()));
    }

    let team = state.repo.update_team_name(id, name.to_string()).await?;
    Ok(Json(team))
}
