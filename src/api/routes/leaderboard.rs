use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::calculate_leaderboard;
use crate::models::ProfileWithScore;

/// Prediction leaderboard computed from the current snapshot.
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileWithScore>>, ApiError> {
    let profiles = state.repo.list_profiles().await?;
    let matches = state.repo.list_matches().await?;
    let predictions = state.repo.list_predictions().await?;
    Ok(Json(calculate_leaderboard(&profiles, &matches, &predictions)))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::testutil::{get_json, setup_state, Fixture};
    use crate::models::{Match, Prediction, PredictionResult, Profile, Team};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_leaderboard_scores_and_sorts() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(
            &tmp,
            Fixture {
                teams: vec![Team::new(1, "Red Lions", "A"), Team::new(2, "Blue Foxes", "A")],
                matches: vec![
                    Match::new(1, 1, 2).with_result(2, 1),
                    Match::new(2, 2, 1),
                ],
                predictions: vec![
                    Prediction::new(1, "u1", PredictionResult::TeamA),
                    Prediction::new(1, "u2", PredictionResult::Draw),
                    Prediction::new(2, "u2", PredictionResult::TeamB),
                ],
                profiles: vec![Profile::new("u1", "alice"), Profile::new("u2", "bob")],
            },
        );

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/leaderboard").await;

        assert_eq!(status, StatusCode::OK);
        let board = json.as_array().unwrap();
        assert_eq!(board.len(), 2);

        assert_eq!(board[0]["username"], "alice");
        assert_eq!(board[0]["score"], 1);
        assert_eq!(board[0]["correctPredictions"], 1);

        assert_eq!(board[1]["username"], "bob");
        assert_eq!(board[1]["score"], 0);
        assert_eq!(board[1]["wrongPredictions"], 1);
        assert_eq!(board[1]["pendingPredictions"], 1);
        assert_eq!(board[1]["totalPredictions"], 2);
    }

    #[tokio::test]
    async fn test_leaderboard_empty() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(&tmp, Fixture::default());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/leaderboard").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }
}
