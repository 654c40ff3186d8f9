use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::group_standings;
use crate::models::GroupStandings;

/// Grouped, ranked league tables computed from the current snapshot.
pub async fn standings(
    State(state): State<AppState>,
) -> Result<Json<Vec<GroupStandings>>, ApiError> {
    let teams = state.repo.list_teams().await?;
    let matches = state.repo.list_matches().await?;
    Ok(Json(group_standings(&teams, &matches)))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::routes::testutil::{get_json, setup_state, Fixture};
    use crate::models::{Match, Team};
    use axum::http::StatusCode;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_standings_grouped_and_ranked() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(
            &tmp,
            Fixture {
                teams: vec![
                    Team::new(1, "Red Lions", "A"),
                    Team::new(2, "Blue Foxes", "A"),
                    Team::new(3, "Green Owls", "B"),
                ],
                matches: vec![Match::new(1, 1, 2).with_result(2, 1)],
                ..Fixture::default()
            },
        );

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/standings").await;

        assert_eq!(status, StatusCode::OK);
        let groups = json.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["group_name"], "A");

        let table_a = groups[0]["table"].as_array().unwrap();
        assert_eq!(table_a[0]["teamId"], 1);
        assert_eq!(table_a[0]["points"], 3);
        assert_eq!(table_a[0]["goalDifference"], 1);
        assert_eq!(table_a[1]["teamId"], 2);
        assert_eq!(table_a[1]["points"], 0);
    }

    #[tokio::test]
    async fn test_standings_empty_league() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(&tmp, Fixture::default());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/standings").await;

        assert_eq!(status, StatusCode::OK);
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_standings_reflect_recorded_results() {
        let tmp = TempDir::new().unwrap();
        let state = setup_state(
            &tmp,
            Fixture {
                teams: vec![Team::new(1, "Red Lions", "A"), Team::new(2, "Blue Foxes", "A")],
                matches: vec![Match::new(1, 1, 2)],
                ..Fixture::default()
            },
        );
        let repo = state.repo.clone();

        // Nothing played yet
        let app = build_router(state.clone());
        let (_, json) = get_json(app, "/api/standings").await;
        assert_eq!(json[0]["table"][0]["played"], 0);

        // Record a result, then the snapshot recomputes
        repo.save_match_result(1, 0, 3).await.unwrap();
        let app = build_router(state);
        let (_, json) = get_json(app, "/api/standings").await;
        assert_eq!(json[0]["table"][0]["teamId"], 2);
        assert_eq!(json[0]["table"][0]["points"], 3);
    }
}
