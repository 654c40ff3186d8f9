//! Prediction leaderboard computation.

use std::collections::HashMap;

use crate::models::{Match, MatchStatus, Prediction, PredictionResult, Profile, ProfileWithScore};

/// Determine the actual outcome of a match.
///
/// Returns `None` unless the match is completed with both scores present;
/// the status flag alone is not trusted.
pub fn match_outcome(m: &Match) -> Option<PredictionResult> {
    if m.status != MatchStatus::Completed {
        return None;
    }
    let (score_a, score_b) = (m.team_a_score?, m.team_b_score?);
    Some(if score_a > score_b {
        PredictionResult::TeamA
    } else if score_b > score_a {
        PredictionResult::TeamB
    } else {
        PredictionResult::Draw
    })
}

/// Score every profile's predictions against actual match outcomes.
///
/// Each prediction by a known profile counts toward that profile's total.
/// Predictions whose match has no decidable outcome yet are pending; this
/// includes dangling match references, so `total == correct + wrong +
/// pending` holds for every profile. Predictions by unknown users are
/// ignored. Output is sorted by score descending, stable for ties.
pub fn calculate_leaderboard(
    profiles: &[Profile],
    matches: &[Match],
    predictions: &[Prediction],
) -> Vec<ProfileWithScore> {
    let mut entries: Vec<ProfileWithScore> =
        profiles.iter().map(ProfileWithScore::zeroed).collect();
    let index: HashMap<&str, usize> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), i))
        .collect();
    let outcomes: HashMap<i64, Option<PredictionResult>> =
        matches.iter().map(|m| (m.id, match_outcome(m))).collect();

    for p in predictions {
        let Some(&i) = index.get(p.user_id.as_str()) else {
            tracing::warn!("Prediction by unknown user {}; ignored", p.user_id);
            continue;
        };
        let entry = &mut entries[i];
        entry.total_predictions += 1;

        match outcomes.get(&p.match_id) {
            Some(Some(actual)) if *actual == p.prediction => {
                entry.correct_predictions += 1;
                entry.score += 1;
            }
            Some(Some(_)) => entry.wrong_predictions += 1,
            // Scheduled, completed-without-scores, or dangling reference
            _ => entry.pending_predictions += 1,
        }
    }

    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn profile(id: &str) -> Profile {
        Profile::new(id, format!("user-{}", id))
    }

    #[test]
    fn test_match_outcome_team_a_wins() {
        let m = Match::new(1, 10, 20).with_result(2, 1);
        assert_eq!(match_outcome(&m), Some(PredictionResult::TeamA));
    }

    #[test]
    fn test_match_outcome_team_b_wins() {
        let m = Match::new(1, 10, 20).with_result(0, 3);
        assert_eq!(match_outcome(&m), Some(PredictionResult::TeamB));
    }

    #[test]
    fn test_match_outcome_draw() {
        let m = Match::new(1, 10, 20).with_result(2, 2);
        assert_eq!(match_outcome(&m), Some(PredictionResult::Draw));
    }

    #[test]
    fn test_match_outcome_scheduled_is_none() {
        assert_eq!(match_outcome(&Match::new(1, 10, 20)), None);
    }

    #[test]
    fn test_match_outcome_completed_without_scores_is_none() {
        let mut m = Match::new(1, 10, 20);
        m.status = MatchStatus::Completed;
        assert_eq!(match_outcome(&m), None);
    }

    #[test]
    fn test_correct_prediction_scores_one_point() {
        let profiles = vec![profile("u1")];
        let matches = vec![Match::new(1, 10, 20).with_result(2, 1)];
        let predictions = vec![Prediction::new(1, "u1", PredictionResult::TeamA)];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(board[0].score, 1);
        assert_eq!(board[0].total_predictions, 1);
        assert_eq!(board[0].correct_predictions, 1);
        assert_eq!(board[0].wrong_predictions, 0);
        assert_eq!(board[0].pending_predictions, 0);
    }

    #[test]
    fn test_wrong_prediction() {
        let profiles = vec![profile("u1")];
        let matches = vec![Match::new(1, 10, 20).with_result(0, 1)];
        let predictions = vec![Prediction::new(1, "u1", PredictionResult::Draw)];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(board[0].score, 0);
        assert_eq!(board[0].wrong_predictions, 1);
        assert_eq!(board[0].correct_predictions, 0);
    }

    #[test]
    fn test_prediction_on_scheduled_match_is_pending() {
        let profiles = vec![profile("v")];
        let matches = vec![Match::new(1, 10, 20)];
        let predictions = vec![Prediction::new(1, "v", PredictionResult::Draw)];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(board[0].total_predictions, 1);
        assert_eq!(board[0].pending_predictions, 1);
        assert_eq!(board[0].correct_predictions, 0);
        assert_eq!(board[0].wrong_predictions, 0);
        assert_eq!(board[0].score, 0);
    }

    #[test]
    fn test_dangling_match_reference_counts_as_pending() {
        let profiles = vec![profile("u1")];
        let predictions = vec![Prediction::new(404, "u1", PredictionResult::TeamB)];

        let board = calculate_leaderboard(&profiles, &[], &predictions);
        assert_eq!(board[0].total_predictions, 1);
        assert_eq!(board[0].pending_predictions, 1);
    }

    #[test]
    fn test_completed_match_with_null_scores_is_pending() {
        let profiles = vec![profile("u1")];
        let mut m = Match::new(1, 10, 20);
        m.status = MatchStatus::Completed;
        let predictions = vec![Prediction::new(1, "u1", PredictionResult::TeamA)];

        let board = calculate_leaderboard(&profiles, &[m], &predictions);
        assert_eq!(board[0].pending_predictions, 1);
        assert_eq!(board[0].wrong_predictions, 0);
    }

    #[test]
    fn test_prediction_by_unknown_user_is_ignored() {
        let profiles = vec![profile("u1")];
        let matches = vec![Match::new(1, 10, 20).with_result(1, 0)];
        let predictions = vec![Prediction::new(1, "ghost", PredictionResult::TeamA)];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_predictions, 0);
    }

    #[test]
    fn test_counter_sum_invariant() {
        let profiles = vec![profile("u1"), profile("u2")];
        let matches = vec![
            Match::new(1, 10, 20).with_result(2, 0),
            Match::new(2, 10, 20).with_result(1, 1),
            Match::new(3, 10, 20),
        ];
        let predictions = vec![
            Prediction::new(1, "u1", PredictionResult::TeamA),
            Prediction::new(2, "u1", PredictionResult::TeamB),
            Prediction::new(3, "u1", PredictionResult::Draw),
            Prediction::new(99, "u2", PredictionResult::Draw),
            Prediction::new(1, "u2", PredictionResult::TeamB),
        ];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        for entry in &board {
            assert_eq!(
                entry.total_predictions,
                entry.correct_predictions + entry.wrong_predictions + entry.pending_predictions
            );
            assert_eq!(entry.score, entry.correct_predictions);
        }
    }

    #[test]
    fn test_sorted_by_score_descending_stable() {
        let profiles = vec![profile("low"), profile("high"), profile("also_low")];
        let matches = vec![Match::new(1, 10, 20).with_result(3, 1)];
        let predictions = vec![Prediction::new(1, "high", PredictionResult::TeamA)];

        let board = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(board[0].id, "high");
        // Equal scores keep profile order
        assert_eq!(board[1].id, "low");
        assert_eq!(board[2].id, "also_low");
    }

    #[test]
    fn test_empty_inputs() {
        assert!(calculate_leaderboard(&[], &[], &[]).is_empty());

        let profiles = vec![profile("u1")];
        let board = calculate_leaderboard(&profiles, &[], &[]);
        assert_eq!(board.len(), 1);
        assert_eq!(board[0].total_predictions, 0);
        assert_eq!(board[0].score, 0);
    }

    #[test]
    fn test_idempotence() {
        let profiles = vec![profile("u1"), profile("u2")];
        let matches = vec![
            Match::new(1, 10, 20).with_result(2, 0),
            Match::new(2, 10, 20),
        ];
        let predictions = vec![
            Prediction::new(1, "u1", PredictionResult::TeamA),
            Prediction::new(2, "u2", PredictionResult::Draw),
        ];

        let first = calculate_leaderboard(&profiles, &matches, &predictions);
        let second = calculate_leaderboard(&profiles, &matches, &predictions);
        assert_eq!(first, second);
    }
}
