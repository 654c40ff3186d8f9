//! League table computation.

use std::collections::HashMap;

use crate::models::{GroupStandings, Match, MatchStatus, Team, TeamStats};

/// Compute per-team records from completed matches.
///
/// Output contains one `TeamStats` per input team, in input order. Only
/// matches that are `completed` and carry both scores count; a completed
/// match with a missing score is skipped, as is any match referencing a
/// team id not present in `teams`.
pub fn calculate_team_stats(teams: &[Team], matches: &[Match]) -> Vec<TeamStats> {
    let mut stats: Vec<TeamStats> = teams.iter().map(|t| TeamStats::zeroed(t.id)).collect();
    let index: HashMap<i64, usize> = teams.iter().enumerate().map(|(i, t)| (t.id, i)).collect();

    for m in matches {
        if m.status != MatchStatus::Completed {
            continue;
        }
        let (Some(score_a), Some(score_b)) = (m.team_a_score, m.team_b_score) else {
            tracing::warn!("Match {} marked completed but missing scores; skipped", m.id);
            continue;
        };
        let (Some(&a), Some(&b)) = (index.get(&m.team_a_id), index.get(&m.team_b_id)) else {
            tracing::warn!("Match {} references an unknown team; skipped", m.id);
            continue;
        };

        apply_score(&mut stats[a], score_a, score_b);
        apply_score(&mut stats[b], score_b, score_a);
    }

    stats
}

fn apply_score(stats: &mut TeamStats, scored: u32, conceded: u32) {
    stats.played += 1;
    stats.goals_for += scored;
    stats.goals_against += conceded;
    stats.goal_difference = stats.goals_for as i64 - stats.goals_against as i64;

    if scored > conceded {
        stats.won += 1;
        stats.points += 3;
    } else if scored < conceded {
        stats.lost += 1;
    } else {
        stats.drawn += 1;
        stats.points += 1;
    }
}

/// Sort a table into league order.
///
/// Points descending, then goal difference, then goals scored; the smaller
/// team id wins the final tie-break so the order is a total order and does
/// not depend on input order.
pub fn rank(table: &mut [TeamStats]) {
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
}

/// Compute one ranked table per group present in the team list.
///
/// Groups are whatever `group_name` values appear in the input, returned in
/// name order; no label is hardcoded, so teams are never silently dropped.
pub fn group_standings(teams: &[Team], matches: &[Match]) -> Vec<GroupStandings> {
    let stats = calculate_team_stats(teams, matches);
    let by_id: HashMap<i64, &TeamStats> = stats.iter().map(|s| (s.team_id, s)).collect();

    let mut group_names: Vec<&str> = teams.iter().map(|t| t.group_name.as_str()).collect();
    group_names.sort_unstable();
    group_names.dedup();

    group_names
        .into_iter()
        .map(|group| {
            let mut table: Vec<TeamStats> = teams
                .iter()
                .filter(|t| t.group_name == group)
                .filter_map(|t| by_id.get(&t.id).map(|s| (*s).clone()))
                .collect();
            rank(&mut table);
            GroupStandings {
                group_name: group.to_string(),
                table,
            }
        })
        .collect()
}
