//! Dashboard aggregates: typed, on-demand views over the registry.
//!
//! Each struct here is the contract for one dashboard chart or stat
//! tile. Everything is recomputed from the live collections on every
//! call; nothing is cached or persisted.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::matches::MatchStatus;
use crate::state::registry::TeamRegistry;

/// One bar of the teams-per-state chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateCount {
    /// Two-letter UF code.
    pub state: String,
    pub teams: usize,
}

/// One slice of the category distribution chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub code: String,
    /// Display label from the fixed table; unknown codes verbatim.
    pub label: String,
    pub teams: usize,
}

/// One slice of the match-status chart. Only statuses that occur are
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: MatchStatus,
    pub label: String,
    pub matches: usize,
}

/// One point of the month-over-month series.
///
/// The platform keeps no history, so the series is mostly a fixed
/// baseline; `synthetic` separates those seed points from the single
/// live point so consumers never mistake the seed for real data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub month: String,
    pub teams: usize,
    pub matches: usize,
    pub synthetic: bool,
}

/// Top-level dashboard snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub total_teams: usize,
    pub total_matches: usize,
    /// Sum of roster sizes across all teams.
    pub total_players: usize,
    /// Distinct UF codes across all teams.
    pub states_represented: usize,
    /// 0.0 when no teams are registered.
    pub average_players_per_team: f64,
    /// Top 5 states by team count, descending (ties in code order).
    pub teams_by_state: Vec<StateCount>,
    /// Category distribution in code order.
    pub teams_by_category: Vec<CategoryCount>,
    pub matches_by_status: Vec<StatusCount>,
    pub growth: Vec<GrowthPoint>,
}

/// How many states the teams-per-state ranking keeps.
const TOP_STATES: usize = 5;

/// Fixed baseline of the growth series: (month, teams, matches).
const GROWTH_BASELINE: [(&str, usize, usize); 4] =
    [("Jan", 5, 2), ("Fev", 8, 4), ("Mar", 12, 6), ("Abr", 15, 8)];

/// Month label of the live growth point.
const GROWTH_LIVE_MONTH: &str = "Mai";

/// Entry point: compute the full dashboard snapshot from current state.
pub fn snapshot(registry: &TeamRegistry) -> DashboardSnapshot {
    let total_teams = registry.teams().len();
    let total_matches = registry.matches().len();
    let total_players: usize = registry.teams().iter().map(|t| t.players.len()).sum();

    let average_players_per_team = if total_teams == 0 {
        0.0
    } else {
        total_players as f64 / total_teams as f64
    };

    DashboardSnapshot {
        total_teams,
        total_matches,
        total_players,
        states_represented: count_states(registry),
        average_players_per_team,
        teams_by_state: teams_by_state(registry),
        teams_by_category: teams_by_category(registry),
        matches_by_status: matches_by_status(registry),
        growth: growth_series(total_teams, total_matches),
    }
}

fn count_states(registry: &TeamRegistry) -> usize {
    registry
        .teams()
        .iter()
        .map(|t| t.state.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}

fn teams_by_state(registry: &TeamRegistry) -> Vec<StateCount> {
    let mut by_state: BTreeMap<&str, usize> = BTreeMap::new();
    for team in registry.teams() {
        *by_state.entry(team.state.as_str()).or_default() += 1;
    }

    // BTreeMap iteration gives code order; the stable sort keeps it for
    // equal counts.
    let mut ranking: Vec<StateCount> = by_state
        .into_iter()
        .map(|(state, teams)| StateCount {
            state: state.to_string(),
            teams,
        })
        .collect();
    ranking.sort_by(|a, b| b.teams.cmp(&a.teams));
    ranking.truncate(TOP_STATES);
    ranking
}

fn teams_by_category(registry: &TeamRegistry) -> Vec<CategoryCount> {
    let mut by_code: BTreeMap<&str, (&str, usize)> = BTreeMap::new();
    for team in registry.teams() {
        let entry = by_code
            .entry(team.category.code())
            .or_insert((team.category.label(), 0));
        entry.1 += 1;
    }

    by_code
        .into_iter()
        .map(|(code, (label, teams))| CategoryCount {
            code: code.to_string(),
            label: label.to_string(),
            teams,
        })
        .collect()
}

fn matches_by_status(registry: &TeamRegistry) -> Vec<StatusCount> {
    [
        MatchStatus::Scheduled,
        MatchStatus::Ongoing,
        MatchStatus::Completed,
    ]
    .into_iter()
    .filter_map(|status| {
        let matches = registry
            .matches()
            .iter()
            .filter(|m| m.status == status)
            .count();
        (matches > 0).then(|| StatusCount {
            status,
            label: status.label().to_string(),
            matches,
        })
    })
    .collect()
}

fn growth_series(total_teams: usize, total_matches: usize) -> Vec<GrowthPoint> {
    let mut series: Vec<GrowthPoint> = GROWTH_BASELINE
        .iter()
        .map(|&(month, teams, matches)| GrowthPoint {
            month: month.to_string(),
            teams,
            matches,
            synthetic: true,
        })
        .collect();
    series.push(GrowthPoint {
        month: GROWTH_LIVE_MONTH.to_string(),
        teams: total_teams,
        matches: total_matches,
        synthetic: false,
    });
    series
}
