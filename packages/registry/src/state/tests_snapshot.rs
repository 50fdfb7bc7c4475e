use time::macros::datetime;

use crate::domain::category::Category;
use crate::domain::matches::MatchStatus;
use crate::state::registry::TeamRegistry;
use crate::state::snapshot::snapshot;
use crate::state::test_helpers::{sample_team, sample_team_with_roster};

#[test]
fn empty_registry_snapshot_is_all_zeros_not_an_error() {
    let registry = TeamRegistry::new();

    let snap = snapshot(&registry);

    assert_eq!(snap.total_teams, 0);
    assert_eq!(snap.total_matches, 0);
    assert_eq!(snap.total_players, 0);
    assert_eq!(snap.states_represented, 0);
    assert_eq!(snap.average_players_per_team, 0.0);
    assert!(!snap.average_players_per_team.is_nan());
    assert!(snap.teams_by_state.is_empty());
    assert!(snap.teams_by_category.is_empty());
    assert!(snap.matches_by_status.is_empty());
}

#[test]
fn totals_and_average_follow_roster_sizes() {
    let mut registry = TeamRegistry::new();
    registry.register_team(sample_team_with_roster(
        "Meninas da Vila",
        "SP",
        Category::Adulto,
        "Maria - 111\nAna - 222\nBia - 333",
    ));
    let b = registry.register_team(sample_team("Guerreiras FC", "RJ", Category::Adulto));
    registry
        .add_player(b.team_id, "Carla Dias", "444.555.666-77", None)
        .unwrap();

    let snap = snapshot(&registry);

    assert_eq!(snap.total_teams, 2);
    assert_eq!(snap.total_players, 4);
    assert_eq!(snap.average_players_per_team, 2.0);
}

#[test]
fn teams_by_state_ranks_descending_and_keeps_top_five() {
    let mut registry = TeamRegistry::new();
    for state in ["SP", "SP", "SP", "RJ", "RJ", "BA", "MG", "PR", "RS", "SC"] {
        registry.register_team(sample_team("Time", state, Category::Adulto));
    }

    let snap = snapshot(&registry);

    assert_eq!(snap.states_represented, 7);
    assert_eq!(snap.teams_by_state.len(), 5);
    assert_eq!(snap.teams_by_state[0].state, "SP");
    assert_eq!(snap.teams_by_state[0].teams, 3);
    assert_eq!(snap.teams_by_state[1].state, "RJ");
    assert_eq!(snap.teams_by_state[1].teams, 2);
    // Singleton states tie; code order breaks the tie deterministically.
    let tail: Vec<&str> = snap.teams_by_state[2..]
        .iter()
        .map(|s| s.state.as_str())
        .collect();
    assert_eq!(tail, ["BA", "MG", "PR"]);
}

#[test]
fn category_distribution_maps_labels_and_passes_unknown_codes_through() {
    let mut registry = TeamRegistry::new();
    registry.register_team(sample_team("A", "SP", Category::Adulto));
    registry.register_team(sample_team("B", "SP", Category::Adulto));
    registry.register_team(sample_team("C", "RJ", Category::Sub16));
    registry.register_team(sample_team("D", "MG", Category::from_code("juvenil")));

    let snap = snapshot(&registry);

    let codes: Vec<&str> = snap
        .teams_by_category
        .iter()
        .map(|c| c.code.as_str())
        .collect();
    assert_eq!(codes, ["adulto", "juvenil", "sub16"]);

    assert_eq!(snap.teams_by_category[0].label, "Adulto 18+");
    assert_eq!(snap.teams_by_category[0].teams, 2);
    assert_eq!(snap.teams_by_category[1].label, "juvenil");
    assert_eq!(snap.teams_by_category[2].label, "Sub-16");
}

#[test]
fn match_status_distribution_lists_only_occurring_statuses() {
    let mut registry = TeamRegistry::new();
    let a = registry.register_team(sample_team("A", "SP", Category::Adulto));
    let b = registry.register_team(sample_team("B", "RJ", Category::Adulto));
    registry
        .schedule_match(a.team_id, b.team_id, datetime!(2025-09-20 16:00 UTC), "Arena A")
        .unwrap();
    registry
        .schedule_match(b.team_id, a.team_id, datetime!(2025-09-27 16:00 UTC), "Arena B")
        .unwrap();

    let snap = snapshot(&registry);

    assert_eq!(snap.matches_by_status.len(), 1);
    assert_eq!(snap.matches_by_status[0].status, MatchStatus::Scheduled);
    assert_eq!(snap.matches_by_status[0].label, "Agendada");
    assert_eq!(snap.matches_by_status[0].matches, 2);
}

#[test]
fn removed_teams_leave_aggregates_but_their_matches_remain() {
    let mut registry = TeamRegistry::new();
    let a = registry.register_team(sample_team_with_roster(
        "Meninas da Vila",
        "SP",
        Category::Adulto,
        "Maria - 111\nAna - 222",
    ));
    let b = registry.register_team(sample_team("Guerreiras FC", "RJ", Category::Sub18));
    registry
        .schedule_match(a.team_id, b.team_id, datetime!(2025-09-20 16:00 UTC), "Arena A")
        .unwrap();

    registry.remove_team(a.team_id).unwrap();
    let snap = snapshot(&registry);

    // The team and its whole roster are gone from team aggregates.
    assert_eq!(snap.total_teams, 1);
    assert_eq!(snap.total_players, 0);
    assert_eq!(snap.states_represented, 1);
    assert_eq!(snap.teams_by_state[0].state, "RJ");
    // The dangling match still counts.
    assert_eq!(snap.total_matches, 1);
    assert_eq!(snap.matches_by_status[0].matches, 1);
}

#[test]
fn growth_series_separates_synthetic_baseline_from_live_point() {
    let mut registry = TeamRegistry::new();
    let a = registry.register_team(sample_team("A", "SP", Category::Adulto));
    let b = registry.register_team(sample_team("B", "RJ", Category::Adulto));
    registry
        .schedule_match(a.team_id, b.team_id, datetime!(2025-09-20 16:00 UTC), "Arena A")
        .unwrap();

    let snap = snapshot(&registry);

    assert_eq!(snap.growth.len(), 5);
    let months: Vec<&str> = snap.growth.iter().map(|p| p.month.as_str()).collect();
    assert_eq!(months, ["Jan", "Fev", "Mar", "Abr", "Mai"]);

    // Baseline points are constants and flagged as synthetic.
    assert!(snap.growth[..4].iter().all(|p| p.synthetic));
    assert_eq!(snap.growth[0].teams, 5);
    assert_eq!(snap.growth[0].matches, 2);

    // The final point is live and never synthetic.
    let live = &snap.growth[4];
    assert!(!live.synthetic);
    assert_eq!(live.teams, 2);
    assert_eq!(live.matches, 1);
}

#[test]
fn snapshot_serializes_for_the_presentation_layer() {
    let registry = TeamRegistry::new();
    let snap = snapshot(&registry);

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["total_teams"], 0);
    assert_eq!(json["growth"].as_array().unwrap().len(), 5);
    assert_eq!(json["growth"][0]["synthetic"], true);
}
