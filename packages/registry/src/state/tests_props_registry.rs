//! Property tests for registry mutation invariants.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::category::Category;
use crate::state::registry::TeamRegistry;
use crate::state::snapshot::snapshot;
use crate::state::test_helpers::sample_team;

proptest! {
    /// N registrations yield N distinct ids and a collection of size N.
    #[test]
    fn prop_registrations_are_identity_unique(n in 0usize..20) {
        let mut registry = TeamRegistry::new();

        let ids: HashSet<_> = (0..n)
            .map(|i| {
                registry
                    .register_team(sample_team(&format!("Time {i}"), "SP", Category::Adulto))
                    .team_id
            })
            .collect();

        prop_assert_eq!(ids.len(), n);
        prop_assert_eq!(registry.teams().len(), n);
    }

    /// Removing one team never reorders the survivors.
    #[test]
    fn prop_removal_preserves_survivor_order(
        (n, remove_at) in (1usize..10).prop_flat_map(|n| (Just(n), 0..n)),
    ) {
        let mut registry = TeamRegistry::new();
        let ids: Vec<_> = (0..n)
            .map(|i| {
                registry
                    .register_team(sample_team(&format!("Time {i}"), "RJ", Category::Sub18))
                    .team_id
            })
            .collect();

        registry.remove_team(ids[remove_at]).expect("team exists");

        let mut expected = ids.clone();
        expected.remove(remove_at);
        let actual: Vec<_> = registry.teams().iter().map(|t| t.id).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Team aggregates always agree with the live collections.
    #[test]
    fn prop_snapshot_totals_agree_with_collections(n in 0usize..12) {
        let mut registry = TeamRegistry::new();
        for i in 0..n {
            registry.register_team(sample_team(
                &format!("Time {i}"),
                if i % 2 == 0 { "SP" } else { "RJ" },
                Category::Adulto,
            ));
        }

        let snap = snapshot(&registry);

        prop_assert_eq!(snap.total_teams, registry.teams().len());
        let by_state_sum: usize = snap.teams_by_state.iter().map(|s| s.teams).sum();
        prop_assert_eq!(by_state_sum, n);
        let by_category_sum: usize = snap.teams_by_category.iter().map(|c| c.teams).sum();
        prop_assert_eq!(by_category_sum, n);
    }
}
