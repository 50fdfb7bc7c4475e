#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! In-memory domain core for the Passa a Bola community platform.
//!
//! Owns the authoritative collections of registered teams (with nested
//! player rosters) and scheduled matches, the mutation rules over them,
//! and the derived dashboard aggregates. Everything is client-local and
//! session-scoped; there is no persistence and exactly one logical
//! writer at a time.

pub mod catalog;
pub mod domain;
pub mod errors;
pub mod state;

// Re-exports for public API
pub use catalog::{CatalogError, Tournament, TournamentCatalog, TournamentKind};
pub use domain::category::Category;
pub use domain::ids::{MatchId, PlayerId, TeamId};
pub use domain::matches::{Match, MatchStatus};
pub use domain::player::{Player, POSITIONS};
pub use domain::roster::{parse_roster, RosterParse, SkipReason, SkippedLine};
pub use domain::team::{NewTeam, Team};
pub use errors::{DomainError, NotFoundKind};
pub use state::registry::{Registration, TeamRegistry};
pub use state::snapshot::{
    snapshot, CategoryCount, DashboardSnapshot, GrowthPoint, StateCount, StatusCount,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
