//! Scheduled fixtures between registered teams.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::ids::{MatchId, TeamId};

/// Lifecycle status of a match. Every match is created `Scheduled`;
/// no operation in the current surface moves it onward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Ongoing,
    Completed,
}

impl MatchStatus {
    /// Fixed display label.
    pub fn label(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Agendada",
            MatchStatus::Ongoing => "Em Andamento",
            MatchStatus::Completed => "Finalizada",
        }
    }
}

/// A scheduled fixture.
///
/// Holds non-owning references to both teams plus their names as
/// snapshotted at scheduling time. Removing a team later leaves the
/// match in place with a dangling id; display code resolves the id via
/// the registry and falls back to the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub home_team: TeamId,
    pub home_team_name: String,
    pub away_team: TeamId,
    pub away_team_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub location: String,
    pub status: MatchStatus,
}
