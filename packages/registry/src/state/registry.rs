//! The team registry: owned collections plus their mutation rules.

use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::ids::{new_id, MatchId, PlayerId, TeamId};
use crate::domain::matches::{Match, MatchStatus};
use crate::domain::player::Player;
use crate::domain::roster::{parse_roster, SkippedLine};
use crate::domain::team::{NewTeam, Team};
use crate::errors::domain::{DomainError, NotFoundKind};

/// Outcome of a team registration.
///
/// Registration itself never fails; `skipped_lines` is the manifest of
/// roster lines that did not parse, so the form can warn the user
/// without blocking the registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub team_id: TeamId,
    pub players_added: usize,
    pub skipped_lines: Vec<SkippedLine>,
}

/// In-memory store of teams and matches.
///
/// One instance is owned by the hosting application and passed by
/// reference to whichever layer needs it. Collections are private;
/// all mutation goes through the operations below, which preserves the
/// generated-id and append-only-order guarantees. Single logical writer,
/// no interior locking.
#[derive(Debug, Clone, Default)]
pub struct TeamRegistry {
    teams: Vec<Team>,
    matches: Vec<Match>,
}

impl TeamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team, parsing the optional bulk roster text.
    ///
    /// The team is appended in insertion order with a fresh id and a
    /// registration timestamp stamped now. Duplicate names are allowed;
    /// required-field validation is the form's job.
    pub fn register_team(&mut self, input: NewTeam) -> Registration {
        let parse = input
            .roster_text
            .as_deref()
            .map(parse_roster)
            .unwrap_or_default();

        let team_id = new_id();
        let team = Team {
            id: team_id,
            name: input.name,
            contact_person: input.contact_person,
            contact_cpf: input.contact_cpf,
            email: input.email,
            phone: input.phone,
            city: input.city,
            state: input.state,
            category: input.category,
            additional_info: input.additional_info,
            registered_at: OffsetDateTime::now_utc(),
            players: parse.players,
        };

        info!(
            team_id = %team_id,
            team = %team.name,
            players = team.players.len(),
            "team registered"
        );
        if !parse.skipped.is_empty() {
            warn!(
                team_id = %team_id,
                skipped = parse.skipped.len(),
                "roster lines dropped during registration"
            );
        }

        let players_added = team.players.len();
        self.teams.push(team);

        Registration {
            team_id,
            players_added,
            skipped_lines: parse.skipped,
        }
    }

    /// Remove a team and, with it, its whole roster.
    ///
    /// Returns the removed team. Matches referencing it are left in
    /// place; their team reference dangles and display code resolves it
    /// against the name snapshot.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<Team, DomainError> {
        let Some(idx) = self.teams.iter().position(|t| t.id == team_id) else {
            debug!(team_id = %team_id, "remove_team: unknown team");
            return Err(DomainError::not_found(
                NotFoundKind::Team,
                format!("team {team_id} is not registered"),
            ));
        };

        let team = self.teams.remove(idx);
        info!(team_id = %team_id, team = %team.name, "team removed");
        Ok(team)
    }

    /// Append a player to an existing team's roster.
    pub fn add_player(
        &mut self,
        team_id: TeamId,
        name: impl Into<String>,
        cpf: impl Into<String>,
        position: Option<String>,
    ) -> Result<PlayerId, DomainError> {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            debug!(team_id = %team_id, "add_player: unknown team");
            return Err(DomainError::not_found(
                NotFoundKind::Team,
                format!("team {team_id} is not registered"),
            ));
        };

        let player = Player::new(name, cpf, position);
        let player_id = player.id;
        info!(team_id = %team_id, player_id = %player_id, "player added");
        team.players.push(player);
        Ok(player_id)
    }

    /// Remove exactly the matching player from exactly the matching team.
    pub fn remove_player(
        &mut self,
        team_id: TeamId,
        player_id: PlayerId,
    ) -> Result<Player, DomainError> {
        let Some(team) = self.teams.iter_mut().find(|t| t.id == team_id) else {
            debug!(team_id = %team_id, "remove_player: unknown team");
            return Err(DomainError::not_found(
                NotFoundKind::Team,
                format!("team {team_id} is not registered"),
            ));
        };

        let Some(idx) = team.players.iter().position(|p| p.id == player_id) else {
            debug!(team_id = %team_id, player_id = %player_id, "remove_player: unknown player");
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                format!("player {player_id} is not on team {team_id}"),
            ));
        };

        let player = team.players.remove(idx);
        info!(team_id = %team_id, player_id = %player_id, "player removed");
        Ok(player)
    }

    /// Schedule a match between two registered teams.
    ///
    /// Both teams must exist now; their names are snapshotted and do not
    /// track later changes. The core does not reject `home == away`;
    /// pairing rules belong to the caller layer. Initial status is
    /// always [`MatchStatus::Scheduled`].
    pub fn schedule_match(
        &mut self,
        home: TeamId,
        away: TeamId,
        date: OffsetDateTime,
        location: impl Into<String>,
    ) -> Result<MatchId, DomainError> {
        let home_team_name = self.team_name(home)?;
        let away_team_name = self.team_name(away)?;

        let match_id = new_id();
        self.matches.push(Match {
            id: match_id,
            home_team: home,
            home_team_name,
            away_team: away,
            away_team_name,
            date,
            location: location.into(),
            status: MatchStatus::Scheduled,
        });

        info!(match_id = %match_id, home = %home, away = %away, "match scheduled");
        Ok(match_id)
    }

    /// All registered teams in insertion order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// All scheduled matches in insertion order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Look up a team by id. `None` for dangling match references.
    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// Look up a match by id.
    pub fn find_match(&self, match_id: MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == match_id)
    }

    fn team_name(&self, team_id: TeamId) -> Result<String, DomainError> {
        self.team(team_id).map(|t| t.name.clone()).ok_or_else(|| {
            debug!(team_id = %team_id, "schedule_match: unknown team");
            DomainError::not_found(
                NotFoundKind::Team,
                format!("team {team_id} is not registered"),
            )
        })
    }
}
