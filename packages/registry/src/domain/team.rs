//! Registered teams and their registration input.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::category::Category;
use crate::domain::ids::TeamId;
use crate::domain::player::Player;

/// A registered club entity.
///
/// Required attributes are non-empty at creation by contract with the
/// registration form; the core stores what it is given. `registered_at`
/// is stamped once and never changes. Players keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub contact_person: String,
    /// National ID of the contact person.
    pub contact_cpf: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: String,
    /// Two-letter UF code (e.g. "SP", "RJ").
    pub state: String,
    pub category: Category,
    pub additional_info: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub registered_at: OffsetDateTime,
    pub players: Vec<Player>,
}

/// Registration form input for a new team.
///
/// `roster_text` is the optional multi-line player list; see
/// [`crate::domain::roster::parse_roster`] for the accepted format.
/// Required-field validation (non-empty name, contact, email, city,
/// state, category) is the form's responsibility, not the registry's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub contact_person: String,
    pub contact_cpf: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: String,
    pub state: String,
    pub category: Category,
    pub additional_info: Option<String>,
    pub roster_text: Option<String>,
}
