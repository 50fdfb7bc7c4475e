//! Roster members.

use serde::{Deserialize, Serialize};

use crate::domain::ids::{new_id, PlayerId};

/// Conventional position names offered by the registration form.
///
/// Positions are free text at the domain level; this list exists for
/// form layers that want to suggest the usual options.
pub const POSITIONS: [&str; 6] = [
    "Goleira", "Zagueira", "Lateral", "Volante", "Meia", "Atacante",
];

/// A roster member of exactly one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// National ID; treated as opaque text, no checksum validation.
    pub cpf: String,
    /// Free text; usually one of [`POSITIONS`] but not enforced.
    pub position: Option<String>,
}

impl Player {
    /// Create a player with a fresh id.
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        position: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            cpf: cpf.into(),
            position,
        }
    }
}
