//! Read-only tournament catalogue.
//!
//! The platform ships a static JSON document describing upcoming
//! tournaments; the core deserializes it once into a typed, checked
//! shape and never mutates it. Anything beyond kind filtering (display
//! order, selection, signup) is the presentation layer's concern.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::Date;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed tournament catalogue: {0}")]
    Json(#[from] serde_json::Error),
}

/// Scope tag of a tournament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    Regional,
    National,
}

impl TournamentKind {
    pub fn label(&self) -> &'static str {
        match self {
            TournamentKind::Regional => "Regional",
            TournamentKind::National => "Nacional",
        }
    }
}

/// One tournament record as shipped in the catalogue document.
///
/// Field names follow the document's camelCase keys; `teams` is the
/// capacity, `registered_teams` the current signup count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TournamentKind,
    #[serde(with = "catalog_date")]
    pub date: Date,
    #[serde(rename = "endDate", with = "catalog_date")]
    pub end_date: Date,
    pub location: String,
    pub teams: u32,
    pub status: String,
    pub prize: String,
    pub description: String,
    pub categories: Vec<String>,
    #[serde(rename = "registeredTeams")]
    pub registered_teams: u32,
}

/// Aggregate block precomputed in the catalogue document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStatistics {
    pub total_tournaments: u32,
    pub total_teams: u32,
    pub total_registered_teams: u32,
    pub total_prize_money: u64,
    pub categories: BTreeMap<String, u32>,
}

/// The whole catalogue document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentCatalog {
    pub tournaments: Vec<Tournament>,
    pub statistics: CatalogStatistics,
}

impl TournamentCatalog {
    /// Parse the catalogue from its JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tournaments of one kind, in document order.
    pub fn filter_by_kind(&self, kind: TournamentKind) -> Vec<&Tournament> {
        self.tournaments.iter().filter(|t| t.kind == kind).collect()
    }
}

/// Catalogue dates are plain `YYYY-MM-DD` strings.
mod catalog_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::format_description::FormatItem;
    use time::macros::format_description;
    use time::Date;

    const FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted = date.format(FORMAT).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Date::parse(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
