//! Team age/level categories.

use serde::{Deserialize, Serialize};

/// Category of a registered team.
///
/// The registration form offers the seven fixed codes; anything else that
/// reaches the core (imported data, older sessions) is carried verbatim
/// in `Other` so listings and aggregates can still display it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Adulto,
    Sub18,
    Sub16,
    Sub14,
    Sub12,
    Master,
    Veterano,
    Other(String),
}

impl Category {
    /// Parse a wire code. Unknown codes are preserved, never rejected.
    pub fn from_code(code: &str) -> Self {
        match code {
            "adulto" => Category::Adulto,
            "sub18" => Category::Sub18,
            "sub16" => Category::Sub16,
            "sub14" => Category::Sub14,
            "sub12" => Category::Sub12,
            "master" => Category::Master,
            "veterano" => Category::Veterano,
            other => Category::Other(other.to_string()),
        }
    }

    /// The wire code used by forms and serialized state.
    pub fn code(&self) -> &str {
        match self {
            Category::Adulto => "adulto",
            Category::Sub18 => "sub18",
            Category::Sub16 => "sub16",
            Category::Sub14 => "sub14",
            Category::Sub12 => "sub12",
            Category::Master => "master",
            Category::Veterano => "veterano",
            Category::Other(code) => code,
        }
    }

    /// Fixed display label; unknown codes pass through verbatim.
    pub fn label(&self) -> &str {
        match self {
            Category::Adulto => "Adulto 18+",
            Category::Sub18 => "Sub-18",
            Category::Sub16 => "Sub-16",
            Category::Sub14 => "Sub-14",
            Category::Sub12 => "Sub-12",
            Category::Master => "Master 35+",
            Category::Veterano => "Veterano 45+",
            Category::Other(code) => code,
        }
    }
}

impl From<String> for Category {
    fn from(code: String) -> Self {
        Category::from_code(&code)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.code().to_string()
    }
}
