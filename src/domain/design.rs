//! Design records served by the catalog

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How demanding a design is to colour in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Easy,
    Medium,
    Hard,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [Complexity::Easy, Complexity::Medium, Complexity::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        }
    }

    /// Badge label shown next to the design name
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Easy => "Fácil",
            Complexity::Medium => "Médio",
            Complexity::Hard => "Difícil",
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Complexity {
    type Err = super::OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| super::OptionError::unknown("complexity", s))
    }
}

/// A printable line-art design
///
/// Records are created by the catalog and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Design {
    /// Unique, case-sensitive identifier
    pub id: String,
    pub name: String,
    /// Reference to the printable artwork
    pub image_url: String,
    pub description: String,
    pub category: String,
    /// Display order matters; duplicates are allowed
    #[serde(default)]
    pub tags: Vec<String>,
    pub complexity: Complexity,
}

impl Design {
    /// Case-insensitive match against name and tags
    pub fn matches_text(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    }
}
