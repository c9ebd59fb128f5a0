use serde::{Deserialize, Serialize};

/// Difficulty label as published. Anything unrecognized is `Unknown`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    Unknown,
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Easy" => Difficulty::Easy,
            "Medium" => Difficulty::Medium,
            "Hard" => Difficulty::Hard,
            _ => Difficulty::Unknown,
        }
    }
}

impl Difficulty {
    /// Lower-case CSS modifier; `unknown` is the neutral styling.
    pub const fn css_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    pub name: String,
    pub schema: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub label: String,
    pub sql: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Stable page anchor.
    pub section_id: String,
    /// Problem number.
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub leetcode_url: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub table_schemas: Vec<TableSchema>,
    #[serde(default)]
    pub solutions: Vec<Solution>,
}

impl Problem {
    pub fn anchor(&self) -> String {
        format!("#{}", self.section_id)
    }

    /// Description, or `None` when blank.
    pub fn description(&self) -> Option<&str> {
        let text = self.description.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Link to the problem page, or `None` when missing or blank.
    pub fn leetcode_url(&self) -> Option<&str> {
        self.leetcode_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}
