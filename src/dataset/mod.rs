//! Typed view of the frozen problem catalogue.
//!
//! The JSON is produced once by an external scraper. Optional or damaged
//! fields are tolerated: missing lists become empty, a null link or blank
//! description reads as absent, and an unknown difficulty falls back to a
//! neutral class. Only malformed JSON or wrong scalar types are errors.

crate::reexport!(problem);

use crate::*;
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// URL the catalogue was scraped from.
    pub source: String,
    pub title: String,
    /// ISO-8601, or empty when the article carries no date.
    #[serde(default)]
    pub published: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub total_problems: usize,
    pub scraped_at: String,
    pub problems: Vec<Problem>,
}

impl Dataset {
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        if dataset.total_problems != dataset.problems.len() {
            warn!(
                "Dataset declares {} problems but contains {}",
                dataset.total_problems,
                dataset.problems.len()
            );
        }
        Ok(dataset)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&json)?;
        info!(
            "Loaded {} problems from {}",
            dataset.problems.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Tags with duplicates removed, first occurrence wins.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str).unique()
    }

    pub fn problem(&self, section_id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.section_id == section_id)
    }
}
