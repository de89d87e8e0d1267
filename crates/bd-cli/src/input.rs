//! Sprint data files.
//!
//! The computation treats the day range and item set as external
//! collaborators; here they come from a JSON file. Retrieval or parse
//! failures surface to the caller unchanged.

use std::path::Path;

use anyhow::{Context, Result};
use bd_core::Item;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sprint: its day range and the items burned down over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    /// Sprint name, used only for display.
    pub name: String,
    /// The calendar days the sprint covers, ascending.
    pub days: Vec<NaiveDate>,
    /// The items tracked over the sprint.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Sprint {
    /// Loads a sprint from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let sprint: Self = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        tracing::debug!(
            name = %sprint.name,
            days = sprint.days.len(),
            items = sprint.items.len(),
            "loaded sprint"
        );
        Ok(sprint)
    }

    /// Total journal entries across all items.
    pub fn journal_entries(&self) -> usize {
        self.items.iter().map(|item| item.journal.len()).sum()
    }
}
