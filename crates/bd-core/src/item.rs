//! Items under burndown and their audit trails.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One field edit inside a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    /// The edited field name (e.g. `remaining_hours`).
    pub field: String,
    /// The value the field was set to.
    pub value: f64,
}

/// One audit event: a timestamped set of field edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the edits were recorded.
    pub timestamp: DateTime<Utc>,
    /// The fields changed by this entry.
    pub changes: Vec<FieldChange>,
}

/// An item's view for the burndown computation.
///
/// The computation only reads creation date, per-attribute initial values,
/// and the audit trail; this trait lets it run over sprint-file items, test
/// fixtures, or any other item representation.
pub trait AuditedItem {
    /// The calendar date the item was created on.
    fn created_on(&self) -> NaiveDate;

    /// The attribute's value closest to creation, if the item carries one.
    fn initial_value(&self, attribute: &str) -> Option<f64>;

    /// The item's audit trail. Entries on the same day may appear in any
    /// order; the computation sorts per day by timestamp.
    fn journal(&self) -> &[JournalEntry];
}

/// A concrete item as it appears in sprint data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, used only for diagnostics.
    pub id: String,
    /// Creation date.
    pub created_on: NaiveDate,
    /// Initial value per tracked attribute.
    #[serde(default)]
    pub values: BTreeMap<String, f64>,
    /// Audit trail of field edits.
    #[serde(default)]
    pub journal: Vec<JournalEntry>,
}

impl AuditedItem for Item {
    fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    fn initial_value(&self, attribute: &str) -> Option<f64> {
        self.values.get(attribute).copied()
    }

    fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }
}
