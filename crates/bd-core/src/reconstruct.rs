//! Audit-trail replay.
//!
//! Recovers, per item and tracked attribute, what the attribute's value was
//! on each date a change is known for. Multiple edits on one calendar day
//! collapse to the chronologically last one: the series records the closing
//! value of each day, not the intraday history.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::attribute::AttributeSet;
use crate::item::AuditedItem;

/// Value of one (item, attribute) pair as of each date with a known change.
///
/// Always holds at least the creation-date entry, even for items with an
/// empty audit trail.
pub type DateValueMap = BTreeMap<NaiveDate, f64>;

/// Replays an item's audit trail into one [`DateValueMap`] per tracked
/// attribute.
///
/// Each attribute is seeded with the item's initial value on its creation
/// date (0.0 when the item carries no value for it). Journal entries are then
/// grouped by calendar date and applied in ascending timestamp order, so the
/// last edit of a day wins.
pub fn daily_closing_values<I: AuditedItem + ?Sized>(
    item: &I,
    attributes: &AttributeSet,
) -> BTreeMap<String, DateValueMap> {
    let created = item.created_on();
    let mut changes: BTreeMap<String, DateValueMap> = attributes
        .names()
        .map(|name| {
            let initial = item.initial_value(name).unwrap_or(0.0);
            (name.to_string(), DateValueMap::from([(created, initial)]))
        })
        .collect();

    let mut by_day: BTreeMap<NaiveDate, Vec<&crate::item::JournalEntry>> = BTreeMap::new();
    for entry in item.journal() {
        by_day.entry(entry.timestamp.date_naive()).or_default().push(entry);
    }

    for (date, mut entries) in by_day {
        entries.sort_by_key(|entry| entry.timestamp);
        for entry in entries {
            for change in &entry.changes {
                if let Some(map) = changes.get_mut(&change.field) {
                    map.insert(date, change.value);
                }
            }
        }
    }

    changes
}
