//! Daily aggregation across items.
//!
//! Turns per-item date→value maps into one summed sequence per tracked
//! attribute over the report's day range, forward-filling each item's last
//! known value between recorded changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::attribute::AttributeSet;
use crate::item::AuditedItem;
use crate::reconstruct::daily_closing_values;

/// Sums each tracked attribute across all items for every day in `days`.
///
/// `days` must be sorted ascending and already filtered to the dates the
/// report covers. For a given item and day, the contribution is the item's
/// value at the latest recorded date on or before that day, or 0.0 when the
/// item has no entry that early (e.g. it was created later).
///
/// Each item's change dates are walked once per attribute, so the whole pass
/// is linear in days plus audit entries rather than quadratic in days.
pub fn aggregate_daily<I: AuditedItem>(
    days: &[NaiveDate],
    items: &[I],
    attributes: &AttributeSet,
) -> BTreeMap<String, Vec<f64>> {
    let mut totals: BTreeMap<String, Vec<f64>> = attributes
        .names()
        .map(|name| (name.to_string(), vec![0.0; days.len()]))
        .collect();

    for item in items {
        let changes = daily_closing_values(item, attributes);
        for (attribute, values_by_day) in &changes {
            let Some(attribute_totals) = totals.get_mut(attribute) else {
                continue;
            };

            let mut pending = values_by_day.iter().peekable();
            let mut current: Option<f64> = None;
            for (day, total) in days.iter().zip(attribute_totals.iter_mut()) {
                while let Some((date, value)) = pending.peek() {
                    if **date > *day {
                        break;
                    }
                    current = Some(**value);
                    pending.next();
                }
                *total += current.unwrap_or(0.0);
            }
        }
    }

    tracing::debug!(
        items = items.len(),
        days = days.len(),
        attributes = attributes.len(),
        "aggregated daily series"
    );

    totals
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::item::{FieldChange, Item, JournalEntry};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    fn entry(d: u32, field: &str, value: f64) -> JournalEntry {
        JournalEntry {
            timestamp: Utc.with_ymd_and_hms(2026, 8, d, 12, 0, 0).unwrap(),
            changes: vec![FieldChange {
                field: field.to_string(),
                value,
            }],
        }
    }

    #[test]
    fn forward_fills_between_changes() {
        let item = Item {
            id: "S-1".to_string(),
            created_on: day(1),
            values: BTreeMap::from([("remaining_hours".to_string(), 10.0)]),
            journal: vec![entry(2, "remaining_hours", 6.0)],
        };
        let days = [day(1), day(2), day(3)];

        let series = aggregate_daily(&days, &[item], &AttributeSet::default());
        assert_eq!(series["remaining_hours"], vec![10.0, 6.0, 6.0]);
    }

    #[test]
    fn item_created_mid_range_contributes_zero_before_creation() {
        let early = Item {
            id: "S-1".to_string(),
            created_on: day(1),
            values: BTreeMap::from([("story_points".to_string(), 5.0)]),
            journal: vec![],
        };
        let late = Item {
            id: "S-2".to_string(),
            created_on: day(2),
            values: BTreeMap::from([("story_points".to_string(), 3.0)]),
            journal: vec![],
        };
        let days = [day(1), day(2), day(3)];

        let series = aggregate_daily(&days, &[early, late], &AttributeSet::default());
        assert_eq!(series["story_points"], vec![5.0, 8.0, 8.0]);
    }

    #[test]
    fn single_late_item_yields_leading_zeros() {
        let item = Item {
            id: "S-1".to_string(),
            created_on: day(2),
            values: BTreeMap::from([("story_points".to_string(), 3.0)]),
            journal: vec![],
        };
        let days = [day(1), day(2), day(3)];

        let series = aggregate_daily(&days, &[item], &AttributeSet::default());
        assert_eq!(series["story_points"], vec![0.0, 3.0, 3.0]);
    }

    #[test]
    fn sums_across_items_per_day() {
        let a = Item {
            id: "S-1".to_string(),
            created_on: day(1),
            values: BTreeMap::from([("remaining_hours".to_string(), 8.0)]),
            journal: vec![entry(3, "remaining_hours", 2.0)],
        };
        let b = Item {
            id: "S-2".to_string(),
            created_on: day(1),
            values: BTreeMap::from([("remaining_hours".to_string(), 4.0)]),
            journal: vec![entry(2, "remaining_hours", 1.0)],
        };
        let days = [day(1), day(2), day(3)];

        let series = aggregate_daily(&days, &[a, b], &AttributeSet::default());
        assert_eq!(series["remaining_hours"], vec![12.0, 9.0, 3.0]);
    }

    #[test]
    fn no_items_yields_all_zero_series() {
        let days = [day(1), day(2)];
        let series = aggregate_daily::<Item>(&days, &[], &AttributeSet::default());
        assert_eq!(series["remaining_hours"], vec![0.0, 0.0]);
        assert_eq!(series["story_points"], vec![0.0, 0.0]);
    }

    #[test]
    fn empty_day_range_yields_empty_series() {
        let item = Item {
            id: "S-1".to_string(),
            created_on: day(1),
            values: BTreeMap::new(),
            journal: vec![],
        };
        let series = aggregate_daily(&[], &[item], &AttributeSet::default());
        assert!(series["remaining_hours"].is_empty());
    }
}
