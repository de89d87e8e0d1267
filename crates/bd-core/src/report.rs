//! Report orchestration.
//!
//! Builds every series eagerly from the day range and item set, derives the
//! ideal lines, and records the per-unit maxima used for axis scaling. A
//! report is immutable once built.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

use crate::aggregate::aggregate_daily;
use crate::attribute::{AttributeSet, REMAINING_HOURS, STORY_POINTS};
use crate::ideal::ideal_line;
use crate::item::AuditedItem;
use crate::series::{Series, Unit};

/// Attributes that get an ideal line, when tracked.
const IDEAL_ATTRIBUTES: [&str; 2] = [REMAINING_HOURS, STORY_POINTS];

/// A burn-direction string other than `down` or `up`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid burn direction: {value}")]
pub struct InvalidBurnDirectionError {
    /// The rejected direction string.
    pub value: String,
}

/// Which way the chart burns.
///
/// Read from configuration and carried on the report for the presentation
/// layer; it does not change any computed series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurnDirection {
    /// Burn down towards zero.
    #[default]
    Down,
    /// Burn up towards the committed total.
    Up,
}

impl BurnDirection {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl fmt::Display for BurnDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BurnDirection {
    type Err = InvalidBurnDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "down" => Ok(Self::Down),
            "up" => Ok(Self::Up),
            _ => Err(InvalidBurnDirectionError {
                value: s.to_string(),
            }),
        }
    }
}

/// Which series [`BurndownReport::series`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Only series with `display == true`.
    Active,
    /// Every stored series.
    All,
}

/// A fully computed burndown over one day range and item set.
#[derive(Debug, Clone)]
pub struct BurndownReport {
    days: Vec<NaiveDate>,
    collected: usize,
    series: BTreeMap<String, Series>,
    max: BTreeMap<Unit, f64>,
    burn_direction: BurnDirection,
}

impl BurndownReport {
    /// Computes the whole report.
    ///
    /// `days` is sorted and deduplicated; raw series are computed over the
    /// prefix of days at or before `today` (future days hold no real data),
    /// while ideal lines span the full range. `today` is explicit so the
    /// computation stays pure.
    pub fn build<I: AuditedItem>(
        days: &[NaiveDate],
        items: &[I],
        attributes: &AttributeSet,
        burn_direction: BurnDirection,
        today: NaiveDate,
    ) -> Self {
        let mut days = days.to_vec();
        days.sort_unstable();
        days.dedup();
        let collected = days.partition_point(|day| *day <= today);

        tracing::debug!(
            days = days.len(),
            collected,
            items = items.len(),
            "building burndown report"
        );

        let mut raw = aggregate_daily(&days[..collected], items, attributes);

        let mut series = BTreeMap::new();
        for attribute in attributes.iter() {
            let values = raw.remove(&attribute.name).unwrap_or_default();
            series.insert(
                attribute.name.clone(),
                Series::new(&attribute.name, attribute.unit, values),
            );
        }

        for attribute in attributes.iter() {
            if !IDEAL_ATTRIBUTES.contains(&attribute.name.as_str()) {
                continue;
            }
            let start = series
                .get(&attribute.name)
                .and_then(|s| s.values().first().copied())
                .unwrap_or(0.0);
            series.insert(
                format!("{}_ideal", attribute.name),
                Series::new(
                    format!("{}_ideal", attribute.name),
                    attribute.unit,
                    ideal_line(start, days.len()),
                ),
            );
        }

        let max = Unit::ALL
            .iter()
            .map(|&unit| {
                let unit_max = series
                    .values()
                    .filter(|s| s.unit() == unit)
                    .filter_map(Series::max)
                    .reduce(f64::max)
                    .unwrap_or(0.0);
                (unit, unit_max)
            })
            .collect();

        Self {
            days,
            collected,
            series,
            max,
            burn_direction,
        }
    }

    /// The full day range, sorted ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    /// The prefix of the day range with real data (days at or before the
    /// report's `today`). Raw series have exactly this many values.
    pub fn collected_days(&self) -> &[NaiveDate] {
        &self.days[..self.collected]
    }

    /// Looks up one series by name.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    /// Stored series, sorted by name; `Selection::Active` drops hidden ones.
    pub fn series(&self, selection: Selection) -> Vec<&Series> {
        self.series
            .values()
            .filter(|s| selection == Selection::All || s.display())
            .collect()
    }

    /// Largest value across all stored series of `unit`, or 0.0 when none
    /// exist. Hidden series count too.
    pub fn max(&self, unit: Unit) -> f64 {
        self.max.get(&unit).copied().unwrap_or(0.0)
    }

    pub const fn burn_direction(&self) -> BurnDirection {
        self.burn_direction
    }

    /// Hides or shows one series for rendering. Returns false if the name is
    /// unknown.
    pub fn set_display(&mut self, name: &str, display: bool) -> bool {
        match self.series.get_mut(name) {
            Some(series) => {
                series.set_display(display);
                true
            }
            None => false,
        }
    }
}
