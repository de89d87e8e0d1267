//! Series output type and its measurement unit.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A unit string that is neither `hours` nor `points`.
///
/// Units come in as strings from configuration and sprint data files; this is
/// the boundary where an unknown unit is rejected, before any series carrying
/// it can exist.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported unit '{value}'")]
pub struct UnsupportedUnitError {
    /// The rejected unit string.
    pub value: String,
}

/// The measurement domain a tracked attribute and its series belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Hours of remaining effort.
    Hours,
    /// Abstract story points.
    Points,
}

impl Unit {
    /// String representation for display and serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hours => "hours",
            Self::Points => "points",
        }
    }

    /// All supported units, in a fixed order.
    pub const ALL: [Self; 2] = [Self::Hours, Self::Points];
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnsupportedUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hours" => Ok(Self::Hours),
            "points" => Ok(Self::Points),
            _ => Err(UnsupportedUnitError {
                value: s.to_string(),
            }),
        }
    }
}

/// A named, unit-tagged ordered sequence of daily values.
///
/// One value per day of the range it was computed over, in chronological
/// order. `display` controls whether the series is rendered, never whether
/// it is computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    unit: Unit,
    display: bool,
    values: Vec<f64>,
}

impl Series {
    /// Creates a series. Displayed by default.
    pub fn new(name: impl Into<String>, unit: Unit, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            unit,
            display: true,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    pub const fn display(&self) -> bool {
        self.display
    }

    /// Marks the series as rendered or hidden.
    pub const fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value in the series, if any.
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_from_str_accepts_supported_units() {
        assert_eq!("hours".parse::<Unit>().unwrap(), Unit::Hours);
        assert_eq!("points".parse::<Unit>().unwrap(), Unit::Points);
    }

    #[test]
    fn unit_from_str_rejects_anything_else() {
        let err = "parsecs".parse::<Unit>().unwrap_err();
        assert_eq!(err.value, "parsecs");
        assert!("Hours".parse::<Unit>().is_err());
        assert!("".parse::<Unit>().is_err());
    }

    #[test]
    fn unit_serde_roundtrip() {
        let json = serde_json::to_string(&Unit::Points).unwrap();
        assert_eq!(json, "\"points\"");
        let parsed: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Unit::Points);
    }

    #[test]
    fn series_is_displayed_by_default() {
        let series = Series::new("remaining_hours", Unit::Hours, vec![10.0, 6.0]);
        assert!(series.display());
        assert_eq!(series.name(), "remaining_hours");
        assert_eq!(series.unit(), Unit::Hours);
        assert_eq!(series.values(), &[10.0, 6.0]);
    }

    #[test]
    fn series_display_is_togglable() {
        let mut series = Series::new("story_points", Unit::Points, vec![3.0]);
        series.set_display(false);
        assert!(!series.display());
    }

    #[test]
    fn series_max_over_values() {
        let series = Series::new("remaining_hours", Unit::Hours, vec![4.0, 12.0, 6.0]);
        assert_eq!(series.max(), Some(12.0));

        let empty = Series::new("remaining_hours", Unit::Hours, vec![]);
        assert_eq!(empty.max(), None);
    }
}
