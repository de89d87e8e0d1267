//! Tracked-attribute configuration.
//!
//! Which numeric fields of an item are burned down, and the unit each one is
//! measured in. The set is fixed configuration passed into the computation,
//! never discovered from the data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::series::Unit;

/// Attribute name for remaining effort, measured in hours.
pub const REMAINING_HOURS: &str = "remaining_hours";

/// Attribute name for the size estimate, measured in points.
pub const STORY_POINTS: &str = "story_points";

/// Two attributes in the set share a name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("attribute '{name}' is tracked more than once")]
pub struct DuplicateAttributeError {
    /// The duplicated attribute name.
    pub name: String,
}

/// A single burned-down item field and its unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedAttribute {
    /// The item field name, as it appears in journal entries.
    pub name: String,
    /// The unit the field is measured in.
    pub unit: Unit,
}

impl TrackedAttribute {
    pub fn new(name: impl Into<String>, unit: Unit) -> Self {
        Self {
            name: name.into(),
            unit,
        }
    }
}

/// The ordered, duplicate-free set of attributes a report tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    attributes: Vec<TrackedAttribute>,
}

impl AttributeSet {
    /// Builds a set, rejecting duplicate attribute names.
    pub fn new(attributes: Vec<TrackedAttribute>) -> Result<Self, DuplicateAttributeError> {
        for (i, attribute) in attributes.iter().enumerate() {
            if attributes[..i].iter().any(|a| a.name == attribute.name) {
                return Err(DuplicateAttributeError {
                    name: attribute.name.clone(),
                });
            }
        }
        Ok(Self { attributes })
    }

    /// The unit for a tracked attribute, or `None` if the name is not tracked.
    pub fn unit_for(&self, name: &str) -> Option<Unit> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.unit)
    }

    /// Tracked attribute names, in configuration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedAttribute> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl Default for AttributeSet {
    /// The standard burndown pair: remaining hours and story points.
    fn default() -> Self {
        Self {
            attributes: vec![
                TrackedAttribute::new(REMAINING_HOURS, Unit::Hours),
                TrackedAttribute::new(STORY_POINTS, Unit::Points),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_tracks_hours_and_points() {
        let set = AttributeSet::default();
        assert_eq!(set.unit_for(REMAINING_HOURS), Some(Unit::Hours));
        assert_eq!(set.unit_for(STORY_POINTS), Some(Unit::Points));
        assert_eq!(set.unit_for("velocity"), None);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn names_preserve_configuration_order() {
        let set = AttributeSet::new(vec![
            TrackedAttribute::new("story_points", Unit::Points),
            TrackedAttribute::new("remaining_hours", Unit::Hours),
        ])
        .unwrap();
        let names: Vec<_> = set.names().collect();
        assert_eq!(names, vec!["story_points", "remaining_hours"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = AttributeSet::new(vec![
            TrackedAttribute::new("remaining_hours", Unit::Hours),
            TrackedAttribute::new("remaining_hours", Unit::Points),
        ])
        .unwrap_err();
        assert_eq!(err.name, "remaining_hours");
    }

    #[test]
    fn empty_set_is_allowed() {
        let set = AttributeSet::new(vec![]).unwrap();
        assert!(set.is_empty());
    }
}
