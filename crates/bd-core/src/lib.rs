//! Core burndown computation.
//!
//! Replays each item's audit trail into per-day attribute values, sums them
//! across items over a sprint's day range, and derives an ideal depletion
//! line per tracked attribute. Pure and synchronous: retrieval of day ranges
//! and items, persistence, and rendering all live with the caller.

pub mod aggregate;
pub mod attribute;
pub mod ideal;
pub mod item;
pub mod reconstruct;
pub mod report;
pub mod series;

pub use aggregate::aggregate_daily;
pub use attribute::{
    AttributeSet, DuplicateAttributeError, REMAINING_HOURS, STORY_POINTS, TrackedAttribute,
};
pub use ideal::ideal_line;
pub use item::{AuditedItem, FieldChange, Item, JournalEntry};
pub use reconstruct::{DateValueMap, daily_closing_values};
pub use report::{BurnDirection, BurndownReport, InvalidBurnDirectionError, Selection};
pub use series::{Series, Unit, UnsupportedUnitError};
