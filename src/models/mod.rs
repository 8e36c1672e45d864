//! Data models for the PackSmart application
//!
//! This module contains the domain models organized by concern:
//! - Trip: Trip parameters and the activity vocabulary
//! - Itinerary: Day plans and their entries
//! - Packing: Packing items and category grouping

pub mod itinerary;
pub mod packing;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::{ActivityEntry, ActivityKind, DayPlan, PLACEHOLDER_DATE, TimeSlot};
pub use packing::{CategoryGroup, PackingCategory, PackingItem, group_by_category};
pub use trip::{ActivityTag, TripParameters, parse_activity_labels};
