//! Trip planning module
//!
//! Two independent generators driven by the same [`TripParameters`]:
//! - Itinerary: a sample day-by-day plan for the first week
//! - Packing: a categorized packing list
//!
//! [`TripParameters`]: crate::models::TripParameters

pub mod itinerary;
pub mod packing;

pub use itinerary::{ItineraryGenerator, MAX_PLANNED_DAYS};
pub use packing::PackingListGenerator;
