//! `PackSmart` - Personalized packing lists and sample itineraries
//!
//! This library turns a destination, trip length, start date and a set of
//! planned activities into a day-by-day sample itinerary and a categorized
//! packing list. Both are derived from fixed rule tables, so the same trip
//! always yields the same plan.

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod plan;
pub mod planner;
pub mod telemetry;
pub mod view;
pub mod web;

// Re-export core types for public API
pub use config::PackSmartConfig;
pub use error::PackSmartError;
pub use form::{TripDetails, TripForm};
pub use models::{
    ActivityEntry, ActivityKind, ActivityTag, CategoryGroup, DayPlan, PackingCategory,
    PackingItem, TimeSlot, TripParameters,
};
pub use plan::TripPlan;
pub use planner::{ItineraryGenerator, PackingListGenerator};
pub use view::{ViewEvent, ViewState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PackSmartError>;
