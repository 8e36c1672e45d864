//! Results view: both generator outputs for one trip, plus their text rendering

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::form::TripDetails;
use crate::models::{CategoryGroup, DayPlan, group_by_category};
use crate::planner::{ItineraryGenerator, MAX_PLANNED_DAYS, PackingListGenerator};

pub const CLOSING_LINE: &str =
    "Happy travels! Remember to check visa requirements and travel restrictions for your destination.";

/// Everything shown on the results screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPlan {
    pub destination: String,
    pub itinerary_title: String,
    pub itinerary: Vec<DayPlan>,
    /// Present when the itinerary only covers the first week
    pub footnote: Option<String>,
    pub packing_title: String,
    pub packing_list: Vec<CategoryGroup>,
    pub notes: String,
}

impl TripPlan {
    #[must_use]
    pub fn build(details: &TripDetails) -> Self {
        let trip = &details.trip;
        let itinerary = ItineraryGenerator::generate(trip);
        let packing_items = PackingListGenerator::generate(trip);

        info!(
            "Planned {} itinerary days and {} packing items for {}",
            itinerary.len(),
            packing_items.len(),
            trip.destination
        );

        let footnote = (trip.duration_days > MAX_PLANNED_DAYS).then(|| {
            format!(
                "This is a sample itinerary for the first week. Your {}-day trip will have many more adventures!",
                trip.duration_days
            )
        });

        Self {
            destination: trip.destination.clone(),
            itinerary_title: format!(
                "{}-Day Itinerary for {}",
                trip.duration_days, trip.destination
            ),
            itinerary,
            footnote,
            packing_title: format!("Packing List for {}", trip.destination),
            packing_list: group_by_category(&packing_items),
            notes: details.notes.clone(),
        }
    }
}

impl Display for TripPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📦 {}", self.packing_title)?;
        for group in &self.packing_list {
            writeln!(f)?;
            writeln!(f, "{} {}", group.category.icon(), group.category)?;
            for item in &group.items {
                writeln!(f, "   {item}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "🕒 {}", self.itinerary_title)?;
        for day in &self.itinerary {
            writeln!(f)?;
            writeln!(f, "Day {}  ({})", day.day, day.date)?;
            for entry in &day.activities {
                writeln!(f, "{entry}")?;
            }
        }

        if let Some(footnote) = &self.footnote {
            writeln!(f)?;
            writeln!(f, "{footnote}")?;
        }

        if !self.notes.trim().is_empty() {
            writeln!(f)?;
            writeln!(f, "📝 Notes: {}", self.notes.trim())?;
        }

        writeln!(f)?;
        write!(f, "{CLOSING_LINE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::TripForm;
    use crate::models::PackingCategory;

    fn details(days: &str, activities: &[&str]) -> TripDetails {
        TripForm {
            destination: "Tokyo".to_string(),
            duration: days.to_string(),
            start_date: "2024-06-01".to_string(),
            activities: activities.iter().map(|a| a.to_string()).collect(),
            notes: String::new(),
        }
        .submit()
        .unwrap()
    }

    #[test]
    fn test_titles() {
        let plan = TripPlan::build(&details("3", &[]));
        assert_eq!(plan.itinerary_title, "3-Day Itinerary for Tokyo");
        assert_eq!(plan.packing_title, "Packing List for Tokyo");
        assert!(plan.footnote.is_none());
    }

    #[test]
    fn test_footnote_for_long_trips() {
        let plan = TripPlan::build(&details("12", &[]));
        assert_eq!(plan.itinerary.len(), 8);
        assert!(plan.footnote.unwrap().contains("Your 12-day trip"));
    }

    #[test]
    fn test_packing_groups_in_first_seen_order() {
        let plan = TripPlan::build(&details("3", &["Hiking/Outdoor"]));
        let categories: Vec<_> = plan.packing_list.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![
                PackingCategory::Documents,
                PackingCategory::Electronics,
                PackingCategory::Clothing,
                PackingCategory::PersonalCare,
                PackingCategory::Health,
                PackingCategory::Footwear,
                PackingCategory::Accessories,
            ]
        );
        let health = &plan.packing_list[4];
        assert_eq!(health.items.len(), 2);
        assert_eq!(health.items[1].label, "First Aid Kit");
    }

    #[test]
    fn test_text_rendering() {
        let mut trip = details("10", &["Beach/Swimming"]);
        trip.notes = "Window seat".to_string();
        let text = TripPlan::build(&trip).to_string();

        assert!(text.starts_with("📦 Packing List for Tokyo"));
        assert!(text.contains("👕 Clothing"));
        assert!(text.contains("☐ Swimwear (Essential)"));
        assert!(text.contains("☐ Beach Towel\n"));
        assert!(text.contains("🕒 10-Day Itinerary for Tokyo"));
        assert!(text.contains("Day 1  (Saturday, Jun 1)"));
        assert!(text.contains("Day 8  (...)"));
        assert!(text.contains("📍 Beach Time [Afternoon]"));
        assert!(text.contains("many more adventures"));
        assert!(text.contains("📝 Notes: Window seat"));
        assert!(text.ends_with(CLOSING_LINE));
    }
}
