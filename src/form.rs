//! Trip form input and validation
//!
//! Holds raw user text the way the form collects it and turns it into a
//! validated [`TripDetails`] on submit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::TripParameters;
use crate::{PackSmartError, Result};

/// Validated submission: generator input plus free-text notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
    pub trip: TripParameters,
    #[serde(default)]
    pub notes: String,
}

/// Raw, unvalidated form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub destination: String,
    pub duration: String,
    pub start_date: String,
    pub activities: Vec<String>,
    pub notes: String,
}

impl TripForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the activity if it is not selected yet, otherwise deselect it
    pub fn toggle_activity(&mut self, activity: &str) {
        if let Some(index) = self.activities.iter().position(|a| a == activity) {
            self.activities.remove(index);
        } else {
            self.activities.push(activity.to_string());
        }
    }

    /// Validate the form and produce trip details
    pub fn submit(&self) -> Result<TripDetails> {
        if self.destination.trim().is_empty() {
            return Err(PackSmartError::validation("Destination cannot be empty"));
        }

        let duration = self.duration.trim();
        if duration.is_empty() {
            return Err(PackSmartError::validation("Duration is required"));
        }
        let duration_days: u32 = duration.parse().map_err(|_| {
            PackSmartError::validation(format!(
                "Duration must be a whole number of days, got '{duration}'"
            ))
        })?;

        let start_date = self.start_date.trim();
        if start_date.is_empty() {
            return Err(PackSmartError::validation("Start date is required"));
        }
        let start_date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").map_err(|_| {
            PackSmartError::validation(format!(
                "Start date must look like YYYY-MM-DD, got '{start_date}'"
            ))
        })?;

        let trip = TripParameters::new(
            &self.destination,
            duration_days,
            start_date,
            &self.activities,
        )?;

        info!(
            "Trip submitted: {} for {} days from {}",
            trip.destination, trip.duration_days, trip.start_date
        );

        Ok(TripDetails {
            trip,
            notes: self.notes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityTag;
    use rstest::rstest;

    fn filled() -> TripForm {
        TripForm {
            destination: "Tokyo".to_string(),
            duration: "3".to_string(),
            start_date: "2024-06-01".to_string(),
            activities: vec!["City Exploration".to_string()],
            notes: "Bring the rail pass".to_string(),
        }
    }

    #[test]
    fn test_submit_valid_form() {
        let details = filled().submit().unwrap();
        assert_eq!(details.trip.destination, "Tokyo");
        assert_eq!(details.trip.duration_days, 3);
        assert_eq!(
            details.trip.start_date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(details.trip.has(ActivityTag::CityExploration));
        assert_eq!(details.notes, "Bring the rail pass");
    }

    #[test]
    fn test_toggle_activity_adds_then_removes() {
        let mut form = TripForm::new();
        form.toggle_activity("Shopping");
        form.toggle_activity("Nightlife");
        assert_eq!(form.activities, vec!["Shopping", "Nightlife"]);

        form.toggle_activity("Shopping");
        assert_eq!(form.activities, vec!["Nightlife"]);
    }

    #[rstest]
    #[case("", "3", "2024-06-01", "Destination")]
    #[case("Tokyo", "", "2024-06-01", "Duration is required")]
    #[case("Tokyo", "three", "2024-06-01", "whole number")]
    #[case("Tokyo", "-2", "2024-06-01", "whole number")]
    #[case("Tokyo", "0", "2024-06-01", "at least 1 day")]
    #[case("Tokyo", "3", "", "Start date is required")]
    #[case("Tokyo", "3", "01/06/2024", "YYYY-MM-DD")]
    #[case("Tokyo", "3", "2023-02-29", "YYYY-MM-DD")]
    fn test_submit_rejects(
        #[case] destination: &str,
        #[case] duration: &str,
        #[case] start_date: &str,
        #[case] expected: &str,
    ) {
        let form = TripForm {
            destination: destination.to_string(),
            duration: duration.to_string(),
            start_date: start_date.to_string(),
            ..TripForm::default()
        };
        let err = form.submit().unwrap_err();
        assert!(matches!(err, PackSmartError::Validation { .. }));
        assert!(err.to_string().contains(expected), "{err}");
    }
}
