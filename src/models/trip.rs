//! Trip parameters and the activity tag vocabulary

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PackSmartError, Result};

/// One label from the fixed activity vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityTag {
    #[serde(rename = "Beach/Swimming")]
    BeachSwimming,
    #[serde(rename = "Hiking/Outdoor")]
    HikingOutdoor,
    #[serde(rename = "Business/Work")]
    BusinessWork,
    #[serde(rename = "City Exploration")]
    CityExploration,
    #[serde(rename = "Fine Dining")]
    FineDining,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Museums/Culture")]
    MuseumsCulture,
    #[serde(rename = "Nightlife")]
    Nightlife,
    #[serde(rename = "Photography")]
    Photography,
    /// Selectable, but no itinerary or packing rule reacts to it.
    #[serde(rename = "Adventure Sports")]
    AdventureSports,
}

impl ActivityTag {
    /// Every tag, in the order the form offers them
    pub const ALL: [ActivityTag; 10] = [
        ActivityTag::BeachSwimming,
        ActivityTag::HikingOutdoor,
        ActivityTag::BusinessWork,
        ActivityTag::CityExploration,
        ActivityTag::FineDining,
        ActivityTag::Shopping,
        ActivityTag::MuseumsCulture,
        ActivityTag::Nightlife,
        ActivityTag::Photography,
        ActivityTag::AdventureSports,
    ];

    /// Display label, also the wire representation
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActivityTag::BeachSwimming => "Beach/Swimming",
            ActivityTag::HikingOutdoor => "Hiking/Outdoor",
            ActivityTag::BusinessWork => "Business/Work",
            ActivityTag::CityExploration => "City Exploration",
            ActivityTag::FineDining => "Fine Dining",
            ActivityTag::Shopping => "Shopping",
            ActivityTag::MuseumsCulture => "Museums/Culture",
            ActivityTag::Nightlife => "Nightlife",
            ActivityTag::Photography => "Photography",
            ActivityTag::AdventureSports => "Adventure Sports",
        }
    }
}

impl fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityTag {
    type Err = PackSmartError;

    fn from_str(s: &str) -> Result<Self> {
        ActivityTag::ALL
            .into_iter()
            .find(|tag| tag.label() == s)
            .ok_or_else(|| PackSmartError::validation(format!("Unknown activity '{s}'")))
    }
}

/// Parse activity labels, silently dropping anything outside the vocabulary
pub fn parse_activity_labels<I, S>(labels: I) -> BTreeSet<ActivityTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    labels
        .into_iter()
        .filter_map(|label| {
            let label = label.as_ref();
            match label.parse::<ActivityTag>() {
                Ok(tag) => Some(tag),
                Err(_) => {
                    debug!("Ignoring unrecognized activity '{}'", label);
                    None
                }
            }
        })
        .collect()
}

/// Immutable input bundle shared by both generators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    /// Where the trip goes
    pub destination: String,
    /// Trip length in days
    pub duration_days: u32,
    /// First day of the trip
    pub start_date: NaiveDate,
    /// Selected activities
    pub activities: BTreeSet<ActivityTag>,
}

impl TripParameters {
    /// Build validated trip parameters from typed values.
    ///
    /// Unknown activity labels are dropped. Fails when the destination is blank
    /// or the duration is zero.
    pub fn new<I, S>(
        destination: &str,
        duration_days: u32,
        start_date: NaiveDate,
        activity_labels: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(PackSmartError::validation("Destination cannot be empty"));
        }
        if duration_days == 0 {
            return Err(PackSmartError::validation(
                "Duration must be at least 1 day",
            ));
        }

        Ok(Self {
            destination: destination.to_string(),
            duration_days,
            start_date,
            activities: parse_activity_labels(activity_labels),
        })
    }

    /// Whether the given activity was selected
    #[must_use]
    pub fn has(&self, tag: ActivityTag) -> bool {
        self.activities.contains(&tag)
    }
}
