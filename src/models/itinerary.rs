//! Itinerary display records

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder date label for days that are not shown concretely
pub const PLACEHOLDER_DATE: &str = "...";

/// Part of the day an entry is scheduled in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
    #[serde(rename = "All Day")]
    AllDay,
}

impl TimeSlot {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Afternoon => "Afternoon",
            TimeSlot::Evening => "Evening",
            TimeSlot::Night => "Night",
            TimeSlot::AllDay => "All Day",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What sort of entry this is, used for icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Sightseeing,
    Dining,
    Activity,
    Rest,
}

impl ActivityKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ActivityKind::Dining => "🍴",
            ActivityKind::Sightseeing => "📷",
            ActivityKind::Rest => "☕",
            ActivityKind::Activity => "📍",
        }
    }
}

/// A single line of a day plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub time: TimeSlot,
    pub title: String,
    pub description: String,
    pub kind: ActivityKind,
}

impl ActivityEntry {
    #[must_use]
    pub fn new(
        time: TimeSlot,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ActivityKind,
    ) -> Self {
        Self {
            time,
            title: title.into(),
            description: description.into(),
            kind,
        }
    }
}

impl fmt::Display for ActivityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} [{}]", self.kind.icon(), self.title, self.time)?;
        write!(f, "   {}", self.description)
    }
}

/// One day of the sample itinerary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based day number
    pub day: u32,
    /// Formatted date such as "Saturday, Jun 1", or [`PLACEHOLDER_DATE`]
    pub date: String,
    pub activities: Vec<ActivityEntry>,
}

impl DayPlan {
    /// Titles of all entries, in order
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.activities.iter().map(|a| a.title.as_str()).collect()
    }
}
