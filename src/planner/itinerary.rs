//! Sample itinerary generation
//!
//! Builds at most one week of day plans from fixed rule tables. The first day
//! is always the arrival day, the last day of a trip that fits into a week is
//! the departure day, and every other day is a regular day whose entries
//! depend on the selected activities.

use chrono::{Days, NaiveDate};
use tracing::{debug, instrument};

use crate::models::{
    ActivityEntry, ActivityKind, ActivityTag, DayPlan, PLACEHOLDER_DATE, TimeSlot,
    TripParameters,
};

/// Number of concrete days shown before collapsing into a continuation day
pub const MAX_PLANNED_DAYS: u32 = 7;

const DATE_FORMAT: &str = "%A, %b %-d";

/// Static entry data; the description may contain `{destination}`
#[derive(Debug, Clone, Copy)]
struct EntryTemplate {
    time: TimeSlot,
    title: &'static str,
    description: &'static str,
    kind: ActivityKind,
}

impl EntryTemplate {
    const fn new(
        time: TimeSlot,
        title: &'static str,
        description: &'static str,
        kind: ActivityKind,
    ) -> Self {
        Self {
            time,
            title,
            description,
            kind,
        }
    }

    fn render(&self, destination: &str) -> ActivityEntry {
        ActivityEntry::new(
            self.time,
            self.title,
            self.description.replace("{destination}", destination),
            self.kind,
        )
    }
}

const ARRIVAL_DAY: [EntryTemplate; 3] = [
    EntryTemplate::new(
        TimeSlot::Morning,
        "Arrival",
        "Arrive in {destination}",
        ActivityKind::Activity,
    ),
    EntryTemplate::new(
        TimeSlot::Afternoon,
        "Check-in & Rest",
        "Settle into accommodation",
        ActivityKind::Rest,
    ),
    EntryTemplate::new(
        TimeSlot::Evening,
        "Welcome Dinner",
        "Try local cuisine",
        ActivityKind::Dining,
    ),
];

const DEPARTURE_DAY: [EntryTemplate; 3] = [
    EntryTemplate::new(
        TimeSlot::Morning,
        "Check-out",
        "Pack and prepare for departure",
        ActivityKind::Activity,
    ),
    EntryTemplate::new(
        TimeSlot::Afternoon,
        "Last-minute Shopping",
        "Pick up souvenirs",
        ActivityKind::Activity,
    ),
    EntryTemplate::new(
        TimeSlot::Evening,
        "Departure",
        "Depart from {destination}",
        ActivityKind::Activity,
    ),
];

const BREAKFAST: EntryTemplate = EntryTemplate::new(
    TimeSlot::Morning,
    "Breakfast",
    "Start the day with local breakfast",
    ActivityKind::Dining,
);

const DINNER: EntryTemplate = EntryTemplate::new(
    TimeSlot::Evening,
    "Dinner",
    "Experience local dining scene",
    ActivityKind::Dining,
);

const CONTINUE_EXPLORING: EntryTemplate = EntryTemplate::new(
    TimeSlot::AllDay,
    "Continue Exploring",
    "More adventures await in {destination}!",
    ActivityKind::Activity,
);

/// Regular-day entries placed between breakfast and dinner, in precedence order
const DAYTIME_RULES: [(ActivityTag, EntryTemplate); 4] = [
    (
        ActivityTag::CityExploration,
        EntryTemplate::new(
            TimeSlot::Morning,
            "City Walking Tour",
            "Explore main attractions and landmarks",
            ActivityKind::Sightseeing,
        ),
    ),
    (
        ActivityTag::MuseumsCulture,
        EntryTemplate::new(
            TimeSlot::Afternoon,
            "Museum Visit",
            "Discover local history and culture",
            ActivityKind::Sightseeing,
        ),
    ),
    (
        ActivityTag::BeachSwimming,
        EntryTemplate::new(
            TimeSlot::Afternoon,
            "Beach Time",
            "Relax by the water",
            ActivityKind::Activity,
        ),
    ),
    (
        ActivityTag::Shopping,
        EntryTemplate::new(
            TimeSlot::Afternoon,
            "Shopping District",
            "Browse local markets and shops",
            ActivityKind::Activity,
        ),
    ),
];

/// Regular-day entries placed after dinner
const NIGHT_RULES: [(ActivityTag, EntryTemplate); 1] = [(
    ActivityTag::Nightlife,
    EntryTemplate::new(
        TimeSlot::Night,
        "Evening Entertainment",
        "Explore local nightlife",
        ActivityKind::Activity,
    ),
)];

/// Which fixed shape a concrete day takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DayShape {
    Arrival,
    Departure,
    Regular,
}

fn day_shape(day: u32, duration_days: u32) -> DayShape {
    if day == 1 {
        DayShape::Arrival
    } else if day == duration_days && duration_days <= MAX_PLANNED_DAYS {
        DayShape::Departure
    } else {
        DayShape::Regular
    }
}

/// Generates the sample itinerary for a trip
pub struct ItineraryGenerator;

impl ItineraryGenerator {
    /// Produce the ordered day plans for `trip`.
    ///
    /// Never fails: unknown activities were already dropped when the trip was
    /// built, and a zero-day trip simply yields no days.
    #[instrument(skip(trip), fields(destination = %trip.destination, days = trip.duration_days))]
    #[must_use]
    pub fn generate(trip: &TripParameters) -> Vec<DayPlan> {
        let planned_days = trip.duration_days.min(MAX_PLANNED_DAYS);
        let mut itinerary: Vec<DayPlan> = (1..=planned_days)
            .map(|day| DayPlan {
                day,
                date: display_date(trip.start_date, day),
                activities: Self::activities_for_day(trip, day),
            })
            .collect();

        if trip.duration_days > MAX_PLANNED_DAYS {
            itinerary.push(DayPlan {
                day: MAX_PLANNED_DAYS + 1,
                date: PLACEHOLDER_DATE.to_string(),
                activities: vec![CONTINUE_EXPLORING.render(&trip.destination)],
            });
        }

        debug!("Generated itinerary with {} days", itinerary.len());
        itinerary
    }

    fn activities_for_day(trip: &TripParameters, day: u32) -> Vec<ActivityEntry> {
        let destination = trip.destination.as_str();

        match day_shape(day, trip.duration_days) {
            DayShape::Arrival => ARRIVAL_DAY.iter().map(|t| t.render(destination)).collect(),
            DayShape::Departure => DEPARTURE_DAY.iter().map(|t| t.render(destination)).collect(),
            DayShape::Regular => std::iter::once(BREAKFAST.render(destination))
                .chain(matching_entries(&DAYTIME_RULES, trip))
                .chain(std::iter::once(DINNER.render(destination)))
                .chain(matching_entries(&NIGHT_RULES, trip))
                .collect(),
        }
    }
}

/// Entries of every rule whose tag was selected, in table order
fn matching_entries<'a>(
    rules: &'a [(ActivityTag, EntryTemplate)],
    trip: &'a TripParameters,
) -> impl Iterator<Item = ActivityEntry> + 'a {
    rules
        .iter()
        .filter(move |(tag, _)| trip.has(*tag))
        .map(move |(_, template)| template.render(&trip.destination))
}

/// Weekday/month/day label for the given 1-based trip day
fn display_date(start_date: NaiveDate, day: u32) -> String {
    start_date
        .checked_add_days(Days::new(u64::from(day - 1)))
        .map_or_else(
            || PLACEHOLDER_DATE.to_string(),
            |date| date.format(DATE_FORMAT).to_string(),
        )
}
