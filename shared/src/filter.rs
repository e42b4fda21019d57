use chrono::NaiveDate;

use crate::models::{parse_day, City, Event};

/// Value of the "All Cities" option in the city dropdown
pub const ALL_CITIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CityFilter {
    #[default]
    All,
    Only(City),
}

impl CityFilter {
    /// Parses a `<select>` value
    pub fn from_select(value: &str) -> Self {
        if value == ALL_CITIES {
            CityFilter::All
        } else {
            CityFilter::Only(City::from(value))
        }
    }

    pub fn select_value(&self) -> &str {
        match self {
            CityFilter::All => ALL_CITIES,
            CityFilter::Only(city) => city.label(),
        }
    }

    pub fn matches(&self, city: &City) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Only(selected) => selected == city,
        }
    }
}

/// Inclusive date bounds; either side may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Builds bounds from raw date input values. Empty or malformed values leave the bound open.
    pub fn from_inputs(start: &str, end: &str) -> Self {
        Self {
            start: parse_day(start),
            end: parse_day(end),
        }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, day: Option<NaiveDate>) -> bool {
        if self.is_open() {
            return true;
        }
        let Some(day) = day else {
            return false;
        };

        self.start.map_or(true, |start| day >= start) && self.end.map_or(true, |end| day <= end)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub city: CityFilter,
    pub dates: DateRange,
    pub query: String,
}

impl EventFilter {
    pub fn is_empty(&self) -> bool {
        self.city == CityFilter::All && self.dates.is_open() && self.query.is_empty()
    }

    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn heading(&self) -> String {
        match &self.city {
            CityFilter::All => "Upcoming Events".to_string(),
            CityFilter::Only(city) => format!("Events in {}", city),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        self.city.matches(&event.city)
            && self.dates.contains(event.day)
            && matches_query(event, &self.query.to_lowercase())
    }

    /// Returns the matching events sorted by date, leaving `events` untouched.
    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        let mut matching: Vec<Event> = events
            .iter()
            .filter(|event| self.matches(event))
            .cloned()
            .collect();

        // Stable sort: undated events go last, in load order.
        matching.sort_by_key(|event| (event.day.is_none(), event.day));
        matching
    }
}

fn matches_query(event: &Event, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    event.title.to_lowercase().contains(needle)
        || event
            .description
            .as_deref()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}
