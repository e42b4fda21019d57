use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Placeholder shown when an event has no image or its image fails to load
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?auto=format&fit=crop&q=80&w=800";

pub const NO_DESCRIPTION: &str = "No description available.";

/// Format of `<input type="date">` values
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date shapes found in scraped listings, tried in order
const LISTING_DATE_FORMATS: [&str; 6] = [
    DATE_FORMAT,
    "%B %d, %Y",
    "%b %d, %Y",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%m/%d/%Y",
];

/// City label attached to an event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum City {
    CoralGables,
    CoconutGrove,
    Miami,
    Other(String),
}

impl City {
    /// Cities offered in the filter dropdown, in display order
    pub const KNOWN: [City; 3] = [City::CoralGables, City::CoconutGrove, City::Miami];

    pub fn label(&self) -> &str {
        match self {
            City::CoralGables => "Coral Gables",
            City::CoconutGrove => "Coconut Grove",
            City::Miami => "Miami",
            City::Other(label) => label,
        }
    }

    pub fn option_label(&self) -> &str {
        match self {
            City::Miami => "Miami (General)",
            other => other.label(),
        }
    }

    /// Color scheme for the city badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            City::CoralGables => "badge-orange",
            City::CoconutGrove => "badge-emerald",
            City::Miami => "badge-teal",
            City::Other(_) => "badge-gray",
        }
    }
}

impl From<&str> for City {
    fn from(value: &str) -> Self {
        match value {
            "Coral Gables" => City::CoralGables,
            "Coconut Grove" => City::CoconutGrove,
            "Miami" => City::Miami,
            other => City::Other(other.to_string()),
        }
    }
}

impl From<String> for City {
    fn from(value: String) -> Self {
        match City::from(value.as_str()) {
            City::Other(_) => City::Other(value),
            known => known,
        }
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        match city {
            City::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Event record as it appears in the static JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EventRecord {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(custom = "validate_date")]
    pub date: String,

    pub city: City,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub url: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub image: Option<String>,

    #[serde(default)]
    pub source: Option<String>,
}

/// Normalized event held by the page after load
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: usize,
    pub title: String,
    /// Date exactly as published, used for display
    pub date: String,
    /// `None` when `date` has no recognizable day, month and year
    pub day: Option<NaiveDate>,
    pub city: City,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: String,
    pub source: Option<String>,
}

impl Event {
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}

pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    LISTING_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}

fn validate_date(date: &str) -> Result<(), ValidationError> {
    match parse_day(date) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("calendar_date")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_from_known_labels() {
        assert_eq!(City::from("Coral Gables"), City::CoralGables);
        assert_eq!(City::from("Coconut Grove"), City::CoconutGrove);
        assert_eq!(City::from("Miami"), City::Miami);
    }

    #[test]
    fn test_city_unknown_label_is_preserved() {
        let city = City::from("Key Biscayne".to_string());
        assert_eq!(city, City::Other("Key Biscayne".to_string()));
        assert_eq!(city.label(), "Key Biscayne");
        assert_eq!(city.badge_class(), "badge-gray");
    }

    #[test]
    fn test_city_labels_are_case_sensitive() {
        assert_eq!(City::from("miami"), City::Other("miami".to_string()));
    }

    #[test]
    fn test_city_serde_uses_display_label() {
        let json = serde_json::to_string(&City::CoconutGrove).unwrap();
        assert_eq!(json, "\"Coconut Grove\"");

        let city: City = serde_json::from_str("\"Wynwood\"").unwrap();
        assert_eq!(city, City::Other("Wynwood".to_string()));
    }

    #[test]
    fn test_option_label() {
        assert_eq!(City::Miami.option_label(), "Miami (General)");
        assert_eq!(City::CoralGables.option_label(), "Coral Gables");
    }

    #[test]
    fn test_record_optional_fields_default_to_none() {
        let record: EventRecord = serde_json::from_str(
            r#"{"title": "Jazz Night", "date": "2025-03-01", "city": "Miami"}"#,
        )
        .unwrap();
        assert_eq!(record.description, None);
        assert_eq!(record.url, None);
        assert_eq!(record.image, None);
        assert_eq!(record.source, None);
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2025-03-01"),
            NaiveDate::from_ymd_opt(2025, 3, 1)
        );
        assert_eq!(parse_day(" 2025-03-01 "), NaiveDate::from_ymd_opt(2025, 3, 1));
        assert_eq!(parse_day("March 1st"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn test_parse_day_listing_formats() {
        let march_15 = NaiveDate::from_ymd_opt(2025, 3, 15);
        assert_eq!(parse_day("March 15, 2025"), march_15);
        assert_eq!(parse_day("Mar 15, 2025"), march_15);
        assert_eq!(parse_day("Saturday, March 15, 2025"), march_15);
        assert_eq!(parse_day("Sat, Mar 15, 2025"), march_15);
        assert_eq!(parse_day("03/15/2025"), march_15);
        assert_eq!(parse_day("2025-03-15T19:30:00-04:00"), march_15);
    }

    #[test]
    fn test_parse_day_requires_a_year() {
        assert_eq!(parse_day("Sat, Mar 15"), None);
        assert_eq!(parse_day("March 15"), None);
    }
}
