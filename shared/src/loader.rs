use validator::Validate;

use crate::error::LoadResult;
use crate::models::{parse_day, Event, EventRecord};

/// Field-level problem found in a raw record. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordIssue {
    pub index: usize,
    pub field: String,
    pub code: String,
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "record {}: {} ({})", self.index, self.field, self.code)
    }
}

/// Assigns positional ids and fills in `fallback_image` where a record has none.
pub fn normalize(records: Vec<EventRecord>, fallback_image: &str) -> Vec<Event> {
    records
        .into_iter()
        .enumerate()
        .map(|(id, record)| {
            let image = record
                .image
                .filter(|image| !image.trim().is_empty())
                .unwrap_or_else(|| fallback_image.to_string());

            Event {
                id,
                day: parse_day(&record.date),
                title: record.title,
                date: record.date,
                city: record.city,
                description: record.description,
                url: record.url,
                image,
                source: record.source,
            }
        })
        .collect()
}

pub fn audit(records: &[EventRecord]) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let Err(errors) = record.validate() else {
            continue;
        };

        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(field, _)| *field);

        for (field, field_errors) in fields {
            for error in field_errors {
                issues.push(RecordIssue {
                    index,
                    field: field.to_string(),
                    code: error.code.to_string(),
                });
            }
        }
    }

    issues
}

/// Parses the static events document into normalized events.
pub fn parse_document(body: &str, fallback_image: &str) -> LoadResult<Vec<Event>> {
    let records: Vec<EventRecord> = serde_json::from_str(body)?;

    for issue in audit(&records) {
        tracing::warn!("Suspicious event record: {}", issue);
    }

    tracing::debug!("Parsed {} event records", records.len());
    Ok(normalize(records, fallback_image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::models::{City, FALLBACK_IMAGE_URL};

    fn record(title: &str, date: &str) -> EventRecord {
        EventRecord {
            title: title.to_string(),
            date: date.to_string(),
            city: City::Miami,
            description: None,
            url: None,
            image: None,
            source: None,
        }
    }

    #[test]
    fn test_normalize_assigns_positional_ids() {
        let events = normalize(
            vec![
                record("First", "2025-05-02"),
                record("Second", "2025-05-01"),
                record("Third", "2025-05-03"),
            ],
            FALLBACK_IMAGE_URL,
        );

        let ids: Vec<usize> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert_eq!(events[1].title, "Second");
    }

    #[test]
    fn test_normalize_image_fallback() {
        let mut with_image = record("Art Walk", "2025-05-01");
        with_image.image = Some("https://example.com/art.jpg".to_string());
        let mut blank_image = record("Jazz", "2025-05-01");
        blank_image.image = Some(String::new());

        let events = normalize(
            vec![with_image, record("Market", "2025-05-01"), blank_image],
            FALLBACK_IMAGE_URL,
        );

        assert_eq!(events[0].image, "https://example.com/art.jpg");
        assert_eq!(events[1].image, FALLBACK_IMAGE_URL);
        assert_eq!(events[2].image, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_normalize_custom_fallback() {
        let events = normalize(vec![record("Market", "2025-05-01")], "/img/placeholder.png");
        assert_eq!(events[0].image, "/img/placeholder.png");
    }

    #[test]
    fn test_normalize_keeps_unparseable_date_text() {
        let events = normalize(vec![record("Gala", "Sat, Mar 1")], FALLBACK_IMAGE_URL);
        assert_eq!(events[0].date, "Sat, Mar 1");
        assert_eq!(events[0].day, None);
    }

    #[test]
    fn test_parse_document() {
        let body = r#"[
            {
                "title": "Coral Gables Farmers Market",
                "date": "2025-04-12",
                "city": "Coral Gables",
                "url": "https://www.coralgables.com/events/market",
                "source": "Coral Gables Official"
            },
            {
                "title": "Grove Jazz Night",
                "date": "2025-04-10",
                "city": "Coconut Grove",
                "description": "Live jazz on the bay."
            }
        ]"#;

        let events = parse_document(body, FALLBACK_IMAGE_URL).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].city, City::CoralGables);
        assert_eq!(events[0].source.as_deref(), Some("Coral Gables Official"));
        assert_eq!(events[1].description.as_deref(), Some("Live jazz on the bay."));
        assert_eq!(events[1].image, FALLBACK_IMAGE_URL);
    }

    #[test]
    fn test_parse_document_empty_array() {
        assert_eq!(parse_document("[]", "/placeholder.png").unwrap(), Vec::new());
    }

    #[test]
    fn test_parse_document_rejects_non_array() {
        let result = parse_document(r#"{"events": []}"#, FALLBACK_IMAGE_URL);
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_parse_document_rejects_missing_title() {
        let result = parse_document(
            r#"[{"date": "2025-04-10", "city": "Miami"}]"#,
            FALLBACK_IMAGE_URL,
        );
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_audit_reports_bad_fields() {
        let mut bad = record("", "next friday");
        bad.url = Some("not a url".to_string());

        let issues = audit(&[record("Fine", "2025-01-01"), bad]);
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();

        assert!(issues.iter().all(|i| i.index == 1));
        assert_eq!(fields, vec!["date", "title", "url"]);
    }

    #[test]
    fn test_audit_clean_records() {
        let mut good = record("Fine", "2025-01-01");
        good.url = Some("https://example.com/fine".to_string());
        assert!(audit(&[good]).is_empty());
    }
}
