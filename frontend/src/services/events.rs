use gloo_net::http::Request;
use shared::loader::parse_document;
use shared::{Event, LoadError};

use crate::config::AppConfig;

pub struct EventsService;

impl EventsService {
    /// Fetches and normalizes the static events document.
    pub async fn fetch_events(config: &AppConfig) -> Result<Vec<Event>, LoadError> {
        let response = Request::get(&config.events_url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_document(&body, &config.fallback_image_url)
    }
}
