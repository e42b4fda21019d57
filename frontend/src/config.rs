use shared::FALLBACK_IMAGE_URL;

const DEFAULT_EVENTS_URL: &str = "/miami_events.json";
const DEFAULT_SITE_TITLE: &str = "Miami Events Hub";

/// Settings baked in at build time (`EVENTS_URL=... trunk build`)
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub events_url: String,
    pub fallback_image_url: String,
    pub site_title: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("EVENTS_URL"),
            option_env!("FALLBACK_IMAGE_URL"),
            option_env!("SITE_TITLE"),
        )
    }

    fn from_values(
        events_url: Option<&str>,
        fallback_image_url: Option<&str>,
        site_title: Option<&str>,
    ) -> Self {
        fn or_default(value: Option<&str>, default: &str) -> String {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            events_url: or_default(events_url, DEFAULT_EVENTS_URL),
            fallback_image_url: or_default(fallback_image_url, FALLBACK_IMAGE_URL),
            site_title: or_default(site_title, DEFAULT_SITE_TITLE),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.events_url, "/miami_events.json");
        assert_eq!(config.fallback_image_url, FALLBACK_IMAGE_URL);
        assert_eq!(config.site_title, "Miami Events Hub");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = AppConfig::from_values(Some("  "), None, Some("Grove Guide"));
        assert_eq!(config.events_url, "/miami_events.json");
        assert_eq!(config.site_title, "Grove Guide");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("/data/events.json"), Some("/img/none.png"), None);
        assert_eq!(config.events_url, "/data/events.json");
        assert_eq!(config.fallback_image_url, "/img/none.png");
    }
}
