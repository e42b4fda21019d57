use thiserror::Error;

/// The only message the page shows when events cannot be loaded
pub const LOAD_ERROR_MESSAGE: &str = "Could not load upcoming events. Please check back later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("invalid events document: {0}")]
    Parse(String),
}

impl LoadError {
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_MESSAGE
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
