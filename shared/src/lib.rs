pub mod error;
pub mod filter;
pub mod loader;
pub mod models;

pub use error::{LoadError, LoadResult, LOAD_ERROR_MESSAGE};
pub use filter::{CityFilter, DateRange, EventFilter};
pub use models::{City, Event, EventRecord, FALLBACK_IMAGE_URL, NO_DESCRIPTION};
