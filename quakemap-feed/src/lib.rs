pub mod error;
pub mod feature;
pub mod loader;

pub use error::FeedError;
pub use feature::{Feature, FeatureCollection, UNKNOWN_PLACE};
pub use loader::{DEFAULT_FEED_URL, FeedLoader, parse_feed};
