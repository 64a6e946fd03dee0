use quakemap_feed::FeedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Feed error: {0}")]
    Feed(#[from] FeedError),

    #[error("Map container id must not be empty")]
    MissingContainer,

    #[error("Map container id '{0}' must be letters, digits, '-' or '_'")]
    InvalidContainer(String),

    #[error("Map needs at least one base layer")]
    NoBaseLayers,

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
