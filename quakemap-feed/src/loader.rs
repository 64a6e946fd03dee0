use crate::error::{FeedError, Result};
use crate::feature::FeatureCollection;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info};
use url::Url;

/// USGS summary feed: all magnitude 4.5+ events from the past month.
pub const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/4.5_month.geojson";

const USER_AGENT: &str = "Quakemap/0.1 (https://github.com/trapdoorsec/quakemap)";

/// Fetches a GeoJSON earthquake feed in a single request.
///
/// No timeout is applied unless one is set with [`FeedLoader::with_timeout`];
/// a server that never answers keeps `fetch` pending forever.
pub struct FeedLoader {
    timeout: Option<Duration>,
    user_agent: String,
}

impl FeedLoader {
    pub fn new() -> Self {
        Self {
            timeout: None,
            user_agent: USER_AGENT.to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(timeout_secs));
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    fn build_client(&self) -> Result<Client> {
        let mut builder = Client::builder()
            .user_agent(self.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(5));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }

    /// Perform one GET against `feed_url` and parse the body.
    pub async fn fetch(&self, feed_url: &str) -> Result<FeatureCollection> {
        let parsed_url =
            Url::parse(feed_url).map_err(|e| FeedError::InvalidUrl(format!("{}: {}", feed_url, e)))?;

        info!("Fetching earthquake feed from {}", parsed_url);

        let client = self.build_client()?;
        let start = Instant::now();
        let response = client.get(parsed_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let collection = parse_feed(&body)?;

        debug!(
            "Parsed feed payload: {} bytes, {} features, metadata: {:?}",
            body.len(),
            collection.len(),
            collection.metadata
        );
        info!(
            "Fetched {} features in {:?}",
            collection.len(),
            start.elapsed()
        );

        Ok(collection)
    }
}

impl Default for FeedLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a feed body into a feature collection.
pub fn parse_feed(body: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(body)?)
}
