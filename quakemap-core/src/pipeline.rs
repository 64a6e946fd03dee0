use crate::compose::{MapComposition, compose_map, validate_settings};
use crate::config::MapSettings;
use crate::encode::encode_features;
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use quakemap_feed::{DEFAULT_FEED_URL, FeedLoader};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Options for a single fetch-and-compose run
pub struct RenderOptions {
    pub feed_url: String,
    pub settings: MapSettings,
    /// `None` waits on the feed indefinitely
    pub timeout_secs: Option<u64>,
    pub show_progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            settings: MapSettings::default(),
            timeout_secs: None,
            show_progress: false,
        }
    }
}

/// Callback for reporting pipeline progress
pub type RenderProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Fetch the feed once, then encode and compose the map.
pub async fn execute_render(
    options: RenderOptions,
    progress_callback: Option<RenderProgressCallback>,
) -> Result<MapComposition> {
    let RenderOptions {
        feed_url,
        settings,
        timeout_secs,
        show_progress,
    } = options;

    validate_settings(&settings)?;

    let spinner = if show_progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Fetching {}", feed_url));
        Some(pb)
    } else {
        None
    };

    let mut loader = FeedLoader::new();
    if let Some(secs) = timeout_secs {
        loader = loader.with_timeout(secs);
    }

    let collection = match loader.fetch(&feed_url).await {
        Ok(collection) => collection,
        Err(e) => {
            if let Some(ref pb) = spinner {
                pb.finish_and_clear();
            }
            return Err(e.into());
        }
    };

    if let Some(ref callback) = progress_callback {
        callback(format!("Fetched {} earthquakes", collection.len()));
    }
    if let Some(ref pb) = spinner {
        pb.set_message(format!("Encoding {} earthquakes...", collection.len()));
    }

    let markers = encode_features(collection.features);
    let composed = compose_map(markers, &settings);
    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }
    let composition = composed?;

    if let Some(ref callback) = progress_callback {
        callback(format!("Composed map with {} markers", composition.marker_count()));
    }

    info!("Map composed with {} markers", composition.marker_count());
    Ok(composition)
}
