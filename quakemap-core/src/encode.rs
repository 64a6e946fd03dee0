// Feature -> styled marker encoding

use crate::config::RADIUS_MULTIPLIER;
use chrono::{DateTime, Utc};
use quakemap_feed::Feature;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEPTH_COLOR_90_PLUS: &str = "#FF5F65";
pub const DEPTH_COLOR_70_90: &str = "#FCA35D";
pub const DEPTH_COLOR_50_70: &str = "#FDB72A";
pub const DEPTH_COLOR_30_50: &str = "#F7DB11";
pub const DEPTH_COLOR_10_30: &str = "#DCFF5E";
pub const DEPTH_COLOR_SHALLOW: &str = "#A3F600";

/// Stroke and fill settings shared by every marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: "#000".to_string(),
            weight: 0.5,
            opacity: 1.0,
            fill_opacity: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub fill_color: String,
    pub style: MarkerStyle,
    pub popup: String,
}

/// Six-bucket step function on depth in km. Depths at or below 10,
/// including negative depths and NaN, fall into the shallowest bucket.
pub fn color_for_depth(depth: f64) -> &'static str {
    if depth > 90.0 {
        DEPTH_COLOR_90_PLUS
    } else if depth > 70.0 {
        DEPTH_COLOR_70_90
    } else if depth > 50.0 {
        DEPTH_COLOR_50_70
    } else if depth > 30.0 {
        DEPTH_COLOR_30_50
    } else if depth > 10.0 {
        DEPTH_COLOR_10_30
    } else {
        DEPTH_COLOR_SHALLOW
    }
}

/// Linear magnitude scale. Not clamped, so zero or negative magnitudes
/// produce a zero or negative radius.
pub fn radius_for_magnitude(mag: f64) -> f64 {
    mag * RADIUS_MULTIPLIER
}

/// Render an epoch-millisecond timestamp, e.g. `Tue Nov 14 2023 22:13:20 GMT+0000`.
pub fn format_event_time(epoch_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(epoch_millis) {
        Some(datetime) => datetime.format("%a %b %d %Y %H:%M:%S GMT+0000").to_string(),
        None => epoch_millis.to_string(),
    }
}

/// Popup markup for one feature. The feed is trusted, so nothing is escaped.
pub fn popup_text(feature: &Feature) -> String {
    format!(
        "<h3>{}</h3><hr><p>{}</p><p>Magnitude: {}</p><p>Depth: {} km</p>",
        feature.place(),
        format_event_time(feature.time()),
        feature.magnitude(),
        feature.depth()
    )
}

pub fn encode_feature(feature: &Feature) -> StyledMarker {
    if feature.magnitude() < 0.0 {
        warn!(
            "Negative magnitude {} at {}, marker radius will be negative",
            feature.magnitude(),
            feature.place()
        );
    }

    StyledMarker {
        lat: feature.latitude(),
        lon: feature.longitude(),
        radius: radius_for_magnitude(feature.magnitude()),
        fill_color: color_for_depth(feature.depth()).to_string(),
        style: MarkerStyle::default(),
        popup: popup_text(feature),
    }
}

/// One marker per feature, in input order.
pub fn encode_features(features: Vec<Feature>) -> Vec<StyledMarker> {
    features.iter().map(encode_feature).collect()
}
