use serde::{Deserialize, Serialize};

/// A GeoJSON feature collection as served by the USGS summary feeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<FeedMetadata>,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub count: Option<usize>,
    /// Epoch milliseconds
    #[serde(default)]
    pub generated: Option<i64>,
}

/// One earthquake event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    pub properties: Properties,
    pub geometry: Geometry,
}

/// Label used when a feature has no `place`.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// USGS publishes `null` for `place` and `mag` on some events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub place: Option<String>,
    /// Epoch milliseconds
    pub time: i64,
    #[serde(default)]
    pub mag: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude, depth_km]`
    pub coordinates: [f64; 3],
}

impl Feature {
    pub fn new(place: &str, time: i64, mag: f64, coordinates: [f64; 3]) -> Self {
        Self {
            properties: Properties {
                place: Some(place.to_string()),
                time,
                mag: Some(mag),
            },
            geometry: Geometry { coordinates },
        }
    }

    pub fn place(&self) -> &str {
        self.properties.place.as_deref().unwrap_or(UNKNOWN_PLACE)
    }

    pub fn time(&self) -> i64 {
        self.properties.time
    }

    /// Magnitude, `0.0` when the feed left it null.
    pub fn magnitude(&self) -> f64 {
        self.properties.mag.unwrap_or(0.0)
    }

    pub fn longitude(&self) -> f64 {
        self.geometry.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.geometry.coordinates[1]
    }

    pub fn depth(&self) -> f64 {
        self.geometry.coordinates[2]
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
