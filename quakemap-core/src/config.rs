// Static map configuration

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Initial view centre, `[lat, lon]`
pub const MAP_CENTER: [f64; 2] = [37.09, -95.71];
pub const MAP_ZOOM: u8 = 5;

/// Marker radius in pixels per unit of magnitude
pub const RADIUS_MULTIPLIER: f64 = 4.0;

pub const STREET_LAYER_NAME: &str = "Street Map";
pub const STREET_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

pub const TOPO_LAYER_NAME: &str = "Topographic Map";
pub const TOPO_TILE_URL: &str = "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png";
pub const TOPO_ATTRIBUTION: &str =
    "Map data & OpenStreetMap contributors, SRTM | Map style OpenTopoMap (CC-BY-SA)";

pub const OVERLAY_NAME: &str = "Earthquakes";

pub const LEAFLET_VERSION: &str = "1.9.4";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayerConfig {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapSettings {
    pub container_id: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub base_layers: Vec<TileLayerConfig>,
    pub overlay_name: String,
    pub title: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            base_layers: vec![
                TileLayerConfig {
                    name: STREET_LAYER_NAME.to_string(),
                    url_template: STREET_TILE_URL.to_string(),
                    attribution: STREET_ATTRIBUTION.to_string(),
                },
                TileLayerConfig {
                    name: TOPO_LAYER_NAME.to_string(),
                    url_template: TOPO_TILE_URL.to_string(),
                    attribution: TOPO_ATTRIBUTION.to_string(),
                },
            ],
            overlay_name: OVERLAY_NAME.to_string(),
            title: "Earthquakes".to_string(),
        }
    }
}

impl MapSettings {
    pub fn with_container_id(mut self, container_id: &str) -> Self {
        self.container_id = container_id.to_string();
        self
    }
}
