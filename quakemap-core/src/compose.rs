// Map composition: base layers, overlay, controls

use crate::config::MapSettings;
use crate::encode::StyledMarker;
use crate::error::{MapError, Result};
use crate::legend::{LEGEND_ENTRIES, LegendRow, legend_rows, render_legend_html};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: [f64; 2],
    pub zoom: u8,
}

/// A tile set; only one base layer is active at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLayer {
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayLayer {
    pub name: String,
    pub active: bool,
    pub markers: Vec<StyledMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendControl {
    pub position: ControlPosition,
    pub rows: Vec<LegendRow>,
    pub html: String,
}

/// The complete interactive map, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapComposition {
    pub title: String,
    pub container_id: String,
    pub view: MapView,
    pub base_layers: Vec<BaseLayer>,
    pub overlay: OverlayLayer,
    pub layer_control: LayerControl,
    pub legend: LegendControl,
}

impl MapComposition {
    pub fn active_base_layer(&self) -> Option<&BaseLayer> {
        self.base_layers.iter().find(|layer| layer.active)
    }

    pub fn markers(&self) -> &[StyledMarker] {
        &self.overlay.markers
    }

    pub fn marker_count(&self) -> usize {
        self.overlay.markers.len()
    }
}

pub fn build_legend_control() -> LegendControl {
    let rows = legend_rows(&LEGEND_ENTRIES);
    let html = render_legend_html(&rows);
    LegendControl {
        position: ControlPosition::BottomRight,
        rows,
        html,
    }
}

/// Container ids end up in an `id` attribute and in `L.map(...)`, so only
/// plain ASCII word characters and `-` are accepted.
pub fn is_valid_container_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Check the settings a composition depends on. Needs no markers, so callers
/// can run it before fetching.
pub fn validate_settings(settings: &MapSettings) -> Result<()> {
    if settings.container_id.trim().is_empty() {
        return Err(MapError::MissingContainer);
    }
    if !is_valid_container_id(&settings.container_id) {
        return Err(MapError::InvalidContainer(settings.container_id.clone()));
    }
    if settings.base_layers.is_empty() {
        return Err(MapError::NoBaseLayers);
    }
    Ok(())
}

/// Assemble the map. The first configured base layer starts active, as does
/// the marker overlay.
pub fn compose_map(markers: Vec<StyledMarker>, settings: &MapSettings) -> Result<MapComposition> {
    validate_settings(settings)?;

    let base_layers = settings
        .base_layers
        .iter()
        .enumerate()
        .map(|(i, layer)| BaseLayer {
            name: layer.name.clone(),
            url_template: layer.url_template.clone(),
            attribution: layer.attribution.clone(),
            active: i == 0,
        })
        .collect();

    debug!(
        "Composing map in #{} with {} markers",
        settings.container_id,
        markers.len()
    );

    Ok(MapComposition {
        title: settings.title.clone(),
        container_id: settings.container_id.clone(),
        view: MapView {
            center: settings.center,
            zoom: settings.zoom,
        },
        base_layers,
        overlay: OverlayLayer {
            name: settings.overlay_name.clone(),
            active: true,
            markers,
        },
        layer_control: LayerControl { collapsed: false },
        legend: build_legend_control(),
    })
}
