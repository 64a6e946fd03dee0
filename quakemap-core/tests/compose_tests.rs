// Tests for map composition

use quakemap_core::compose::{
    ControlPosition, compose_map, is_valid_container_id, validate_settings,
};
use quakemap_core::config::{
    MAP_CENTER, MAP_ZOOM, MapSettings, STREET_ATTRIBUTION, STREET_TILE_URL, TOPO_TILE_URL,
};
use quakemap_core::encode::encode_features;
use quakemap_core::error::MapError;
use quakemap_feed::Feature;

fn sample_markers() -> Vec<quakemap_core::encode::StyledMarker> {
    encode_features(vec![
        Feature::new("A", 1700000000000, 5.0, [-100.0, 40.0, 12.0]),
        Feature::new("B", 1700000100000, 4.6, [120.0, -3.0, 150.0]),
    ])
}

#[test]
fn test_compose_map_defaults() {
    let composition = compose_map(sample_markers(), &MapSettings::default()).unwrap();

    assert_eq!(composition.container_id, "map");
    assert_eq!(composition.view.center, MAP_CENTER);
    assert_eq!(composition.view.center, [37.09, -95.71]);
    assert_eq!(composition.view.zoom, MAP_ZOOM);
    assert_eq!(composition.marker_count(), 2);
}

#[test]
fn test_compose_map_base_layers() {
    let composition = compose_map(sample_markers(), &MapSettings::default()).unwrap();

    assert_eq!(composition.base_layers.len(), 2);
    assert_eq!(composition.base_layers[0].name, "Street Map");
    assert_eq!(composition.base_layers[0].url_template, STREET_TILE_URL);
    assert_eq!(composition.base_layers[0].attribution, STREET_ATTRIBUTION);
    assert_eq!(composition.base_layers[1].name, "Topographic Map");
    assert_eq!(composition.base_layers[1].url_template, TOPO_TILE_URL);

    // exactly one base layer active, and it's the street layer
    let active: Vec<_> = composition.base_layers.iter().filter(|l| l.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(composition.active_base_layer().unwrap().name, "Street Map");
}

#[test]
fn test_compose_map_overlay_and_controls() {
    let composition = compose_map(sample_markers(), &MapSettings::default()).unwrap();

    assert_eq!(composition.overlay.name, "Earthquakes");
    assert!(composition.overlay.active);
    assert!(!composition.layer_control.collapsed);
    assert_eq!(composition.legend.position, ControlPosition::BottomRight);
    assert_eq!(composition.legend.rows.len(), 6);
    assert!(composition.legend.html.contains("90+"));
}

#[test]
fn test_compose_map_keeps_marker_order() {
    let markers = sample_markers();
    let composition = compose_map(markers.clone(), &MapSettings::default()).unwrap();
    assert_eq!(composition.markers(), markers.as_slice());
}

#[test]
fn test_compose_map_with_no_markers() {
    let composition = compose_map(Vec::new(), &MapSettings::default()).unwrap();
    assert_eq!(composition.marker_count(), 0);
    assert_eq!(composition.legend.rows.len(), 6);
}

#[test]
fn test_compose_map_custom_container() {
    let settings = MapSettings::default().with_container_id("quake-view");
    let composition = compose_map(sample_markers(), &settings).unwrap();
    assert_eq!(composition.container_id, "quake-view");
}

#[test]
fn test_compose_map_rejects_empty_container() {
    let settings = MapSettings::default().with_container_id("  ");
    let result = compose_map(sample_markers(), &settings);
    assert!(matches!(result, Err(MapError::MissingContainer)));
}

#[test]
fn test_compose_map_rejects_container_with_space() {
    let settings = MapSettings::default().with_container_id("quake map");
    let result = compose_map(sample_markers(), &settings);
    assert!(matches!(result, Err(MapError::InvalidContainer(id)) if id == "quake map"));
}

#[test]
fn test_compose_map_rejects_template_placeholder_container() {
    let settings = MapSettings::default().with_container_id("{{data}}");
    let result = compose_map(sample_markers(), &settings);
    assert!(matches!(result, Err(MapError::InvalidContainer(id)) if id == "{{data}}"));
}

#[test]
fn test_container_id_charset() {
    assert!(is_valid_container_id("map"));
    assert!(is_valid_container_id("quake-map_2"));
    assert!(!is_valid_container_id(""));
    assert!(!is_valid_container_id("quake map"));
    assert!(!is_valid_container_id("map\"><script>"));
    assert!(!is_valid_container_id("m{a}p"));
    assert!(!is_valid_container_id("#map"));
    assert!(!is_valid_container_id("карта"));
}

#[test]
fn test_validate_settings_defaults_ok() {
    assert!(validate_settings(&MapSettings::default()).is_ok());
}

#[test]
fn test_compose_map_rejects_missing_base_layers() {
    let mut settings = MapSettings::default();
    settings.base_layers.clear();
    let result = compose_map(sample_markers(), &settings);
    assert!(matches!(result, Err(MapError::NoBaseLayers)));
}

#[test]
fn test_control_position_serializes_lowercase() {
    let json = serde_json::to_string(&ControlPosition::BottomRight).unwrap();
    assert_eq!(json, "\"bottomright\"");
}
