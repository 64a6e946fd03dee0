use quakemap::commands::command_argument_builder;
use quakemap::handlers::*;
use quakemap_core::compose::compose_map;
use quakemap_core::config::MapSettings;
use quakemap_core::encode::encode_features;
use quakemap_core::report::OutputFormat;
use quakemap_feed::Feature;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const FEED: &str = r#"{"features": [
    {"properties": {"place": "10km N of Testville", "time": 1700000000000, "mag": 5.0},
     "geometry": {"coordinates": [-100, 40, 12]}}
]}"#;

#[test]
fn test_hex_to_rgb() {
    assert_eq!(hex_to_rgb("#A3F600"), Some((0xA3, 0xF6, 0x00)));
    assert_eq!(hex_to_rgb("#FF5F65"), Some((255, 95, 101)));
    assert_eq!(hex_to_rgb("#000"), Some((0, 0, 0)));
    assert_eq!(hex_to_rgb("#fff"), Some((255, 255, 255)));
}

#[test]
fn test_hex_to_rgb_invalid() {
    assert_eq!(hex_to_rgb("A3F600"), None);
    assert_eq!(hex_to_rgb("#GGGGGG"), None);
    assert_eq!(hex_to_rgb("#12345"), None);
}

#[test]
fn test_resolve_output_path_plain() {
    let path = resolve_output_path(Path::new("out/map.html"));
    assert_eq!(path, PathBuf::from("out/map.html"));
}

#[test]
fn test_resolve_output_path_expands_tilde() {
    let path = resolve_output_path(Path::new("~/map.html"));
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.ends_with("map.html"));
}

#[test]
fn test_render_output_formats() {
    let markers = encode_features(vec![Feature::new("X", 0, 4.0, [1.0, 2.0, 3.0])]);
    let composition = compose_map(markers, &MapSettings::default()).unwrap();

    let html = render_output(&composition, OutputFormat::Html).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));

    let json = render_output(&composition, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["metadata"]["marker_count"], 1);
    assert_eq!(value["map"]["container_id"], "map");
    assert_eq!(value["map"]["overlay"]["markers"][0]["radius"], 16.0);

    let text = render_output(&composition, OutputFormat::Text).unwrap();
    assert!(text.contains("Markers:      1"));
}

#[test]
fn test_command_defaults() {
    let matches = command_argument_builder()
        .try_get_matches_from(["quakemap", "render"])
        .unwrap();
    let (name, render) = matches.subcommand().unwrap();

    assert_eq!(name, "render");
    assert_eq!(render.get_one::<String>("format").unwrap(), "html");
    assert_eq!(render.get_one::<String>("container").unwrap(), "map");
    assert!(render.get_one::<u64>("timeout").is_none());
    assert!(render.get_one::<PathBuf>("output").is_none());
    assert_eq!(
        render.get_one::<url::Url>("url").unwrap().as_str(),
        quakemap_feed::DEFAULT_FEED_URL
    );
}

#[test]
fn test_command_rejects_unknown_format() {
    let result = command_argument_builder().try_get_matches_from([
        "quakemap", "render", "--format", "pdf",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_command_rejects_invalid_url() {
    let result = command_argument_builder().try_get_matches_from([
        "quakemap", "render", "--url", "not a url",
    ]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_handle_render_writes_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("quakes.html");
    let feed_url = format!("{}/feed.geojson", server.uri());

    let matches = command_argument_builder()
        .try_get_matches_from([
            "quakemap",
            "render",
            "--url",
            feed_url.as_str(),
            "--output",
            output.to_str().unwrap(),
            "--container",
            "quake-map",
        ])
        .unwrap();
    let (_, render) = matches.subcommand().unwrap();

    handle_render(render, true).await.unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("<div id=\"quake-map\" style=\"height: 100%; width: 100%;\"></div>"));
    assert!(written.contains("10km N of Testville"));
    assert!(written.contains("#DCFF5E"));
}

#[tokio::test]
async fn test_handle_render_reports_feed_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.geojson"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed.geojson", server.uri());
    let matches = command_argument_builder()
        .try_get_matches_from(["quakemap", "render", "--url", feed_url.as_str()])
        .unwrap();
    let (_, render) = matches.subcommand().unwrap();

    let err = handle_render(render, true).await.unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("failed to render map"));
    assert!(message.contains("404"));
}

#[tokio::test]
async fn test_handle_render_rejects_bad_container_without_fetching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed.geojson"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
        .expect(0)
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed.geojson", server.uri());
    let matches = command_argument_builder()
        .try_get_matches_from([
            "quakemap",
            "render",
            "--url",
            feed_url.as_str(),
            "--container",
            "quake map",
        ])
        .unwrap();
    let (_, render) = matches.subcommand().unwrap();

    let err = handle_render(render, true).await.unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("'quake map'"));
}
