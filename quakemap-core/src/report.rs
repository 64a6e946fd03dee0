// Output generation for a composed map

use crate::compose::MapComposition;
use crate::config::LEAFLET_VERSION;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputFormat {
    Html,
    Json,
    Text,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(OutputFormat::Html),
            "json" => Some(OutputFormat::Json),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{title}}</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@{{leaflet}}/dist/leaflet.css" />
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    .info.legend { background: white; padding: 6px 8px; border-radius: 5px; box-shadow: 0 0 15px rgba(0, 0, 0, 0.2); line-height: 18px; }
  </style>
</head>
<body>
  <div id="{{container}}" style="height: 100%; width: 100%;"></div>
  <script src="https://unpkg.com/leaflet@{{leaflet}}/dist/leaflet.js"></script>
  <script type="application/json" id="quakemap-data">{{data}}</script>
  <script>
    (function () {
      var data = JSON.parse(document.getElementById("quakemap-data").textContent);

      var baseMaps = {};
      var initialLayers = [];
      data.base_layers.forEach(function (layer) {
        var tiles = L.tileLayer(layer.url_template, { attribution: layer.attribution });
        baseMaps[layer.name] = tiles;
        if (layer.active) { initialLayers.push(tiles); }
      });

      var markers = data.overlay.markers.map(function (m) {
        return L.circleMarker([m.lat, m.lon], {
          radius: m.radius,
          fillColor: m.fill_color,
          color: m.style.color,
          weight: m.style.weight,
          opacity: m.style.opacity,
          fillOpacity: m.style.fill_opacity
        }).bindPopup(m.popup);
      });
      var overlay = L.layerGroup(markers);
      if (data.overlay.active) { initialLayers.push(overlay); }

      var overlayMaps = {};
      overlayMaps[data.overlay.name] = overlay;

      var map = L.map(data.container_id, {
        center: data.view.center,
        zoom: data.view.zoom,
        layers: initialLayers
      });

      L.control.layers(baseMaps, overlayMaps, { collapsed: data.layer_control.collapsed }).addTo(map);

      var legend = L.control({ position: data.legend.position });
      legend.onAdd = function () {
        var holder = L.DomUtil.create("div");
        holder.innerHTML = data.legend.html;
        return holder.firstChild;
      };
      legend.addTo(map);
    })();
  </script>
</body>
</html>
"#;

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize for embedding inside a `<script>` element. `</` is written as
/// `<\/` so popup markup cannot close the element early.
pub fn embed_json(composition: &MapComposition) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(composition)?.replace("</", "<\\/"))
}

/// Substitute `{{key}}` placeholders in one pass over `template`. Values are
/// copied verbatim and never rescanned; unknown keys are left in place.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn generate_html_page(composition: &MapComposition) -> Result<String, serde_json::Error> {
    let data = embed_json(composition)?;
    let title = escape_html(&composition.title);
    let container = escape_html(&composition.container_id);
    Ok(fill_template(
        PAGE_TEMPLATE,
        &[
            ("title", &title),
            ("leaflet", LEAFLET_VERSION),
            ("container", &container),
            ("data", &data),
        ],
    ))
}

pub fn generate_json_report(composition: &MapComposition) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "metadata": {
            "generator": "Quakemap",
            "version": env!("CARGO_PKG_VERSION"),
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "format": "json",
            "marker_count": composition.marker_count()
        },
        "map": composition
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_text_summary(composition: &MapComposition) -> String {
    let mut report = String::new();

    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                 EARTHQUAKE MAP SUMMARY\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("Markers:      {}\n", composition.marker_count()));
    report.push_str(&format!(
        "Center:       {}, {}\n",
        composition.view.center[0], composition.view.center[1]
    ));
    report.push_str(&format!("Zoom:         {}\n", composition.view.zoom));
    if let Some(layer) = composition.active_base_layer() {
        report.push_str(&format!("Base layer:   {}\n", layer.name));
    }

    let radii = composition.markers().iter().map(|m| m.radius);
    if let (Some(min), Some(max)) = (
        radii.clone().reduce(f64::min),
        radii.reduce(f64::max),
    ) {
        report.push_str(&format!("Radius range: {} - {} px\n", min, max));
    }
    report.push('\n');

    report.push_str("# Depth buckets (km):\n");
    for row in &composition.legend.rows {
        let count = composition
            .markers()
            .iter()
            .filter(|m| m.fill_color == row.color)
            .count();
        report.push_str(&format!(
            "  {:<8} {}  {}\n",
            row.plain_label(),
            row.color,
            count
        ));
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
