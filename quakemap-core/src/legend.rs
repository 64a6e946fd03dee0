// Depth legend

use crate::encode::{
    DEPTH_COLOR_10_30, DEPTH_COLOR_30_50, DEPTH_COLOR_50_70, DEPTH_COLOR_70_90,
    DEPTH_COLOR_90_PLUS, DEPTH_COLOR_SHALLOW,
};
use serde::{Deserialize, Serialize};

/// Lower bound of a depth bucket (km) and the color used for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendEntry {
    pub threshold: i32,
    pub color: &'static str,
}

/// Ascending thresholds, colors aligned with `color_for_depth`.
pub const LEGEND_ENTRIES: [LegendEntry; 6] = [
    LegendEntry { threshold: -10, color: DEPTH_COLOR_SHALLOW },
    LegendEntry { threshold: 10, color: DEPTH_COLOR_10_30 },
    LegendEntry { threshold: 30, color: DEPTH_COLOR_30_50 },
    LegendEntry { threshold: 50, color: DEPTH_COLOR_50_70 },
    LegendEntry { threshold: 70, color: DEPTH_COLOR_70_90 },
    LegendEntry { threshold: 90, color: DEPTH_COLOR_90_PLUS },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendRow {
    pub color: String,
    pub lower: i32,
    /// `None` for the open-ended last row
    pub upper: Option<i32>,
}

impl LegendRow {
    /// `10&ndash;30` or `90+`
    pub fn html_label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}&ndash;{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }

    /// Same as [`LegendRow::html_label`] with a literal en dash.
    pub fn plain_label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}\u{2013}{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

pub fn is_strictly_increasing(entries: &[LegendEntry]) -> bool {
    entries.windows(2).all(|pair| pair[0].threshold < pair[1].threshold)
}

/// One row per entry; each row's upper bound is the next entry's threshold.
pub fn legend_rows(entries: &[LegendEntry]) -> Vec<LegendRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| LegendRow {
            color: entry.color.to_string(),
            lower: entry.threshold,
            upper: entries.get(i + 1).map(|next| next.threshold),
        })
        .collect()
}

pub fn render_legend_html(rows: &[LegendRow]) -> String {
    let mut html = String::from("<div class=\"info legend\">");

    for row in rows {
        html.push_str(&format!(
            "<div style=\"display: flex; align-items: center\"><i style=\"width: 10px; height: 10px; display: block; margin-right: 4px; background-color: {}\"></i> {}</div>",
            row.color,
            row.html_label()
        ));
    }

    html.push_str("</div>");
    html
}
