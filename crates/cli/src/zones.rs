//! Zone documents: labelled, coloured polygons for the world map.
//!
//! Output shape (keys sorted, 4-space indent):
//! `{"mapIndex": 0, "zones": [{"color": "yellow", "label": "...", "polygon": [[x, y], ...]}]}`

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use zonemerge::{api::net_area, detect_intersections, rects_to_polygons, Polygon, Rect};

use crate::guardlines::Section;

/// Conversion settings.
#[derive(Clone, Debug)]
pub struct ConvertCfg {
    pub map_index: i64,
    pub color: String,
    /// Log overlapping rectangles per section (diagnostic only).
    pub warn_intersections: bool,
}

impl Default for ConvertCfg {
    fn default() -> Self {
        Self {
            map_index: 0,
            color: "yellow".to_string(),
            warn_intersections: false,
        }
    }
}

// Field order is the serialized key order; keep it alphabetical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub color: String,
    pub label: String,
    pub polygon: Vec<[i64; 2]>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ZoneFile {
    #[serde(rename = "mapIndex")]
    pub map_index: i64,
    pub zones: Vec<Zone>,
}

fn zone(poly: Polygon, label: &str, color: &str) -> Zone {
    Zone {
        color: color.to_string(),
        label: label.to_string(),
        polygon: poly.into_points().into_iter().map(|p| [p.x, p.y]).collect(),
    }
}

fn describe(pairs: &[(Rect, Rect)]) -> Vec<String> {
    pairs
        .iter()
        .map(|(a, b)| {
            format!(
                "({},{},{},{})x({},{},{},{})",
                a.x(),
                a.y(),
                a.width(),
                a.height(),
                b.x(),
                b.y(),
                b.width(),
                b.height()
            )
        })
        .collect()
}

/// Merge every section and collect one zone per polygon, sections in order.
pub fn build_zones(sections: &[Section], cfg: &ConvertCfg) -> Result<ZoneFile> {
    let mut zones = Vec::new();
    for section in sections {
        let label = section.label.as_str();
        if cfg.warn_intersections {
            let pairs = detect_intersections(&section.rects);
            if !pairs.is_empty() {
                tracing::warn!(
                    label,
                    count = pairs.len(),
                    pairs = ?describe(&pairs),
                    "intersections found"
                );
            }
        }
        let polys = rects_to_polygons(&section.rects)
            .with_context(|| format!("merging section {label:?}"))?;
        tracing::debug!(
            label,
            rects = section.rects.len(),
            polygons = polys.len(),
            area = net_area(&polys),
            "section"
        );
        zones.extend(polys.into_iter().map(|p| zone(p, label, &cfg.color)));
    }
    Ok(ZoneFile {
        map_index: cfg.map_index,
        zones,
    })
}

/// Overlapping pairs per section, for the `intersections` command.
pub fn intersection_report(sections: &[Section]) -> serde_json::Value {
    let per_section: Vec<serde_json::Value> = sections
        .iter()
        .filter_map(|s| {
            let pairs = detect_intersections(&s.rects);
            if pairs.is_empty() {
                return None;
            }
            let as_json: Vec<[[i64; 4]; 2]> = pairs
                .iter()
                .map(|(a, b)| {
                    [
                        [a.x(), a.y(), a.width(), a.height()],
                        [b.x(), b.y(), b.width(), b.height()],
                    ]
                })
                .collect();
            Some(serde_json::json!({ "label": s.label, "pairs": as_json }))
        })
        .collect();
    serde_json::Value::Array(per_section)
}

/// Pretty JSON with 4-space indentation and a trailing newline.
pub fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut *out, fmt);
    value.serialize(&mut ser).context("serializing JSON")?;
    out.write_all(b"\n")?;
    Ok(())
}
