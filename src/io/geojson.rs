//! GeoJSON reading operations.
//!
//! Boundary collections are walked as untyped `serde_json::Value`s: property bags vary
//! between publishers and only a small part of each feature is needed.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{Coord, LineString};
use serde_json::Value;

/// Reads a GeoJSON document from `path`.
pub(crate) fn read_geojson(path: &Path) -> Result<Value> {
    let file = File::open(path)
        .with_context(|| format!("[io::geojson] Failed to open GeoJSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::geojson] Failed to parse GeoJSON from {}", path.display()))
}

/// Reads a GeoJSON document from a string.
pub(crate) fn read_geojson_str(text: &str) -> Result<Value> {
    serde_json::from_str(text).context("[io::geojson] Failed to parse GeoJSON string")
}

/// The `features` array of a FeatureCollection.
pub(crate) fn feature_array(value: &Value) -> Result<&[Value]> {
    value.get("features")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| anyhow!("[io::geojson] Document is not a FeatureCollection (no `features` array)"))
}

/// Outer rings of a `Polygon` (ring 0) or `MultiPolygon` (ring 0 of each member).
/// Interior rings are not read. Returns None for any other geometry type.
pub(crate) fn outer_rings(geometry_type: &str, coordinates: &Value) -> Option<Vec<LineString<f64>>> {
    let outer = |polygon: &Value| polygon.as_array()
        .and_then(|rings| rings.first())
        .and_then(Value::as_array)
        .map(|ring| parse_ring_coords(ring));

    match geometry_type {
        "Polygon" => Some(outer(coordinates).into_iter().collect()),
        "MultiPolygon" => Some(coordinates.as_array()
            .map(|polygons| polygons.iter().filter_map(outer).collect())
            .unwrap_or_default()),
        _ => None,
    }
}

/// Parse a ring from GeoJSON coordinates `[[x, y], [x, y], ...]`.
/// Non-numeric entries become NaN so coordinate validation can drop them later;
/// the ring is not closed or otherwise repaired.
pub(crate) fn parse_ring_coords(coords: &[Value]) -> LineString<f64> {
    let number = |v: Option<&Value>| v.and_then(Value::as_f64).unwrap_or(f64::NAN);
    LineString(coords.iter()
        .map(|pair| {
            let pair = pair.as_array().map(Vec::as_slice).unwrap_or_default();
            Coord { x: number(pair.first()), y: number(pair.get(1)) }
        })
        .collect())
}
