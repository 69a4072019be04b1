//! Ingest and render configuration.
//!
//! Every field has a default describing the Washington County (OR) school-district
//! dataset, so an empty JSON object is a valid configuration.

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: Canvas,
    /// Approximate extent of the jurisdiction; coordinates outside are invalid.
    pub geo_bounds: GeoBounds,
    /// Fraction of each axis span added on both sides of the bounding window.
    pub bounds_buffer: f64,
    /// `None` keeps every feature of the boundary collection.
    pub jurisdiction: Option<Jurisdiction>,
    /// Property keys tried, in order, when extracting a precinct number.
    pub precinct_keys: Vec<String>,
    pub seats: SeatTable,
    pub candidate_colors: BTreeMap<String, String>,
    pub fallback_color: String,
    pub zoom: ZoomConfig,
    pub pan_step: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            geo_bounds: GeoBounds::default(),
            bounds_buffer: 0.05,
            jurisdiction: Some(Jurisdiction::default()),
            precinct_keys: [
                "PRECINCT", "precinct", "PRECINCTID", "precinct_id", "prec_id", "name", "id",
                "precinct_no", "prec_no", "number", "NAME", "ID", "PRECINCT_NO", "PREC_NO", "NUMBER",
            ].iter().map(|s| s.to_string()).collect(),
            seats: SeatTable::default(),
            candidate_colors: default_candidate_colors(),
            fallback_color: "#6B7280".to_string(),
            zoom: ZoomConfig::default(),
            pan_step: 50.0,
        }
    }
}

impl Config {
    /// Read a configuration from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("[config] Failed to read {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("[config] Invalid configuration in {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("[config] Failed to parse configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the view controller cannot work with.
    pub fn validate(&self) -> Result<()> {
        self.zoom.validate()?;
        if !self.pan_step.is_finite() {
            bail!("[config] pan_step must be finite, got {}", self.pan_step);
        }
        Ok(())
    }
}

/// Output canvas, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self { width: 600.0, height: 400.0, padding: 20.0 }
    }
}

impl Canvas {
    #[inline]
    pub fn center(&self) -> (f64, f64) { (self.width / 2.0, self.height / 2.0) }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoBounds {
    pub min_lng: f64,
    pub max_lng: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self { min_lng: -123.5, max_lng: -122.3, min_lat: 45.2, max_lat: 45.8 }
    }
}

impl GeoBounds {
    /// A coordinate is valid when both values are finite and inside the box (inclusive).
    #[inline]
    pub fn contains(&self, lng: f64, lat: f64) -> bool {
        lng.is_finite() && lat.is_finite()
            && lng >= self.min_lng && lng <= self.max_lng
            && lat >= self.min_lat && lat <= self.max_lat
    }
}

/// Jurisdiction membership test: any of `keys` holding `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Jurisdiction {
    pub keys: Vec<String>,
    pub value: String,
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self {
            keys: ["COUNTY", "county", "County", "COUNTY_CODE"].iter().map(|s| s.to_string()).collect(),
            value: "W".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatMapping {
    pub position: String,
    pub seat: String,
}

/// Position label -> canonical seat label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatTable(pub Vec<SeatMapping>);

impl Default for SeatTable {
    fn default() -> Self {
        let mut mappings = Vec::new();
        for n in [1, 2, 4, 6] {
            let seat = format!("Seat {n}");
            mappings.push(SeatMapping { position: format!("Position {n}"), seat: seat.clone() });
            mappings.push(SeatMapping {
                position: format!("Hillsboro School District 1J, Director, Position {n}"),
                seat,
            });
        }
        Self(mappings)
    }
}

impl SeatTable {
    /// Exact lookup, ignoring surrounding whitespace and ASCII case.
    pub fn lookup(&self, position: &str) -> Option<&str> {
        let position = position.trim();
        self.0.iter()
            .find(|m| m.position.trim().eq_ignore_ascii_case(position))
            .map(|m| m.seat.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub factor: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { factor: 1.5, min: 0.5, max: 8.0 }
    }
}

impl ZoomConfig {
    pub fn validate(&self) -> Result<()> {
        let Self { factor, min, max } = *self;
        if !(min.is_finite() && max.is_finite() && factor.is_finite()) {
            bail!("[config] zoom settings must be finite (factor {factor}, min {min}, max {max})");
        }
        if min <= 0.0 || min > max {
            bail!("[config] zoom range must satisfy 0 < min <= max, got [{min}, {max}]");
        }
        if factor <= 1.0 {
            bail!("[config] zoom factor must be greater than 1, got {factor}");
        }
        Ok(())
    }
}

fn default_candidate_colors() -> BTreeMap<String, String> {
    const RED: &str = "#DC2626";
    const BLUE: &str = "#2563EB";
    [
        ("Sidney S Thompson", RED),
        ("Sidney S. Thompson", RED),
        ("Sidney S Thomason", RED),
        ("Maureen Barnhart", RED),
        ("Rebecca Descombes", RED),
        ("Rebecca Denison", RED),
        ("Yesenia Hardin-Mercado", BLUE),
        ("Yessica Hardin-Mercado", BLUE),
        ("Mark Watson", BLUE),
        ("Nancy Thomas", BLUE),
        ("Katie Rhyne", BLUE),
    ].iter().map(|(name, color)| (name.to_string(), color.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = Config::from_json_str(r#"{
            "canvas": { "width": 1200 },
            "jurisdiction": null,
            "seats": [{ "position": "Zone 3", "seat": "Seat 3" }]
        }"#).unwrap();
        assert_eq!(config.canvas.width, 1200.0);
        assert_eq!(config.canvas.height, 400.0);
        assert!(config.jurisdiction.is_none());
        assert_eq!(config.seats.lookup("zone 3"), Some("Seat 3"));
        assert_eq!(config.seats.lookup("Position 1"), None);
    }

    #[test]
    fn unusable_zoom_settings_are_rejected() {
        for json in [
            r#"{"zoom":{"min":10.0}}"#,
            r#"{"zoom":{"min":0.0}}"#,
            r#"{"zoom":{"min":-1.0,"max":2.0}}"#,
            r#"{"zoom":{"factor":1.0}}"#,
            r#"{"zoom":{"factor":0.5}}"#,
        ] {
            let err = Config::from_json_str(json).unwrap_err();
            assert!(err.to_string().contains("[config] zoom"), "{json}: {err}");
        }
        assert!(Config::from_json_str(r#"{"zoom":{"min":2.0,"max":2.0,"factor":1.1}}"#).is_ok());
        assert!(Config::default().validate().is_ok());
        assert!(ZoomConfig { max: f64::INFINITY, ..ZoomConfig::default() }.validate().is_err());
        assert!(Config { pan_step: f64::NAN, ..Config::default() }.validate().is_err());
    }

    #[test]
    fn seat_lookup_is_exact_not_substring() {
        let seats = SeatTable::default();
        assert_eq!(seats.lookup("  Position 4 "), Some("Seat 4"));
        assert_eq!(seats.lookup("Position 3"), None);
        assert_eq!(seats.lookup("Position 12"), None);
    }

    #[test]
    fn geo_bounds_reject_non_finite() {
        let bounds = GeoBounds::default();
        assert!(bounds.contains(-122.9, 45.5));
        assert!(bounds.contains(-123.5, 45.2));
        assert!(!bounds.contains(f64::NAN, 45.5));
        assert!(!bounds.contains(-122.9, f64::INFINITY));
        assert!(!bounds.contains(-120.0, 45.5));
    }
}
