use geo::LineString;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GeometryKind {
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Polygon" => Some(GeometryKind::Polygon),
            "MultiPolygon" => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }
}

/// One precinct boundary from a boundary collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// `None` when no property yields a positive integer: the feature is unmatchable.
    pub precinct: Option<u32>,
    pub kind: GeometryKind,
    /// Outer rings only, as `(lng, lat)` coordinates, unvalidated.
    /// One ring for a Polygon, one per member for a MultiPolygon.
    pub rings: Vec<LineString<f64>>,
    pub properties: Map<String, Value>,
}

/// Extract a precinct number from a property bag, trying `keys` in order.
///
/// The first key whose value yields a positive integer wins: numbers are read directly
/// (truncated), strings have every non-digit removed (`"W306"` -> 306). Empty, zero,
/// null and boolean values are skipped.
pub fn precinct_number(properties: &Map<String, Value>, keys: &[String]) -> Option<u32> {
    keys.iter().find_map(|key| match properties.get(key)? {
        Value::Number(n) => n.as_f64()
            .filter(|v| v.is_finite() && *v >= 1.0 && *v <= u32::MAX as f64)
            .map(|v| v.trunc() as u32),
        Value::String(s) => {
            let digits: String = s.chars().filter(char::is_ascii_digit).collect();
            digits.parse::<u32>().ok().filter(|n| *n > 0)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::config::Config;

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn letter_prefixed_id_resolves() {
        let keys = Config::default().precinct_keys;
        assert_eq!(precinct_number(&props(json!({ "PRECINCTID": "W306" })), &keys), Some(306));
    }

    #[test]
    fn earlier_key_wins_and_falsy_values_are_skipped() {
        let keys = Config::default().precinct_keys;
        let p = props(json!({ "PRECINCT": 0, "precinct": "", "PRECINCTID": "W310", "id": 7 }));
        assert_eq!(precinct_number(&p, &keys), Some(310));

        let p = props(json!({ "PRECINCT": 412.0, "PRECINCTID": "W306" }));
        assert_eq!(precinct_number(&p, &keys), Some(412));
    }

    #[test]
    fn no_usable_key_is_unmatchable() {
        let keys = Config::default().precinct_keys;
        assert_eq!(precinct_number(&props(json!({ "NAME": "Unincorporated" })), &keys), None);
        assert_eq!(precinct_number(&props(json!({ "PRECINCT": -4, "COUNTY": "W" })), &keys), None);
        assert_eq!(precinct_number(&props(json!({ "PRECINCT": null, "id": true })), &keys), None);
    }

    #[test]
    fn geometry_kind_names() {
        assert_eq!(GeometryKind::from_type_name("MultiPolygon"), Some(GeometryKind::MultiPolygon));
        assert_eq!(GeometryKind::from_type_name("Point"), None);
    }
}
