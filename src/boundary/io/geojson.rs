use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    boundary::{in_jurisdiction, precinct_number, BoundaryFeature, BoundaryReport, BoundarySet, GeometryKind},
    config::Config,
    error::Error,
    io::geojson::{feature_array, outer_rings},
};

impl BoundarySet {
    /// Build a boundary set from a parsed FeatureCollection.
    ///
    /// A document without features is `DataUnavailable`; a non-empty collection with
    /// nothing inside the configured jurisdiction is `NoMatchingJurisdiction`.
    pub fn from_geojson_value(value: &Value, config: &Config) -> Result<(Self, BoundaryReport), Error> {
        let features = feature_array(value).map_err(|e| Error::unavailable("boundaries", e))?;
        if features.is_empty() {
            return Err(Error::DataUnavailable { what: "boundaries", reason: "feature collection is empty".into() });
        }

        let jurisdiction = config.jurisdiction.as_ref();
        let empty = Map::new();
        let mut report = BoundaryReport { total_features: features.len(), ..Default::default() };
        let mut set = BoundarySet::default();

        for feature in features {
            let properties = feature.get("properties").and_then(Value::as_object).unwrap_or(&empty);
            if !in_jurisdiction(properties, jurisdiction) { continue }
            report.in_jurisdiction += 1;

            let geometry = feature.get("geometry");
            let type_name = geometry.and_then(|g| g.get("type")).and_then(Value::as_str).unwrap_or("");
            let parsed = GeometryKind::from_type_name(type_name)
                .zip(geometry.and_then(|g| g.get("coordinates")))
                .and_then(|(kind, coords)| Some((kind, outer_rings(type_name, coords)?)));
            let Some((kind, rings)) = parsed else {
                debug!("[boundary::geojson] skipping feature with geometry {type_name:?}");
                report.skipped_geometry += 1;
                continue;
            };

            let precinct = precinct_number(properties, &config.precinct_keys);
            if precinct.is_none() {
                debug!("[boundary::geojson] no precinct number in properties {:?}", properties);
                report.unmatchable.push(set.features.len());
            }
            *report.geometry_kinds.entry(type_name.to_string()).or_default() += 1;
            set.features.push(BoundaryFeature { precinct, kind, rings, properties: properties.clone() });
        }

        if report.in_jurisdiction == 0 {
            let jurisdiction = jurisdiction.map(|j| j.value.clone()).unwrap_or_default();
            return Err(Error::NoMatchingJurisdiction { jurisdiction });
        }
        if set.is_empty() {
            return Err(Error::DataUnavailable {
                what: "boundaries",
                reason: "no Polygon or MultiPolygon features in jurisdiction".into(),
            });
        }
        if !report.unmatchable.is_empty() {
            warn!("[boundary::geojson] {} features have no extractable precinct number", report.unmatchable.len());
        }
        debug!("[boundary::geojson] kept {} of {} features", set.len(), report.total_features);

        Ok((set, report))
    }
}
