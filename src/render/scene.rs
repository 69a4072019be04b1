use std::collections::BTreeSet;

use geo::MultiPolygon;
use log::debug;
use serde::Serialize;

use crate::{
    boundary::BoundarySet,
    config::Config,
    election::RaceResult,
    error::Error,
    view::ViewState,
};
use super::{
    bounding_window,
    color::{precinct_color, BACKGROUND},
    path::{centroid, drawable_rings, ring_to_path},
    ScreenTransform,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SceneKind {
    Geographic,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Stroke {
    Selected,
    Normal,
}

impl Stroke {
    pub fn color(self) -> &'static str {
        match self {
            Stroke::Selected => "#1f2937",
            Stroke::Normal => "#9ca3af",
        }
    }

    pub fn width(self) -> f64 {
        match self {
            Stroke::Selected => 2.0,
            Stroke::Normal => 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub sublabel: Option<String>,
    /// Drawn de-emphasized: the precinct has no result in the race.
    pub muted: bool,
}

/// One drawable precinct (or background feature).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub precinct: Option<u32>,
    /// Absolute screen-space path data, one closed subpath per ring.
    pub path: String,
    pub fill: String,
    pub stroke: Stroke,
    pub label: Option<Label>,
    pub has_data: bool,
    /// Screen-space outline matching `path`, used for hit testing.
    #[serde(skip)]
    pub outline: MultiPolygon<f64>,
}

/// Declarative render output, consumed by any drawing surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub kind: SceneKind,
    /// Paint order.
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn shape(&self, precinct: u32) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.precinct == Some(precinct))
    }
}

/// How boundary features and result rows joined for one render.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchReport {
    /// Result precincts drawn with a boundary.
    pub matched: Vec<u32>,
    /// Result precincts with no boundary feature, ascending.
    pub missing_geometry: Vec<u32>,
    /// Boundary precincts with no result in the race, ascending.
    pub without_results: Vec<u32>,
    /// Features with no precinct number.
    pub unmatchable: usize,
    /// Numbered features with no ring left after coordinate validation.
    pub undrawable: Vec<u32>,
}

/// Project every boundary feature for `race` under `view`.
///
/// The bounding window comes only from features with results; features without
/// results are drawn as background. Fails with `InvalidGeometry` before producing
/// any shape if no matched coordinate is valid.
pub fn render_geographic(
    boundaries: &BoundarySet,
    race: &RaceResult,
    view: &ViewState,
    config: &Config,
) -> Result<(Scene, MatchReport), Error> {
    let window = bounding_window(boundaries, race, &config.geo_bounds, config.bounds_buffer)?;
    let transform = ScreenTransform::new(window, config.canvas, view.zoom, view.pan);

    let mut report = MatchReport::default();
    let mut matched = BTreeSet::new();
    let mut without_results = BTreeSet::new();
    let mut shapes = Vec::with_capacity(boundaries.len());

    for feature in &boundaries.features {
        let result = feature.precinct.and_then(|p| race.get(p));
        match (feature.precinct, result) {
            (None, _) => report.unmatchable += 1,
            (Some(p), None) => { without_results.insert(p); }
            (Some(p), Some(_)) => { matched.insert(p); }
        }

        let rings = drawable_rings(&feature.rings, &config.geo_bounds);
        let mut path = String::new();
        let outline: Vec<_> = rings.iter()
            .filter_map(|ring| ring_to_path(ring, &transform, &mut path))
            .collect();
        if path.is_empty() {
            if let Some(p) = feature.precinct { report.undrawable.push(p) }
            continue;
        }

        let fill = match result {
            Some(_) => precinct_color(result, view.mode, config),
            None => BACKGROUND.to_string(),
        };
        let stroke = match (view.selected, result) {
            (Some(selected), Some(r)) if selected == r.precinct_number => Stroke::Selected,
            _ => Stroke::Normal,
        };
        let label = feature.precinct.zip(rings.first().and_then(|ring| centroid(ring)))
            .map(|(p, c)| (p, transform.project(&c)))
            .filter(|(_, (x, y))| x.is_finite() && y.is_finite())
            .map(|(p, (x, y))| Label { x, y, text: p.to_string(), sublabel: None, muted: result.is_none() });

        shapes.push(Shape {
            precinct: feature.precinct,
            path,
            fill,
            stroke,
            label,
            has_data: result.is_some(),
            outline: MultiPolygon(outline),
        });
    }

    report.missing_geometry = race.precinct_numbers().filter(|p| !matched.contains(p)).collect();
    report.matched = matched.into_iter().collect();
    report.without_results = without_results.into_iter().collect();
    if !report.missing_geometry.is_empty() {
        debug!("[render::scene] {} result precincts have no boundary: {:?}",
            report.missing_geometry.len(), report.missing_geometry);
    }
    debug!("[render::scene] {} shapes, {} matched of {} result precincts",
        shapes.len(), report.matched.len(), race.len());

    let scene = Scene { width: config.canvas.width, height: config.canvas.height, kind: SceneKind::Geographic, shapes };
    Ok((scene, report))
}

#[cfg(test)]
mod tests {
    use geo::LineString;
    use serde_json::Map;

    use super::*;
    use crate::{
        boundary::{BoundaryFeature, GeometryKind},
        election::{CandidateVotes, PrecinctResult},
        view::ViewMode,
    };

    fn square(lng: f64, lat: f64) -> LineString<f64> {
        LineString::from(vec![(lng, lat), (lng + 0.02, lat), (lng + 0.02, lat + 0.02), (lng, lat + 0.02), (lng, lat)])
    }

    fn feature(precinct: Option<u32>, rings: Vec<LineString<f64>>) -> BoundaryFeature {
        let kind = if rings.len() > 1 { GeometryKind::MultiPolygon } else { GeometryKind::Polygon };
        BoundaryFeature { precinct, kind, rings, properties: Map::new() }
    }

    fn race() -> RaceResult {
        let mut race = RaceResult::new("Seat 2");
        for (p, a, b) in [(303, 10, 20), (304, 30, 5), (399, 1, 1)] {
            race.insert(PrecinctResult {
                precinct_number: p,
                ballots_cast: 40,
                registered_voters: 100,
                total_votes: a + b,
                candidates: vec![
                    CandidateVotes { name: "Mark Watson".into(), votes: a, percentage: 0.0 },
                    CandidateVotes { name: "Maureen Barnhart".into(), votes: b, percentage: 0.0 },
                ],
            });
        }
        race
    }

    fn boundaries() -> BoundarySet {
        BoundarySet { features: vec![
            feature(Some(303), vec![square(-123.0, 45.4)]),
            feature(Some(304), vec![square(-122.9, 45.4)]),
            feature(Some(500), vec![square(-122.8, 45.4)]),
            feature(None, vec![square(-122.7, 45.4)]),
        ]}
    }

    #[test]
    fn colors_labels_and_report() {
        let view = ViewState { selected: Some(304), ..ViewState::default() };
        let (scene, report) = render_geographic(&boundaries(), &race(), &view, &Config::default()).unwrap();

        assert_eq!(scene.kind, SceneKind::Geographic);
        assert_eq!(scene.shapes.len(), 4);

        let s303 = scene.shape(303).unwrap();
        assert_eq!(s303.fill, "#DC2626");
        assert_eq!(s303.stroke, Stroke::Normal);
        assert!(s303.has_data);
        assert!(!s303.label.as_ref().unwrap().muted);

        let s304 = scene.shape(304).unwrap();
        assert_eq!(s304.fill, "#2563EB");
        assert_eq!(s304.stroke, Stroke::Selected);

        let s500 = scene.shape(500).unwrap();
        assert_eq!(s500.fill, BACKGROUND);
        assert!(!s500.has_data);
        assert!(s500.label.as_ref().unwrap().muted);

        let unmatchable = &scene.shapes[3];
        assert_eq!(unmatchable.precinct, None);
        assert_eq!(unmatchable.fill, BACKGROUND);
        assert!(unmatchable.label.is_none());

        assert_eq!(report.matched, vec![303, 304]);
        assert_eq!(report.missing_geometry, vec![399]);
        assert_eq!(report.without_results, vec![500]);
        assert_eq!(report.unmatchable, 1);
    }

    #[test]
    fn turnout_mode_uses_buckets() {
        let view = ViewState { mode: ViewMode::Turnout, ..ViewState::default() };
        let (scene, _) = render_geographic(&boundaries(), &race(), &view, &Config::default()).unwrap();
        assert_eq!(scene.shape(303).unwrap().fill, "#CA8A04");
    }

    #[test]
    fn multipolygon_draws_one_compound_path() {
        let set = BoundarySet { features: vec![
            feature(Some(303), vec![square(-123.0, 45.4), square(-122.5, 45.6)]),
        ]};
        let (scene, _) = render_geographic(&set, &race(), &ViewState::default(), &Config::default()).unwrap();
        let shape = &scene.shapes[0];
        assert_eq!(shape.path.matches('M').count(), 2);
        assert_eq!(shape.path.matches('Z').count(), 2);
        assert_eq!(shape.outline.0.len(), 2);
    }

    #[test]
    fn unmatched_geometry_is_invalid() {
        let set = BoundarySet { features: vec![feature(Some(500), vec![square(-122.8, 45.4)])] };
        let err = render_geographic(&set, &race(), &ViewState::default(), &Config::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry));
    }
}
