use geo::{coord, Rect};
use log::debug;

use crate::{boundary::BoundarySet, config::GeoBounds, election::RaceResult, error::Error};

/// Bounding window over every valid outer-ring coordinate of the features whose
/// precinct has results in `race`, grown by `buffer` of each span on both sides.
///
/// Unmatched and unmatchable features never contribute, so stray geometry outside
/// the race cannot widen the view. No valid coordinate at all is `InvalidGeometry`.
pub fn bounding_window(
    boundaries: &BoundarySet,
    race: &RaceResult,
    valid: &GeoBounds,
    buffer: f64,
) -> Result<Rect<f64>, Error> {
    let (min, max) = boundaries.matchable()
        .filter(|feature| feature.precinct.is_some_and(|p| race.contains(p)))
        .flat_map(|feature| feature.rings.iter())
        .flat_map(|ring| ring.0.iter())
        .filter(|c| valid.contains(c.x, c.y))
        .fold(
            (coord! { x: f64::INFINITY, y: f64::INFINITY }, coord! { x: f64::NEG_INFINITY, y: f64::NEG_INFINITY }),
            |(min, max), c| (
                coord! { x: min.x.min(c.x), y: min.y.min(c.y) },
                coord! { x: max.x.max(c.x), y: max.y.max(c.y) },
            ),
        );

    if !(min.x.is_finite() && max.x.is_finite()) {
        return Err(Error::InvalidGeometry);
    }
    debug!("[render::bounds] lng ({}, {}) lat ({}, {})", min.x, max.x, min.y, max.y);

    let dx = (max.x - min.x) * buffer;
    let dy = (max.y - min.y) * buffer;
    Ok(Rect::new(
        coord! { x: min.x - dx, y: min.y - dy },
        coord! { x: max.x + dx, y: max.y + dy },
    ))
}

#[cfg(test)]
mod tests {
    use geo::LineString;
    use serde_json::Map;

    use super::*;
    use crate::{boundary::{BoundaryFeature, GeometryKind}, election::PrecinctResult};

    fn feature(precinct: Option<u32>, coords: &[(f64, f64)]) -> BoundaryFeature {
        BoundaryFeature {
            precinct,
            kind: GeometryKind::Polygon,
            rings: vec![LineString::from(coords.to_vec())],
            properties: Map::new(),
        }
    }

    fn race(precincts: &[u32]) -> RaceResult {
        let mut race = RaceResult::new("Seat 1");
        for &p in precincts {
            race.insert(PrecinctResult {
                precinct_number: p, ballots_cast: 1, registered_voters: 1, total_votes: 0, candidates: vec![],
            });
        }
        race
    }

    #[test]
    fn buffer_is_five_percent_of_span() {
        let set = BoundarySet { features: vec![
            feature(Some(1), &[(-123.0, 45.3), (-122.8, 45.3), (-122.8, 45.5), (-123.0, 45.5)]),
        ]};
        let rect = bounding_window(&set, &race(&[1]), &GeoBounds::default(), 0.05).unwrap();
        assert!((rect.min().x - -123.01).abs() < 1e-9);
        assert!((rect.max().x - -122.79).abs() < 1e-9);
        assert!((rect.min().y - 45.29).abs() < 1e-9);
        assert!((rect.max().y - 45.51).abs() < 1e-9);
    }

    #[test]
    fn invalid_coordinates_are_skipped() {
        let set = BoundarySet { features: vec![
            feature(Some(1), &[(-123.0, 45.3), (f64::NAN, 45.4), (-100.0, 45.4), (-122.9, 45.4)]),
        ]};
        let rect = bounding_window(&set, &race(&[1]), &GeoBounds::default(), 0.0).unwrap();
        assert_eq!(rect.min().x, -123.0);
        assert_eq!(rect.max().x, -122.9);
    }

    #[test]
    fn nothing_valid_is_invalid_geometry() {
        let set = BoundarySet { features: vec![
            feature(Some(1), &[(0.0, 0.0), (1.0, 1.0)]),
            feature(Some(2), &[(-123.0, 45.3)]),
        ]};
        let err = bounding_window(&set, &race(&[1]), &GeoBounds::default(), 0.05).unwrap_err();
        assert!(matches!(err, Error::InvalidGeometry));
    }
}
