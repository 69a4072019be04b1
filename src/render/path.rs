use std::fmt::Write;

use geo::{Coord, LineString, Polygon};

use crate::config::GeoBounds;
use super::ScreenTransform;

/// Fewest valid points a ring needs to be drawn.
pub(crate) const MIN_RING_POINTS: usize = 4;

/// Outer rings filtered to valid coordinates, keeping only rings that still have
/// at least `MIN_RING_POINTS` points. Invalid points are dropped, never replaced.
pub(crate) fn drawable_rings(rings: &[LineString<f64>], valid: &GeoBounds) -> Vec<Vec<Coord<f64>>> {
    rings.iter()
        .map(|ring| ring.0.iter().copied().filter(|c| valid.contains(c.x, c.y)).collect::<Vec<_>>())
        .filter(|ring| ring.len() >= MIN_RING_POINTS)
        .collect()
}

/// Arithmetic mean of the ring's points (not area-weighted).
pub(crate) fn centroid(ring: &[Coord<f64>]) -> Option<Coord<f64>> {
    if ring.is_empty() { return None }
    let sum = ring.iter().fold(Coord::zero(), |acc, c| acc + *c);
    Some(sum / ring.len() as f64)
}

/// Append a ring as an SVG subpath `M x,y L x,y ... Z`, separated from any previous
/// subpath by one space. Points that project to non-finite positions are skipped.
/// Returns the screen-space ring, or None (writing nothing) if fewer than
/// `MIN_RING_POINTS` points survived.
pub(crate) fn ring_to_path(ring: &[Coord<f64>], transform: &ScreenTransform, out: &mut String) -> Option<Polygon<f64>> {
    let points: Vec<(f64, f64)> = ring.iter()
        .map(|c| transform.project(c))
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if points.len() < MIN_RING_POINTS { return None }
    let (first, rest) = points.split_first()?;

    if !out.is_empty() { out.push(' ') }
    let _ = write!(out, "M {:.2},{:.2}", first.0, first.1);
    for (x, y) in rest {
        let _ = write!(out, " L {x:.2},{y:.2}");
    }
    out.push_str(" Z");

    Some(Polygon::new(LineString::from(points), vec![]))
}
