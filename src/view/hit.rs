use geo::{BoundingRect, Contains, Point, Rect};
use rstar::{RTree, RTreeObject, AABB};

use crate::render::Scene;

/// Screen-space bounding box of one scene shape, by index.
#[derive(Debug, Clone)]
struct BoundingBox {
    idx: usize,
    bbox: Rect<f64>,
}

impl RTreeObject for BoundingBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.bbox.min().into(), self.bbox.max().into())
    }
}

/// Point lookup over a rendered scene: R-tree on shape bounding boxes, then exact
/// containment against the shape outline.
#[derive(Debug)]
pub struct HitIndex {
    tree: RTree<BoundingBox>,
}

impl HitIndex {
    pub fn new(scene: &Scene) -> Self {
        let boxes = scene.shapes.iter().enumerate()
            .filter_map(|(idx, shape)| shape.outline.bounding_rect().map(|bbox| BoundingBox { idx, bbox }))
            .collect();
        Self { tree: RTree::bulk_load(boxes) }
    }

    /// Index of the topmost (last painted) shape containing the point.
    pub fn shape_at(&self, scene: &Scene, x: f64, y: f64) -> Option<usize> {
        let point = Point::new(x, y);
        self.tree.locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(|b| b.idx)
            .filter(|&idx| scene.shapes.get(idx).is_some_and(|s| s.outline.contains(&point)))
            .max()
    }
}
