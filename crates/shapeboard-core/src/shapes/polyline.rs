//! Open polyline shape.

use super::{Point, Rgba, ShapeError, ShapeId, ShapeKind, mirror_points, points_bounds, polyline_hit, rotate_points};
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An open path through an ordered point sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polyline {
    pub(crate) id: ShapeId,
    pub points: Vec<Point>,
    pub color: Rgba,
}

impl Polyline {
    /// At least two points; anything shorter has no segments to draw.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 2 {
            return Err(ShapeError::TooFewPoints {
                kind: ShapeKind::Polyline,
                min: 2,
                got: points.len(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            points,
            color: Rgba::default(),
        })
    }

    pub fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    /// Within the tolerance band of any consecutive segment (each band is
    /// the segment's infinite line, unclamped, as for Line).
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        polyline_hit(&self.points, x, y)
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.offset(dx, dy);
        }
    }

    pub fn rotate(&mut self, angle_degrees: f64) {
        rotate_points(&mut self.points, angle_degrees);
    }

    pub fn mirror(&mut self, vertical: bool) {
        mirror_points(&mut self.points, vertical);
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for p in &self.points[1..] {
            path.line_to(*p);
        }
        path
    }
}
