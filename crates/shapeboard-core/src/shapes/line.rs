//! Line segment shape.

use super::{Point, Rgba, ShapeId, LINE_TOLERANCE, mirror_points, point_to_line_dist, points_bounds, rotate_points};
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight segment between two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ShapeId,
    pub start: Point,
    pub end: Point,
    pub color: Rgba,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            color: Rgba::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        points_bounds(&[self.start, self.end])
    }

    /// Perpendicular distance to the infinite line through the endpoints,
    /// against the fixed tolerance band. The band is not clamped to the
    /// segment's extent; a zero-length line never hits.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let click = kurbo::Point::new(x as f64, y as f64);
        point_to_line_dist(click, self.start.into(), self.end.into()) < LINE_TOLERANCE
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    pub fn rotate(&mut self, angle_degrees: f64) {
        let mut pts = [self.start, self.end];
        rotate_points(&mut pts, angle_degrees);
        [self.start, self.end] = pts;
    }

    pub fn mirror(&mut self, vertical: bool) {
        let mut pts = [self.start, self.end];
        mirror_points(&mut pts, vertical);
        [self.start, self.end] = pts;
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
