//! Parallelogram shape.

use super::polygon::closed_path;
use super::{Point, Rgba, ShapeId, mirror_points, point_in_polygon, points_bounds, rotate_points};
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed four-vertex polygon with opposite sides parallel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parallelogram {
    pub(crate) id: ShapeId,
    pub points: [Point; 4],
    pub color: Rgba,
}

impl Parallelogram {
    /// Derive the last two vertices from the first edge plus an interior
    /// angle: the second edge leaves `b` at `angle_degrees` relative to the
    /// first edge's direction, with the same length as the first edge.
    pub fn from_edge_and_angle(a: Point, b: Point, angle_degrees: f64) -> Self {
        let edge_angle = ((b.y - a.y) as f64).atan2((b.x - a.x) as f64);
        let length = a.distance_to(b);
        let theta = edge_angle + angle_degrees.to_radians();
        let dx = (length * theta.cos()).round() as i32;
        let dy = (length * theta.sin()).round() as i32;
        let c = b.offset(dx, dy);
        let d = a.offset(dx, dy);
        Self {
            id: Uuid::new_v4(),
            points: [a, b, c, d],
            color: Rgba::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        points_bounds(&self.points)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        point_in_polygon(x, y, &self.points)
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
        closed_path(&self.points)
    }
}
