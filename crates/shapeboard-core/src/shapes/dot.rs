//! Single-point marker shape.

use super::{Point, Rgba, ShapeId};
use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bare point on the canvas, rendered as one pixel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dot {
    pub(crate) id: ShapeId,
    pub position: Point,
    pub color: Rgba,
}

impl Dot {
    pub fn new(position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            color: Rgba::default(),
        }
    }

    pub fn bounds(&self) -> Rect {
        let p: kurbo::Point = self.position.into();
        Rect::from_points(p, p)
    }

    /// Exact coordinate equality, no tolerance. In practice this makes a
    /// dot nearly impossible to pick with a pointer; that behavior is part
    /// of the contract and is kept.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        self.position.x == x && self.position.y == y
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.position = self.position.offset(dx, dy);
    }

    /// A bare point has no orientation.
    pub fn rotate(&mut self, _angle_degrees: f64) {}

    /// A point is the fixed point of its own centroid reflection.
    pub fn mirror(&mut self, _vertical: bool) {}
}
