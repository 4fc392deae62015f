//! Circle shape.

use super::{Point, Rgba, ShapeError, ShapeId};
use kurbo::{BezPath, Circle as KurboCircle, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle with integer center and radius.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Circle {
    pub(crate) id: ShapeId,
    pub center: Point,
    pub radius: i32,
    pub color: Rgba,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Result<Self, ShapeError> {
        if radius < 0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            center,
            radius,
            color: Rgba::default(),
        })
    }

    pub fn bounds(&self) -> Rect {
        let r = self.radius as f64;
        let c: kurbo::Point = self.center.into();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    /// Inside or on the circle (squared-distance comparison).
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let dx = (x - self.center.x) as i64;
        let dy = (y - self.center.y) as i64;
        dx * dx + dy * dy <= self.radius as i64 * self.radius as i64
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    /// A circle looks the same from every direction.
    pub fn rotate(&mut self, _angle_degrees: f64) {}

    /// The center is its own centroid, so the reflection fixes it.
    pub fn mirror(&mut self, _vertical: bool) {}

    pub fn to_path(&self) -> BezPath {
        KurboCircle::new(self.center, self.radius as f64).to_path(0.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_boundary_inclusive() {
        let circle = Circle::new(Point::new(0, 0), 10).unwrap();
        assert!(circle.hit_test(10, 0));
        assert!(!circle.hit_test(11, 0));
        assert!(circle.hit_test(0, 0));
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert_eq!(
            Circle::new(Point::new(0, 0), -1).unwrap_err(),
            ShapeError::NegativeRadius(-1)
        );
    }

    #[test]
    fn test_translate_moves_center() {
        let mut circle = Circle::new(Point::new(5, 5), 3).unwrap();
        circle.translate(-5, 10);
        assert_eq!(circle.center, Point::new(0, 15));
        assert_eq!(circle.radius, 3);
    }

    #[test]
    fn test_bounds() {
        let circle = Circle::new(Point::new(10, 20), 5).unwrap();
        assert_eq!(circle.bounds(), Rect::new(5.0, 15.0, 15.0, 25.0));
    }
}
