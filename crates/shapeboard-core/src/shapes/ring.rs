//! Ring (annulus) shape.

use super::{Point, Rgba, ShapeError, ShapeId};
use kurbo::{BezPath, Circle as KurboCircle, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Two concentric circles; the area between them is the pickable region.
///
/// `inner_radius <= outer_radius` is enforced at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    pub(crate) id: ShapeId,
    pub center: Point,
    pub outer_radius: i32,
    pub inner_radius: i32,
    pub color: Rgba,
}

impl Ring {
    pub fn new(center: Point, outer_radius: i32, inner_radius: i32) -> Result<Self, ShapeError> {
        if outer_radius < 0 {
            return Err(ShapeError::NegativeRadius(outer_radius));
        }
        if inner_radius < 0 {
            return Err(ShapeError::NegativeRadius(inner_radius));
        }
        if inner_radius > outer_radius {
            return Err(ShapeError::InnerRadiusExceedsOuter {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            center,
            outer_radius,
            inner_radius,
            color: Rgba::default(),
        })
    }

    pub fn bounds(&self) -> Rect {
        let r = self.outer_radius as f64;
        let c: kurbo::Point = self.center.into();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    /// Inside (or on) the outer circle and strictly outside the inner one.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let dx = (x - self.center.x) as i64;
        let dy = (y - self.center.y) as i64;
        let d2 = dx * dx + dy * dy;
        let inside_outer = d2 <= self.outer_radius as i64 * self.outer_radius as i64;
        let inside_inner = d2 <= self.inner_radius as i64 * self.inner_radius as i64;
        inside_outer && !inside_inner
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    /// Rotationally symmetric.
    pub fn rotate(&mut self, _angle_degrees: f64) {}

    /// The shared center is the centroid; the reflection fixes it.
    pub fn mirror(&mut self, _vertical: bool) {}

    pub fn to_path(&self) -> BezPath {
        let center = kurbo::Point::from(self.center);
        let mut path = KurboCircle::new(center, self.outer_radius as f64).to_path(0.1);
        for el in KurboCircle::new(center, self.inner_radius as f64).path_elements(0.1) {
            path.push(el);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_annulus_only() {
        let ring = Ring::new(Point::new(0, 0), 10, 5).unwrap();
        // Strictly between the radii.
        assert!(ring.hit_test(7, 0));
        // Inside the inner circle.
        assert!(!ring.hit_test(3, 0));
        // Outside the outer circle.
        assert!(!ring.hit_test(12, 0));
        // The inner boundary belongs to the hole.
        assert!(!ring.hit_test(5, 0));
        // The outer boundary belongs to the ring.
        assert!(ring.hit_test(10, 0));
    }

    #[test]
    fn test_inner_exceeding_outer_rejected() {
        assert_eq!(
            Ring::new(Point::new(0, 0), 4, 9).unwrap_err(),
            ShapeError::InnerRadiusExceedsOuter { inner: 9, outer: 4 }
        );
    }

    #[test]
    fn test_negative_radius_rejected() {
        assert!(Ring::new(Point::new(0, 0), -1, 0).is_err());
        assert!(Ring::new(Point::new(0, 0), 5, -1).is_err());
    }

    #[test]
    fn test_translate_round_trip() {
        let mut ring = Ring::new(Point::new(2, 3), 8, 4).unwrap();
        ring.translate(10, 10);
        ring.translate(-10, -10);
        assert_eq!(ring.center, Point::new(2, 3));
    }
}
