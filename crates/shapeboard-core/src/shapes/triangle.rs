//! Triangle shape.

use super::polygon::closed_path;
use super::{Point, Rgba, ShapeId, mirror_points, point_in_polygon, points_bounds, rotate_points};
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed three-vertex polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Triangle {
    pub(crate) id: ShapeId,
    pub points: [Point; 3],
    pub color: Rgba,
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            points: [a, b, c],
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_inside_outside() {
        let triangle = Triangle::new(Point::new(0, 0), Point::new(10, 0), Point::new(0, 10));
        assert!(triangle.hit_test(2, 2));
        assert!(!triangle.hit_test(9, 9));
    }

    #[test]
    fn test_mirror_twice_restores() {
        let triangle = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 3));
        let mut mirrored = triangle.clone();
        mirrored.mirror(true);
        mirrored.mirror(true);
        assert_eq!(mirrored.points, triangle.points);
    }

    #[test]
    fn test_mirror_flips_about_centroid() {
        // Centroid x of (0, 3, 0) is 1; the axis lands on x = 2.
        let mut triangle = Triangle::new(Point::new(0, 0), Point::new(3, 0), Point::new(0, 3));
        triangle.mirror(true);
        assert_eq!(triangle.points, [Point::new(2, 0), Point::new(-1, 0), Point::new(2, 3)]);
    }

    #[test]
    fn test_translate_round_trip() {
        let mut triangle = Triangle::new(Point::new(1, 1), Point::new(4, 1), Point::new(1, 5));
        triangle.translate(-6, 2);
        triangle.translate(6, -2);
        assert_eq!(
            triangle.points,
            [Point::new(1, 1), Point::new(4, 1), Point::new(1, 5)]
        );
    }
}
