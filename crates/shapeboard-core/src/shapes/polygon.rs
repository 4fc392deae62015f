//! Closed polygon shape.

use super::{Point, Rgba, ShapeError, ShapeId, ShapeKind, mirror_points, point_in_polygon, points_bounds, rotate_points};
use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A closed path: the last vertex connects back to the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub(crate) id: ShapeId,
    pub points: Vec<Point>,
    pub color: Rgba,
}

impl Polygon {
    /// At least three vertices; anything smaller encloses no area.
    pub fn new(points: Vec<Point>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewPoints {
                kind: ShapeKind::Polygon,
                min: 3,
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

    /// Even-odd ray casting over the closed vertex loop.
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

/// Closed path through a vertex loop, shared with the fixed-size polygons.
pub(crate) fn closed_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Polygon {
        Polygon::new(vec![
            Point::new(0, 0),
            Point::new(10, 0),
            Point::new(10, 10),
            Point::new(0, 10),
        ])
        .unwrap()
    }

    #[test]
    fn test_too_few_points_rejected() {
        assert_eq!(
            Polygon::new(vec![Point::new(0, 0), Point::new(10, 0)]).unwrap_err(),
            ShapeError::TooFewPoints {
                kind: ShapeKind::Polygon,
                min: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn test_hit_inside_outside() {
        let polygon = square();
        assert!(polygon.hit_test(5, 5));
        assert!(!polygon.hit_test(15, 15));
    }

    #[test]
    fn test_hit_concave() {
        // L-shaped hexagon; the notch must not count as inside.
        let polygon = Polygon::new(vec![
            Point::new(0, 0),
            Point::new(20, 0),
            Point::new(20, 10),
            Point::new(10, 10),
            Point::new(10, 20),
            Point::new(0, 20),
        ])
        .unwrap();
        assert!(polygon.hit_test(5, 15));
        assert!(!polygon.hit_test(15, 15));
    }

    #[test]
    fn test_rotate_square_quarter_turn() {
        let mut polygon = square();
        polygon.rotate(90.0);
        // A quarter turn maps the square onto itself (vertex order shifts).
        assert!(polygon.hit_test(5, 5));
        assert_eq!(polygon.bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_mirror_twice_restores() {
        let points = vec![
            Point::new(0, 0),
            Point::new(12, 1),
            Point::new(9, 8),
            Point::new(2, 6),
        ];
        let mut polygon = Polygon::new(points.clone()).unwrap();
        polygon.mirror(true);
        polygon.mirror(true);
        assert_eq!(polygon.points, points);
    }
}
