//! Circular arc shape.

use super::{Point, Rgba, ShapeError, ShapeId, normalize_angle};
use kurbo::{Arc as KurboArc, BezPath, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use uuid::Uuid;

/// An arc of a circle, described by center, radius and an angular span
/// in radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arc {
    pub(crate) id: ShapeId,
    pub center: Point,
    pub radius: i32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: Rgba,
}

impl Arc {
    pub fn new(
        center: Point,
        radius: i32,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, ShapeError> {
        if radius < 0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            center,
            radius,
            start_angle,
            end_angle,
            color: Rgba::default(),
        })
    }

    /// Derive the arc from its center and two boundary points: the radius
    /// comes from the first boundary point, both angles via `atan2`.
    pub fn from_boundary_points(center: Point, start: Point, end: Point) -> Self {
        let radius = center.distance_to(start) as i32;
        let start_angle = ((start.y - center.y) as f64).atan2((start.x - center.x) as f64);
        let end_angle = ((end.y - center.y) as f64).atan2((end.x - center.x) as f64);
        Self {
            id: Uuid::new_v4(),
            center,
            radius,
            start_angle,
            end_angle,
            color: Rgba::default(),
        }
    }

    /// Bounding box of the full supporting circle.
    pub fn bounds(&self) -> Rect {
        let r = self.radius as f64;
        let c: kurbo::Point = self.center.into();
        Rect::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }

    /// Inside the disk and within the angular span, both angles normalized
    /// to `[0, 2π)`; a span wrapping through 0 becomes an OR of the two
    /// sides.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        let dx = (x - self.center.x) as i64;
        let dy = (y - self.center.y) as i64;
        if dx * dx + dy * dy > self.radius as i64 * self.radius as i64 {
            return false;
        }
        let angle = normalize_angle((dy as f64).atan2(dx as f64));
        let start = normalize_angle(self.start_angle);
        let end = normalize_angle(self.end_angle);
        if start < end {
            angle >= start && angle <= end
        } else {
            angle >= start || angle <= end
        }
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }

    /// The arc's centroid is its center, so rotation only shifts the span.
    pub fn rotate(&mut self, angle_degrees: f64) {
        let delta = angle_degrees.to_radians();
        self.start_angle += delta;
        self.end_angle += delta;
    }

    /// Reflect the span through the centroid axis. Negating the horizontal
    /// offset maps an angle to `π − θ`, negating the vertical offset maps
    /// it to `−θ`; the ends swap so the span keeps its orientation.
    pub fn mirror(&mut self, vertical: bool) {
        let (start, end) = (self.start_angle, self.end_angle);
        if vertical {
            self.start_angle = PI - end;
            self.end_angle = PI - start;
        } else {
            self.start_angle = -end;
            self.end_angle = -start;
        }
    }

    pub fn to_path(&self) -> BezPath {
        let sweep = (self.end_angle - self.start_angle).rem_euclid(TAU);
        KurboArc::new(
            kurbo::Point::from(self.center),
            Vec2::new(self.radius as f64, self.radius as f64),
            self.start_angle,
            sweep,
            0.0,
        )
        .to_path(0.1)
    }
}
