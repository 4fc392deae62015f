//! Shape definitions for the editor.

mod arc;
mod circle;
mod dot;
mod line;
mod parallelogram;
mod polygon;
mod polyline;
mod ring;
mod triangle;

pub use arc::Arc;
pub use circle::Circle;
pub use dot::Dot;
pub use line::Line;
pub use parallelogram::Parallelogram;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use ring::Ring;
pub use triangle::Triangle;

use crate::render::RenderSurface;
use kurbo::Rect;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Hit band half-width for line and polyline picking, in canvas units.
pub const LINE_TOLERANCE: f64 = 5.0;

/// An integer canvas coordinate pair.
///
/// All shape geometry lives on the integer grid; floating point only
/// appears transiently inside distance and rotation math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by integer deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        ((dx * dx + dy * dy) as f64).sqrt()
    }
}

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        kurbo::Point::new(p.x as f64, p.y as f64)
    }
}

/// Serializable display color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Errors from constructing geometrically invalid shapes.
///
/// Interactive flows never produce these; they guard the programmatic
/// constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("{kind:?} needs at least {min} points, got {got}")]
    TooFewPoints {
        kind: ShapeKind,
        min: usize,
        got: usize,
    },
    #[error("ring inner radius {inner} exceeds outer radius {outer}")]
    InnerRadiusExceedsOuter { inner: i32, outer: i32 },
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(i32),
}

/// Explicit variant tag.
///
/// The render dispatcher and visibility flags switch on this tag rather
/// than on any runtime type identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Dot,
    Line,
    Circle,
    Arc,
    Ring,
    Polyline,
    Polygon,
    Triangle,
    Parallelogram,
}

/// Centroid of a point set (arithmetic mean), in f64.
pub fn centroid(points: &[Point]) -> kurbo::Point {
    if points.is_empty() {
        return kurbo::Point::ZERO;
    }
    let (sx, sy) = points
        .iter()
        .fold((0i64, 0i64), |(sx, sy), p| (sx + p.x as i64, sy + p.y as i64));
    let n = points.len() as f64;
    kurbo::Point::new(sx as f64 / n, sy as f64 / n)
}

/// Rotate a point set about its own centroid, rounding back to the grid.
pub(crate) fn rotate_points(points: &mut [Point], angle_degrees: f64) {
    if points.is_empty() {
        return;
    }
    let c = centroid(points);
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    for p in points.iter_mut() {
        let dx = p.x as f64 - c.x;
        let dy = p.y as f64 - c.y;
        p.x = (c.x + dx * cos - dy * sin).round() as i32;
        p.y = (c.y + dx * sin + dy * cos).round() as i32;
    }
}

/// Reflect a point set about its own centroid axis.
///
/// `vertical` negates the horizontal offset from the centroid, otherwise
/// the vertical offset. The axis coordinate is fixed as `round(2 * mean)`
/// before any point moves, which makes the map an integer involution:
/// mirroring twice restores the original coordinates exactly.
pub(crate) fn mirror_points(points: &mut [Point], vertical: bool) {
    if points.is_empty() {
        return;
    }
    let c = centroid(points);
    if vertical {
        let axis = (2.0 * c.x).round() as i32;
        for p in points.iter_mut() {
            p.x = axis - p.x;
        }
    } else {
        let axis = (2.0 * c.y).round() as i32;
        for p in points.iter_mut() {
            p.y = axis - p.y;
        }
    }
}

/// Perpendicular distance from a point to the infinite line through a and b.
///
/// Deliberately unclamped: a point past the segment's extent still reports
/// its distance to the line's band. A degenerate (zero-length) line is
/// infinitely far from everything.
pub fn point_to_line_dist(point: kurbo::Point, a: kurbo::Point, b: kurbo::Point) -> f64 {
    let seg = b - a;
    let len = seg.hypot();
    if len < f64::EPSILON {
        return f64::INFINITY;
    }
    let pv = point - a;
    seg.cross(pv).abs() / len
}

/// Even-odd ray-casting point-in-polygon test over the closed vertex loop.
/// Fewer than 3 vertices can enclose nothing.
pub fn point_in_polygon(x: i32, y: i32, points: &[Point]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let (px, py) = (x as f64, y as f64);
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = (points[i].x as f64, points[i].y as f64);
        let (xj, yj) = (points[j].x as f64, points[j].y as f64);
        if ((yi > py) != (yj > py)) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Normalize an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}

/// Any hit within the tolerance band of any consecutive segment.
pub(crate) fn polyline_hit(points: &[Point], x: i32, y: i32) -> bool {
    if points.len() < 2 {
        return false;
    }
    let click = kurbo::Point::new(x as f64, y as f64);
    points
        .windows(2)
        .any(|w| point_to_line_dist(click, w[0].into(), w[1].into()) < LINE_TOLERANCE)
}

/// Axis-aligned bounding box of a point set.
pub(crate) fn points_bounds(points: &[Point]) -> Rect {
    let (min_x, max_x) = points.iter().fold((i32::MAX, i32::MIN), |(mn, mx), p| {
        (mn.min(p.x), mx.max(p.x))
    });
    let (min_y, max_y) = points.iter().fold((i32::MAX, i32::MIN), |(mn, mx), p| {
        (mn.min(p.y), mx.max(p.y))
    });
    Rect::new(min_x as f64, min_y as f64, max_x as f64, max_y as f64)
}

/// Enum wrapper over all shape variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Dot(Dot),
    Line(Line),
    Circle(Circle),
    Arc(Arc),
    Ring(Ring),
    Polyline(Polyline),
    Polygon(Polygon),
    Triangle(Triangle),
    Parallelogram(Parallelogram),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Dot(s) => s.id,
            Shape::Line(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Arc(s) => s.id,
            Shape::Ring(s) => s.id,
            Shape::Polyline(s) => s.id,
            Shape::Polygon(s) => s.id,
            Shape::Triangle(s) => s.id,
            Shape::Parallelogram(s) => s.id,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Dot(_) => ShapeKind::Dot,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Arc(_) => ShapeKind::Arc,
            Shape::Ring(_) => ShapeKind::Ring,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::Parallelogram(_) => ShapeKind::Parallelogram,
        }
    }

    pub fn color(&self) -> Rgba {
        match self {
            Shape::Dot(s) => s.color,
            Shape::Line(s) => s.color,
            Shape::Circle(s) => s.color,
            Shape::Arc(s) => s.color,
            Shape::Ring(s) => s.color,
            Shape::Polyline(s) => s.color,
            Shape::Polygon(s) => s.color,
            Shape::Triangle(s) => s.color,
            Shape::Parallelogram(s) => s.color,
        }
    }

    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Shape::Dot(s) => s.color = color,
            Shape::Line(s) => s.color = color,
            Shape::Circle(s) => s.color = color,
            Shape::Arc(s) => s.color = color,
            Shape::Ring(s) => s.color = color,
            Shape::Polyline(s) => s.color = color,
            Shape::Polygon(s) => s.color = color,
            Shape::Triangle(s) => s.color = color,
            Shape::Parallelogram(s) => s.color = color,
        }
    }

    /// Mean of the shape's defining points; the circle family's centroid
    /// is its center.
    pub fn centroid(&self) -> kurbo::Point {
        match self {
            Shape::Dot(s) => s.position.into(),
            Shape::Line(s) => centroid(&[s.start, s.end]),
            Shape::Circle(s) => s.center.into(),
            Shape::Arc(s) => s.center.into(),
            Shape::Ring(s) => s.center.into(),
            Shape::Polyline(s) => centroid(&s.points),
            Shape::Polygon(s) => centroid(&s.points),
            Shape::Triangle(s) => centroid(&s.points),
            Shape::Parallelogram(s) => centroid(&s.points),
        }
    }

    /// Bounding box in canvas coordinates.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Dot(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Arc(s) => s.bounds(),
            Shape::Ring(s) => s.bounds(),
            Shape::Polyline(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Parallelogram(s) => s.bounds(),
        }
    }

    /// Per-variant pick test; tolerances are part of the contract.
    pub fn hit_test(&self, x: i32, y: i32) -> bool {
        match self {
            Shape::Dot(s) => s.hit_test(x, y),
            Shape::Line(s) => s.hit_test(x, y),
            Shape::Circle(s) => s.hit_test(x, y),
            Shape::Arc(s) => s.hit_test(x, y),
            Shape::Ring(s) => s.hit_test(x, y),
            Shape::Polyline(s) => s.hit_test(x, y),
            Shape::Polygon(s) => s.hit_test(x, y),
            Shape::Triangle(s) => s.hit_test(x, y),
            Shape::Parallelogram(s) => s.hit_test(x, y),
        }
    }

    /// Translate all owned points by integer deltas. Exactly invertible.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Dot(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Arc(s) => s.translate(dx, dy),
            Shape::Ring(s) => s.translate(dx, dy),
            Shape::Polyline(s) => s.translate(dx, dy),
            Shape::Polygon(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
            Shape::Parallelogram(s) => s.translate(dx, dy),
        }
    }

    /// Rotate about the shape's own centroid. Dots, circles and rings have
    /// no orientation and are left untouched.
    pub fn rotate(&mut self, angle_degrees: f64) {
        match self {
            Shape::Dot(s) => s.rotate(angle_degrees),
            Shape::Line(s) => s.rotate(angle_degrees),
            Shape::Circle(s) => s.rotate(angle_degrees),
            Shape::Arc(s) => s.rotate(angle_degrees),
            Shape::Ring(s) => s.rotate(angle_degrees),
            Shape::Polyline(s) => s.rotate(angle_degrees),
            Shape::Polygon(s) => s.rotate(angle_degrees),
            Shape::Triangle(s) => s.rotate(angle_degrees),
            Shape::Parallelogram(s) => s.rotate(angle_degrees),
        }
    }

    /// Reflect about the shape's own centroid axis.
    pub fn mirror(&mut self, vertical: bool) {
        match self {
            Shape::Dot(s) => s.mirror(vertical),
            Shape::Line(s) => s.mirror(vertical),
            Shape::Circle(s) => s.mirror(vertical),
            Shape::Arc(s) => s.mirror(vertical),
            Shape::Ring(s) => s.mirror(vertical),
            Shape::Polyline(s) => s.mirror(vertical),
            Shape::Polygon(s) => s.mirror(vertical),
            Shape::Triangle(s) => s.mirror(vertical),
            Shape::Parallelogram(s) => s.mirror(vertical),
        }
    }

    /// Render onto a surface. Never mutates the shape.
    pub fn draw(&self, surface: &mut dyn RenderSurface) {
        let color = Color::from(self.color());
        match self {
            Shape::Dot(s) => surface.fill_dot(s.position, color),
            Shape::Line(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Circle(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Arc(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Ring(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Polyline(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Polygon(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Triangle(s) => surface.stroke_path(&s.to_path(), color),
            Shape::Parallelogram(s) => surface.stroke_path(&s.to_path(), color),
        }
    }
}
