//! Construction tool system: pointer clicks in, finished shapes out.

use crate::editor::Host;
use crate::shapes::{
    Arc, Circle, Line, Parallelogram, Point, Polygon, Polyline, Ring, Shape, Triangle,
};
use log::debug;
use serde::{Deserialize, Serialize};

/// Interactive arcs always get this fixed span; the two clicks determine
/// only center and radius.
const ARC_SPAN_START_DEG: f64 = 45.0;
const ARC_SPAN_END_DEG: f64 = 135.0;

/// Available tools. `Select` is the editing mode; every other tool
/// constructs one shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Select,
    Line,
    Circle,
    Arc,
    Ring,
    Polyline,
    Polygon,
    Triangle,
    Parallelogram,
}

/// State of an in-progress construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ToolState {
    /// No construction running.
    #[default]
    Idle,
    /// Accumulating clicks until `target` points have been collected.
    Collecting { pending: Vec<Point>, target: usize },
}

/// The construction state machine.
///
/// Arming a tool starts a fresh accumulation (dropping any half-finished
/// one); each pointer click adds a vertex; once the tool's point target is
/// reached the shape is emitted and the machine falls back to select mode.
#[derive(Debug, Clone, Default)]
pub struct ToolManager {
    current_tool: ToolKind,
    state: ToolState,
}

impl ToolManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_tool(&self) -> ToolKind {
        self.current_tool
    }

    /// Current construction progress, e.g. for a "2 of 3 points" status
    /// line in the host UI.
    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self.state, ToolState::Collecting { .. })
    }

    /// Arm a tool, discarding any in-progress accumulation.
    ///
    /// Polyline and polygon tools ask the host for a vertex count up front;
    /// a cancelled prompt (0) or one below the variant minimum aborts back
    /// to select mode.
    pub fn set_tool(&mut self, kind: ToolKind, host: &mut dyn Host) {
        if self.is_collecting() {
            debug!("discarding in-progress {:?} construction", self.current_tool);
        }
        self.current_tool = kind;
        self.state = ToolState::Idle;

        let target = match kind {
            ToolKind::Select => return,
            ToolKind::Line
            | ToolKind::Circle
            | ToolKind::Arc
            | ToolKind::Ring
            | ToolKind::Parallelogram => 2,
            ToolKind::Triangle => 3,
            ToolKind::Polyline | ToolKind::Polygon => {
                let min = if kind == ToolKind::Polyline { 2 } else { 3 };
                let count = host.ask_point_count() as usize;
                if count < min {
                    debug!("vertex count prompt returned {count}, aborting {kind:?}");
                    self.current_tool = ToolKind::Select;
                    return;
                }
                count
            }
        };
        self.state = ToolState::Collecting {
            pending: Vec::with_capacity(target),
            target,
        };
    }

    /// Feed one click into the machine. Returns the finished shape once
    /// the point target is reached; the machine is back in select mode by
    /// the time the shape is handed out.
    pub fn add_point(&mut self, point: Point, host: &mut dyn Host) -> Option<Shape> {
        let ToolState::Collecting { pending, target } = &mut self.state else {
            return None;
        };
        pending.push(point);
        if pending.len() < *target {
            return None;
        }
        let points = std::mem::take(pending);
        let kind = self.current_tool;
        self.current_tool = ToolKind::Select;
        self.state = ToolState::Idle;

        let shape = build_shape(kind, &points, host);
        if let Some(shape) = &shape {
            debug!("emitted {:?}", shape.kind());
        }
        shape
    }

    /// Back to select mode, discarding any accumulated points.
    pub fn cancel(&mut self) {
        if self.is_collecting() {
            debug!("cancelling {:?} construction", self.current_tool);
        }
        self.current_tool = ToolKind::Select;
        self.state = ToolState::Idle;
    }
}

/// Build the armed tool's shape from the collected points.
///
/// Radii truncate the click distance to the integer grid. Constructor
/// failures abort the construction rather than surface an error; the
/// targets above make them unreachable in practice.
fn build_shape(kind: ToolKind, points: &[Point], host: &mut dyn Host) -> Option<Shape> {
    match kind {
        ToolKind::Select => None,
        ToolKind::Line => Some(Shape::Line(Line::new(points[0], points[1]))),
        ToolKind::Circle => {
            let radius = points[0].distance_to(points[1]) as i32;
            Circle::new(points[0], radius).ok().map(Shape::Circle)
        }
        ToolKind::Arc => {
            let radius = points[0].distance_to(points[1]) as i32;
            Arc::new(
                points[0],
                radius,
                ARC_SPAN_START_DEG.to_radians(),
                ARC_SPAN_END_DEG.to_radians(),
            )
            .ok()
            .map(Shape::Arc)
        }
        ToolKind::Ring => {
            let outer = points[0].distance_to(points[1]) as i32;
            Ring::new(points[0], outer, outer / 2).ok().map(Shape::Ring)
        }
        ToolKind::Triangle => Some(Shape::Triangle(Triangle::new(
            points[0], points[1], points[2],
        ))),
        ToolKind::Parallelogram => {
            let angle = host.ask_angle();
            if angle == 0.0 {
                debug!("angle prompt cancelled, dropping parallelogram");
                return None;
            }
            Some(Shape::Parallelogram(Parallelogram::from_edge_and_angle(
                points[0], points[1], angle,
            )))
        }
        ToolKind::Polyline => Polyline::new(points.to_vec()).ok().map(Shape::Polyline),
        ToolKind::Polygon => Polygon::new(points.to_vec()).ok().map(Shape::Polygon),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    struct TestHost {
        point_count: u32,
        angle: f64,
        redraws: usize,
    }

    impl TestHost {
        fn new() -> Self {
            Self {
                point_count: 0,
                angle: 0.0,
                redraws: 0,
            }
        }
    }

    impl Host for TestHost {
        fn ask_point_count(&mut self) -> u32 {
            self.point_count
        }

        fn ask_angle(&mut self) -> f64 {
            self.angle
        }

        fn request_redraw(&mut self) {
            self.redraws += 1;
        }
    }

    #[test]
    fn test_line_two_clicks() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Line, &mut host);

        assert!(tools.add_point(Point::new(0, 0), &mut host).is_none());
        let shape = tools.add_point(Point::new(10, 10), &mut host).unwrap();
        let Shape::Line(line) = shape else {
            panic!("expected a line");
        };
        assert_eq!(line.start, Point::new(0, 0));
        assert_eq!(line.end, Point::new(10, 10));
        assert_eq!(tools.current_tool(), ToolKind::Select);
    }

    #[test]
    fn test_circle_radius_from_distance() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Circle, &mut host);

        tools.add_point(Point::new(0, 0), &mut host);
        let shape = tools.add_point(Point::new(3, 4), &mut host).unwrap();
        let Shape::Circle(circle) = shape else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, Point::new(0, 0));
        assert_eq!(circle.radius, 5);
    }

    #[test]
    fn test_ring_inner_is_half_outer() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Ring, &mut host);

        tools.add_point(Point::new(0, 0), &mut host);
        let shape = tools.add_point(Point::new(0, 11), &mut host).unwrap();
        let Shape::Ring(ring) = shape else {
            panic!("expected a ring");
        };
        assert_eq!(ring.outer_radius, 11);
        assert_eq!(ring.inner_radius, 5);
    }

    #[test]
    fn test_arc_span_is_fixed() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Arc, &mut host);

        tools.add_point(Point::new(0, 0), &mut host);
        // The second click sits at 0 degrees but the span stays 45..135.
        let shape = tools.add_point(Point::new(10, 0), &mut host).unwrap();
        let Shape::Arc(arc) = shape else {
            panic!("expected an arc");
        };
        assert_eq!(arc.radius, 10);
        assert!((arc.start_angle - 45f64.to_radians()).abs() < 1e-9);
        assert!((arc.end_angle - 135f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn test_state_reports_progress() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Triangle, &mut host);
        tools.add_point(Point::new(0, 0), &mut host);

        let ToolState::Collecting { pending, target } = tools.state() else {
            panic!("expected an active construction");
        };
        assert_eq!(pending.len(), 1);
        assert_eq!(*target, 3);
    }

    #[test]
    fn test_triangle_three_clicks() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Triangle, &mut host);

        assert!(tools.add_point(Point::new(0, 0), &mut host).is_none());
        assert!(tools.add_point(Point::new(10, 0), &mut host).is_none());
        let shape = tools.add_point(Point::new(0, 10), &mut host).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Triangle);
    }

    #[test]
    fn test_polyline_prompted_count() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        host.point_count = 4;
        tools.set_tool(ToolKind::Polyline, &mut host);

        for i in 0..3 {
            assert!(tools.add_point(Point::new(i * 10, 0), &mut host).is_none());
        }
        let shape = tools.add_point(Point::new(30, 10), &mut host).unwrap();
        let Shape::Polyline(polyline) = shape else {
            panic!("expected a polyline");
        };
        assert_eq!(polyline.points.len(), 4);
    }

    #[test]
    fn test_cancelled_count_prompt_aborts() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        host.point_count = 0;
        tools.set_tool(ToolKind::Polygon, &mut host);

        assert_eq!(tools.current_tool(), ToolKind::Select);
        assert!(!tools.is_collecting());
        assert!(tools.add_point(Point::new(0, 0), &mut host).is_none());
    }

    #[test]
    fn test_count_below_minimum_aborts() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        host.point_count = 2;
        // A two-vertex polygon encloses nothing.
        tools.set_tool(ToolKind::Polygon, &mut host);
        assert_eq!(tools.current_tool(), ToolKind::Select);

        // Two vertices are a perfectly fine polyline though.
        host.point_count = 2;
        tools.set_tool(ToolKind::Polyline, &mut host);
        assert!(tools.is_collecting());
    }

    #[test]
    fn test_parallelogram_angle_prompt() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        host.angle = 90.0;
        tools.set_tool(ToolKind::Parallelogram, &mut host);

        tools.add_point(Point::new(0, 0), &mut host);
        let shape = tools.add_point(Point::new(10, 0), &mut host).unwrap();
        let Shape::Parallelogram(para) = shape else {
            panic!("expected a parallelogram");
        };
        assert_eq!(para.points[2], Point::new(10, 10));
        assert_eq!(para.points[3], Point::new(0, 10));
    }

    #[test]
    fn test_parallelogram_cancelled_angle_aborts() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        host.angle = 0.0;
        tools.set_tool(ToolKind::Parallelogram, &mut host);

        tools.add_point(Point::new(0, 0), &mut host);
        assert!(tools.add_point(Point::new(10, 0), &mut host).is_none());
        assert_eq!(tools.current_tool(), ToolKind::Select);
    }

    #[test]
    fn test_retooling_discards_accumulation() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Line, &mut host);
        tools.add_point(Point::new(0, 0), &mut host);

        tools.set_tool(ToolKind::Circle, &mut host);
        // The circle starts from scratch: first click is its center.
        assert!(tools.add_point(Point::new(100, 100), &mut host).is_none());
        let shape = tools.add_point(Point::new(103, 104), &mut host).unwrap();
        let Shape::Circle(circle) = shape else {
            panic!("expected a circle");
        };
        assert_eq!(circle.center, Point::new(100, 100));
        assert_eq!(circle.radius, 5);
    }

    #[test]
    fn test_cancel_discards_accumulation() {
        let mut tools = ToolManager::new();
        let mut host = TestHost::new();
        tools.set_tool(ToolKind::Triangle, &mut host);
        tools.add_point(Point::new(0, 0), &mut host);
        tools.add_point(Point::new(10, 0), &mut host);

        tools.cancel();
        assert_eq!(tools.current_tool(), ToolKind::Select);
        assert!(tools.add_point(Point::new(0, 10), &mut host).is_none());
    }
}
