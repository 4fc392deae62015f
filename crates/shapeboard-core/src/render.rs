//! Render dispatching with per-variant visibility.

use crate::canvas::Document;
use crate::shapes::{Point, ShapeKind};
use kurbo::BezPath;
use log::trace;
use peniko::Color;
use std::collections::HashSet;

/// Drawing capability the embedding application hands to the core.
///
/// Dots paint single pixels; every other variant arrives as a stroked
/// outline path.
pub trait RenderSurface {
    fn fill_dot(&mut self, position: Point, color: Color);
    fn stroke_path(&mut self, path: &BezPath, color: Color);
}

/// Per-variant visibility flags; every kind starts visible.
#[derive(Debug, Clone, Default)]
pub struct Visibility {
    hidden: HashSet<ShapeKind>,
}

impl Visibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, kind: ShapeKind) -> bool {
        !self.hidden.contains(&kind)
    }

    pub fn toggle(&mut self, kind: ShapeKind) {
        if !self.hidden.remove(&kind) {
            self.hidden.insert(kind);
        }
    }
}

/// Draw every shape whose kind flag is enabled, in insertion order.
///
/// Dispatch goes through the explicit [`ShapeKind`] tag each shape
/// carries.
pub fn render(document: &Document, visibility: &Visibility, surface: &mut dyn RenderSurface) {
    for shape in document.iter() {
        if !visibility.is_visible(shape.kind()) {
            trace!("skipping hidden {:?}", shape.kind());
            continue;
        }
        shape.draw(surface);
    }
}
