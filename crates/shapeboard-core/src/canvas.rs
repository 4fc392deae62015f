//! Canvas document: the ordered, owning shape collection.

use crate::shapes::{Shape, ShapeId};
use kurbo::Rect;
use serde::{Deserialize, Serialize};

/// All shapes in one editing session, in insertion order.
///
/// Insertion order is load-bearing: the pick scan and the render pass both
/// walk it front to back, and the oldest matching shape wins a pick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape, returning its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape, returning it if present.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// First shape whose hit test passes, scanning in insertion order.
    pub fn shape_at(&self, x: i32, y: i32) -> Option<ShapeId> {
        self.shapes
            .iter()
            .find(|s| s.hit_test(x, y))
            .map(|s| s.id())
    }

    /// Union of all shape bounding boxes.
    pub fn bounds(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(|s| s.bounds())
            .reduce(|acc, b| acc.union(b))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Drop every shape (session teardown).
    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
