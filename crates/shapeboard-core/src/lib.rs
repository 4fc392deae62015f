//! Shapeboard Core Library
//!
//! Platform-agnostic shape model and interaction logic for the shapeboard
//! editor. The embedding application feeds abstract pointer, keyboard and
//! menu events into an [`Editor`] session and supplies the prompt/redraw
//! services via [`Host`] and the drawing primitives via
//! [`render::RenderSurface`]; no windowing toolkit appears in this crate.

pub mod canvas;
pub mod editor;
pub mod input;
pub mod render;
pub mod shapes;
pub mod tools;

pub use canvas::Document;
pub use editor::{Editor, Host};
pub use input::{Command, InputEvent, Key};
pub use render::{RenderSurface, Visibility, render};
pub use shapes::{Point, Rgba, Shape, ShapeError, ShapeId, ShapeKind};
pub use tools::{ToolKind, ToolManager, ToolState};
