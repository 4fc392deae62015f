//! Abstract input events consumed by the editor.
//!
//! The host window system translates its native messages into these before
//! handing them to [`crate::Editor`]; the core never sees toolkit types.

use crate::shapes::ShapeKind;
use serde::{Deserialize, Serialize};

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Delete,
}

/// Menu / command events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    AddLine,
    AddCircle,
    AddArc,
    AddRing,
    AddPolyline,
    AddPolygon,
    AddTriangle,
    AddParallelogram,
    SelectMode,
    MirrorVertical,
    MirrorHorizontal,
    RotateSelected,
    ToggleVisibility(ShapeKind),
}

/// A single event delivered to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { x: i32, y: i32 },
    Key(Key),
    Command(Command),
}
