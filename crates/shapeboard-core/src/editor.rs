//! Editor session: selection, keyboard editing, command dispatch.

use crate::canvas::Document;
use crate::input::{Command, InputEvent, Key};
use crate::render::Visibility;
use crate::shapes::{Point, Rgba, ShapeId};
use crate::tools::{ToolKind, ToolManager};
use log::debug;

/// Services the embedding application provides to the core.
///
/// Prompts are modal from the core's perspective: each call returns only
/// once the user has answered or dismissed the dialog.
pub trait Host {
    /// Ask the user for a vertex count. 0 means cancelled.
    fn ask_point_count(&mut self) -> u32;
    /// Ask the user for an angle in degrees. 0.0 means cancelled.
    fn ask_angle(&mut self) -> f64;
    /// Schedule a repaint of the canvas.
    fn request_redraw(&mut self);
}

/// Arrow-key nudge distance in canvas units.
const NUDGE_STEP: i32 = 10;

/// Stroke color marking the selected shape.
const SELECTED_COLOR: Rgba = Rgba {
    r: 204,
    g: 36,
    b: 29,
    a: 255,
};

/// One open editing session.
///
/// Owns the document, the construction state machine, the selection and
/// the visibility flags; event handlers take the session explicitly, so
/// no interaction state hides in globals.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub document: Document,
    pub tools: ToolManager,
    pub visibility: Visibility,
    selection: Option<ShapeId>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected shape's id, if any.
    pub fn selection(&self) -> Option<ShapeId> {
        self.selection
    }

    /// Route one abstract input event.
    pub fn handle_event(&mut self, event: InputEvent, host: &mut dyn Host) {
        match event {
            InputEvent::PointerDown { x, y } => self.on_pointer_down(x, y, host),
            InputEvent::Key(key) => self.on_key(key, host),
            InputEvent::Command(command) => self.on_command(command, host),
        }
    }

    /// A pointer click either picks (select mode) or feeds the armed
    /// construction tool.
    pub fn on_pointer_down(&mut self, x: i32, y: i32, host: &mut dyn Host) {
        if self.tools.current_tool() == ToolKind::Select {
            self.select_at(x, y);
            host.request_redraw();
        } else if let Some(shape) = self.tools.add_point(Point::new(x, y), host) {
            self.document.add(shape);
            host.request_redraw();
        }
    }

    /// Keyboard editing; inert without a selection.
    pub fn on_key(&mut self, key: Key, host: &mut dyn Host) {
        let Some(id) = self.selection else {
            return;
        };
        match key {
            Key::Left => self.nudge(id, -NUDGE_STEP, 0),
            Key::Right => self.nudge(id, NUDGE_STEP, 0),
            Key::Up => self.nudge(id, 0, -NUDGE_STEP),
            Key::Down => self.nudge(id, 0, NUDGE_STEP),
            Key::Delete => {
                self.document.remove(id);
                self.selection = None;
                debug!("deleted shape {id}");
            }
        }
        host.request_redraw();
    }

    /// Menu command dispatch.
    pub fn on_command(&mut self, command: Command, host: &mut dyn Host) {
        match command {
            Command::AddLine => self.tools.set_tool(ToolKind::Line, host),
            Command::AddCircle => self.tools.set_tool(ToolKind::Circle, host),
            Command::AddArc => self.tools.set_tool(ToolKind::Arc, host),
            Command::AddRing => self.tools.set_tool(ToolKind::Ring, host),
            Command::AddPolyline => self.tools.set_tool(ToolKind::Polyline, host),
            Command::AddPolygon => self.tools.set_tool(ToolKind::Polygon, host),
            Command::AddTriangle => self.tools.set_tool(ToolKind::Triangle, host),
            Command::AddParallelogram => self.tools.set_tool(ToolKind::Parallelogram, host),
            Command::SelectMode => self.tools.cancel(),
            Command::MirrorVertical => self.mirror_selected(true, host),
            Command::MirrorHorizontal => self.mirror_selected(false, host),
            Command::RotateSelected => self.rotate_selected(host),
            Command::ToggleVisibility(kind) => {
                self.visibility.toggle(kind);
                host.request_redraw();
            }
        }
    }

    /// Hit-scan in insertion order; the first match becomes the selection.
    /// The old selection gets its default color back, the new one the
    /// highlight color.
    fn select_at(&mut self, x: i32, y: i32) {
        let hit = self.document.shape_at(x, y);
        if let Some(previous) = self.selection.take() {
            if let Some(shape) = self.document.get_mut(previous) {
                shape.set_color(Rgba::default());
            }
        }
        if let Some(id) = hit {
            if let Some(shape) = self.document.get_mut(id) {
                shape.set_color(SELECTED_COLOR);
            }
            debug!("selected shape {id}");
        }
        self.selection = hit;
    }

    fn nudge(&mut self, id: ShapeId, dx: i32, dy: i32) {
        if let Some(shape) = self.document.get_mut(id) {
            shape.translate(dx, dy);
        }
    }

    fn mirror_selected(&mut self, vertical: bool, host: &mut dyn Host) {
        let Some(id) = self.selection else {
            return;
        };
        if let Some(shape) = self.document.get_mut(id) {
            shape.mirror(vertical);
            host.request_redraw();
        }
    }

    fn rotate_selected(&mut self, host: &mut dyn Host) {
        let Some(id) = self.selection else {
            return;
        };
        let angle = host.ask_angle();
        if angle == 0.0 {
            debug!("rotation prompt cancelled");
            return;
        }
        if let Some(shape) = self.document.get_mut(id) {
            shape.rotate(angle);
            host.request_redraw();
        }
    }
}
