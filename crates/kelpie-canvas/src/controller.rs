//! The pointer/keyboard interaction state machine.
//!
//! Four orthogonal axes, each an explicit tagged state so illegal
//! combinations are unrepresentable: viewport gesture, node drag, connection
//! gesture, selection. All operations are no-ops on stale ids and on
//! malformed pointer sequences (an up without a down, a move without a
//! press).

use crate::viewport::{CanvasConfig, ContainerBounds, Viewport};
use kelpie_core::model::NodeDataPatch;
use kelpie_core::store::SchemaStore;
use kelpie_layout::geom::{LayoutPoint, Point, Vector, vector};

/// What the pointer is over, as resolved by the host's hit-testing (or the
/// `kelpie_layout::hit` helpers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Node(String),
    /// The connection handle on a node's rim, not the node body.
    NodeHandle(String),
    Edge(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    /// Ctrl on Linux/Windows, Cmd on macOS.
    pub primary: bool,
}

/// Keys the canvas reacts to; the host maps everything else away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Escape,
    D,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewportGesture {
    #[default]
    Idle,
    /// `grab` is `client - pan` at press time; every move sets
    /// `pan = client - grab`. Drag-relative, so the pan never drifts with
    /// frame rate.
    Panning { grab: Vector },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        node_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectGesture {
    #[default]
    Idle,
    Connecting {
        source_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Node(String),
    Edge(String),
}

impl Selection {
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Selection::Node(id) => Some(id),
            _ => None,
        }
    }

    pub fn edge_id(&self) -> Option<&str> {
        match self {
            Selection::Edge(id) => Some(id),
            _ => None,
        }
    }
}

pub struct CanvasController {
    viewport: Viewport,
    viewport_gesture: ViewportGesture,
    drag: DragGesture,
    connect: ConnectGesture,
    selection: Selection,
    hovered: Option<String>,
    /// Last pointer position in canvas space; feeds the connection preview.
    pointer_canvas: Option<Point>,
    bounds: Box<dyn ContainerBounds>,
    config: CanvasConfig,
}

impl CanvasController {
    pub fn new(bounds: impl ContainerBounds + 'static, config: CanvasConfig) -> Self {
        Self {
            viewport: Viewport::default(),
            viewport_gesture: ViewportGesture::Idle,
            drag: DragGesture::Idle,
            connect: ConnectGesture::Idle,
            selection: Selection::None,
            hovered: None,
            pointer_canvas: None,
            bounds: Box::new(bounds),
            config,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn drag(&self) -> &DragGesture {
        &self.drag
    }

    pub fn connect(&self) -> &ConnectGesture {
        &self.connect
    }

    pub fn is_panning(&self) -> bool {
        matches!(self.viewport_gesture, ViewportGesture::Panning { .. })
    }

    pub fn screen_to_canvas(&self, client: Point) -> Point {
        self.viewport.screen_to_canvas(self.bounds.origin(), client)
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        self.viewport.canvas_to_screen(self.bounds.origin(), canvas)
    }

    // ---- pointer ----

    pub fn on_pointer_down(
        &mut self,
        store: &dyn SchemaStore,
        target: &PointerTarget,
        client: Point,
    ) {
        self.pointer_canvas = Some(self.screen_to_canvas(client));
        match target {
            PointerTarget::Canvas => {
                self.selection = Selection::None;
                self.viewport_gesture = ViewportGesture::Panning {
                    grab: vector(client.x - self.viewport.pan.x, client.y - self.viewport.pan.y),
                };
            }
            PointerTarget::Node(id) => {
                if store.node(id).is_none() {
                    return;
                }
                self.selection = Selection::Node(id.clone());
                self.drag = DragGesture::Dragging {
                    node_id: id.clone(),
                };
            }
            PointerTarget::NodeHandle(id) => {
                if store.node(id).is_none() {
                    return;
                }
                tracing::debug!(source = %id, "connection gesture started");
                self.connect = ConnectGesture::Connecting {
                    source_id: id.clone(),
                };
            }
            PointerTarget::Edge(id) => {
                if store.edge(id).is_none() {
                    return;
                }
                self.selection = Selection::Edge(id.clone());
            }
        }
    }

    pub fn on_pointer_move(
        &mut self,
        store: &mut dyn SchemaStore,
        target: &PointerTarget,
        client: Point,
    ) {
        let canvas = self.screen_to_canvas(client);
        self.pointer_canvas = Some(canvas);

        self.hovered = match target {
            PointerTarget::Node(id) | PointerTarget::NodeHandle(id) => Some(id.clone()),
            _ => None,
        };

        if let ViewportGesture::Panning { grab } = &self.viewport_gesture {
            self.viewport.pan = vector(client.x - grab.x, client.y - grab.y);
        }

        if let DragGesture::Dragging { node_id } = &self.drag {
            store.update_node_position(node_id, canvas.x, canvas.y);
        }
    }

    pub fn on_pointer_up(
        &mut self,
        store: &mut dyn SchemaStore,
        target: &PointerTarget,
        client: Point,
    ) {
        self.pointer_canvas = Some(self.screen_to_canvas(client));

        if let ConnectGesture::Connecting { source_id } = std::mem::take(&mut self.connect) {
            match target {
                // Releasing over the source itself produces a self-edge.
                PointerTarget::Node(id) | PointerTarget::NodeHandle(id) => {
                    let _ = store.create_edge(&source_id, id, None);
                }
                _ => {
                    tracing::debug!(source = %source_id, "connection gesture abandoned");
                }
            }
        }

        self.viewport_gesture = ViewportGesture::Idle;
        self.drag = DragGesture::Idle;
    }

    /// Pointer left the surface: end positional gestures. An in-flight
    /// connection survives until release, Escape, or blur.
    pub fn on_pointer_leave(&mut self) {
        self.viewport_gesture = ViewportGesture::Idle;
        self.drag = DragGesture::Idle;
        self.hovered = None;
        self.pointer_canvas = None;
    }

    /// Focus loss aborts everything in flight; no store mutation.
    pub fn on_blur(&mut self) {
        self.viewport_gesture = ViewportGesture::Idle;
        self.drag = DragGesture::Idle;
        self.connect = ConnectGesture::Idle;
    }

    // ---- wheel + zoom ----

    /// Wheel input zooms multiplicatively; Shift redirects the same input to
    /// horizontal panning.
    pub fn on_wheel(&mut self, delta_y: f64, modifiers: Modifiers) {
        if delta_y == 0.0 {
            return;
        }
        if modifiers.shift {
            self.viewport.pan.x -= delta_y * self.config.wheel_pan_speed;
            return;
        }
        let factor = if delta_y < 0.0 {
            self.config.wheel_step_in
        } else {
            self.config.wheel_step_out
        };
        self.viewport.zoom_by(factor, &self.config);
    }

    pub fn zoom_in(&mut self) {
        let factor = self.config.zoom_step_in;
        self.viewport.zoom_by(factor, &self.config);
    }

    pub fn zoom_out(&mut self) {
        let factor = self.config.zoom_step_out;
        self.viewport.zoom_by(factor, &self.config);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    /// Restores a persisted view. Zoom is clamped into the configured range;
    /// the invariant holds no matter what the host saved.
    pub fn set_view(&mut self, pan: Vector, zoom: f64) {
        self.viewport.pan = pan;
        self.viewport.zoom = zoom.clamp(self.config.zoom_min, self.config.zoom_max);
    }

    // ---- selection ----

    pub fn select_node(&mut self, store: &dyn SchemaStore, id: &str) {
        if store.node(id).is_none() {
            return;
        }
        self.selection = Selection::Node(id.to_string());
    }

    pub fn select_edge(&mut self, store: &dyn SchemaStore, id: &str) {
        if store.edge(id).is_none() {
            return;
        }
        self.selection = Selection::Edge(id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    // ---- keyboard ----

    /// Process-wide shortcuts. `text_input_focused` suppresses everything:
    /// typing in a form field must never edit the diagram.
    pub fn on_key(
        &mut self,
        store: &mut dyn SchemaStore,
        key: Key,
        modifiers: Modifiers,
        text_input_focused: bool,
    ) {
        if text_input_focused {
            return;
        }
        match key {
            Key::Delete | Key::Backspace => self.delete_selection(store),
            Key::Escape => {
                self.selection = Selection::None;
                self.connect = ConnectGesture::Idle;
                self.viewport_gesture = ViewportGesture::Idle;
                self.drag = DragGesture::Idle;
            }
            Key::D if modifiers.primary => self.duplicate_selection(store),
            Key::D => {}
        }
    }

    pub fn delete_selection(&mut self, store: &mut dyn SchemaStore) {
        match std::mem::take(&mut self.selection) {
            Selection::Node(id) => {
                if matches!(&self.drag, DragGesture::Dragging { node_id } if *node_id == id) {
                    self.drag = DragGesture::Idle;
                }
                if self.hovered.as_deref() == Some(id.as_str()) {
                    self.hovered = None;
                }
                store.delete_node(&id);
            }
            Selection::Edge(id) => store.delete_edge(&id),
            Selection::None => {}
        }
    }

    /// Clones the selected node offset by the configured delta on both axes
    /// and selects the clone.
    pub fn duplicate_selection(&mut self, store: &mut dyn SchemaStore) {
        let Some(id) = self.selection.node_id() else {
            return;
        };
        let Some(node) = store.node(id) else {
            return;
        };
        let (x, y) = (
            node.x + self.config.duplicate_offset,
            node.y + self.config.duplicate_offset,
        );
        let patch = NodeDataPatch {
            label: Some(node.data.label.clone()),
            properties: Some(node.data.properties.clone()),
            color: Some(node.data.color.clone()),
            definition: node.data.definition.clone(),
            panel_position: node.data.panel_position,
        };
        let clone_id = store.create_node(x, y, Some(patch)).id.clone();
        self.selection = Selection::Node(clone_id);
    }

    // ---- connection preview ----

    /// Preview line for an in-flight connection gesture: source node center
    /// to the live pointer position, both in canvas space.
    pub fn connection_preview(&self, store: &dyn SchemaStore) -> Option<(LayoutPoint, LayoutPoint)> {
        let ConnectGesture::Connecting { source_id } = &self.connect else {
            return None;
        };
        let source = store.node(source_id)?;
        let pointer = self.pointer_canvas?;
        Some((
            LayoutPoint {
                x: source.x,
                y: source.y,
            },
            pointer.into(),
        ))
    }
}
