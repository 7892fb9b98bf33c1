//! Viewport state and the screen/canvas coordinate transform.
//!
//! The transform contract: `screen_to_canvas` and `canvas_to_screen` are
//! exact inverses (within floating-point tolerance), and every pointer
//! coordinate entering canvas-space logic goes through them.

use kelpie_layout::geom::{Point, Vector, point, vector};
use serde::{Deserialize, Serialize};

/// Host adapter for the one DOM-ish lookup the core needs: where the
/// rendering surface sits in client coordinates. Injected so the transform
/// math stays host-independent.
pub trait ContainerBounds {
    fn origin(&self) -> Point;
}

/// Fixed container origin, for tests and offscreen hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedOrigin {
    pub left: f64,
    pub top: f64,
}

impl ContainerBounds for FixedOrigin {
    fn origin(&self) -> Point {
        point(self.left, self.top)
    }
}

/// Interaction constants. Zoom steps are multiplicative; the coarse pair
/// backs toolbar buttons, the fine pair backs the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CanvasConfig {
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step_in: f64,
    pub zoom_step_out: f64,
    pub wheel_step_in: f64,
    pub wheel_step_out: f64,
    /// Shift+wheel horizontal pan distance per wheel-delta unit.
    pub wheel_pan_speed: f64,
    /// Pixel delta applied on both axes when duplicating a node.
    pub duplicate_offset: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            zoom_min: 0.2,
            zoom_max: 4.0,
            zoom_step_in: 1.2,
            zoom_step_out: 0.8,
            wheel_step_in: 1.1,
            wheel_step_out: 0.9,
            wheel_pan_speed: 1.0,
            duplicate_offset: 40.0,
        }
    }
}

/// Pan offset plus zoom factor. Zoom is always inside the configured range;
/// pan is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Vector,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: vector(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

impl Viewport {
    pub fn screen_to_canvas(&self, origin: Point, client: Point) -> Point {
        point(
            (client.x - origin.x - self.pan.x) / self.zoom,
            (client.y - origin.y - self.pan.y) / self.zoom,
        )
    }

    pub fn canvas_to_screen(&self, origin: Point, canvas: Point) -> Point {
        point(
            canvas.x * self.zoom + self.pan.x + origin.x,
            canvas.y * self.zoom + self.pan.y + origin.y,
        )
    }

    /// Multiplicative zoom step, clamped into the configured range.
    pub fn zoom_by(&mut self, factor: f64, cfg: &CanvasConfig) {
        self.zoom = (self.zoom * factor).clamp(cfg.zoom_min, cfg.zoom_max);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
