#![forbid(unsafe_code)]

//! Interaction core for the kelpie diagram editor (headless).
//!
//! Translates raw pointer/wheel/keyboard input into viewport, selection, and
//! gesture state, and into schema-store mutations. Holds no rendering
//! geometry itself; the per-frame [`Scene`] is assembled on demand from the
//! store plus the layout engine. Fully synchronous: every operation
//! completes within the handling of one input event.

pub mod controller;
pub mod scene;
pub mod viewport;

pub use controller::{
    CanvasController, ConnectGesture, DragGesture, Key, Modifiers, PointerTarget, Selection,
    ViewportGesture,
};
pub use scene::{PreviewLine, Scene, SceneEdge, SceneNode};
pub use viewport::{CanvasConfig, ContainerBounds, FixedOrigin, Viewport};
