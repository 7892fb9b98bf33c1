#![forbid(unsafe_code)]

//! Headless core of an interactive graph-database schema diagram editor.
//!
//! Three layers compose the core:
//! - [`schema`]: the schema model, the store owning node/edge records, and
//!   the persisted document format.
//! - [`layout`]: pure geometry — edge curves, self-loop fan-out, label and
//!   panel placement, hit-testing.
//! - [`canvas`]: the interaction state machine — pan/zoom, drag, the
//!   connection gesture, selection — plus per-frame scene assembly.
//!
//! A presentation layer renders what [`canvas::Scene`] carries; this crate
//! knows nothing about how.

pub use kelpie_canvas as canvas;
pub use kelpie_core as schema;
pub use kelpie_layout as layout;

pub use kelpie_canvas::{CanvasConfig, CanvasController, Scene};
pub use kelpie_core::{MemoryStore, SchemaDocument, SchemaStore};
pub use kelpie_layout::LayoutConfig;
