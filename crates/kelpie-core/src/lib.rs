#![forbid(unsafe_code)]

//! Graph-database schema model + store (headless).
//!
//! Design goals:
//! - one canonical store abstraction behind the editor surfaces
//! - silent no-ops on stale ids (the UI guards most call sites; the core
//!   must stay well-defined when it doesn't)
//! - document import/export that round-trips the in-memory model exactly

pub mod document;
pub mod error;
pub mod model;
pub mod store;

pub use document::{DocumentMeta, SchemaDocument, export, export_json, import_into, import_json};
pub use error::{Error, Result};
pub use model::{
    Edge, EdgeData, EdgeDataPatch, LabelStyle, Node, NodeData, NodeDataPatch, PanelPosition,
    Property, PropertyType,
};
pub use store::{MemoryStore, SchemaStore, timed_id};
