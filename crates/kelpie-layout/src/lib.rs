#![forbid(unsafe_code)]

//! Layout geometry for the kelpie diagram editor (headless).
//!
//! Pure placement math over node/edge positions: curved and straight edge
//! paths with trimmed arrow endpoints, self-loop fan-out, label anchors, and
//! floating property-panel placement. No DOM, no pixels-on-screen, no event
//! handling; every function is total.

pub mod config;
pub mod edge;
pub mod geom;
pub mod hit;
pub mod panel;

pub use config::LayoutConfig;
pub use edge::{PathGeometry, edge_curve_offset, edge_geometry, edge_path, self_loop_index};
pub use geom::{LayoutPoint, Point, Vector, point, vector};
pub use hit::{distance_to_path, edge_at, node_at};
pub use panel::{PanelOffset, fixed_offset, panel_offset};
