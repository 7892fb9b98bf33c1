//! Pointer hit-testing in canvas space.
//!
//! Nodes win in reverse collection order (the last-drawn node is on top).
//! Edge tests sample the quadratic; tolerance is the caller's stroke-width
//! concern, not ours.

use crate::config::LayoutConfig;
use crate::edge::{PathGeometry, edge_geometry};
use crate::geom::{Point, point};
use kelpie_core::model::Node;
use kelpie_core::store::SchemaStore;

pub fn node_at<'a>(
    at: Point,
    nodes: impl IntoIterator<Item = &'a Node>,
    cfg: &LayoutConfig,
) -> Option<&'a str> {
    let mut hit = None;
    for node in nodes {
        if (at - point(node.x, node.y)).length() <= cfg.node_radius {
            hit = Some(node.id.as_str());
        }
    }
    hit
}

const EDGE_SAMPLES: usize = 24;

/// Distance from `at` to the drawn curve, by sampling the quadratic.
pub fn distance_to_path(at: Point, geometry: &PathGeometry) -> f64 {
    let a = geometry.start.to_point();
    let c = geometry.control.to_point();
    let b = geometry.end.to_point();

    let mut best = f64::INFINITY;
    for i in 0..=EDGE_SAMPLES {
        let t = i as f64 / EDGE_SAMPLES as f64;
        let mt = 1.0 - t;
        let sample = point(
            mt * mt * a.x + 2.0 * mt * t * c.x + t * t * b.x,
            mt * mt * a.y + 2.0 * mt * t * c.y + t * t * b.y,
        );
        best = best.min((at - sample).length());
    }
    best
}

/// Topmost edge within `tolerance` of `at`, or `None`. Edges with missing
/// endpoints are skipped.
pub fn edge_at(
    at: Point,
    store: &dyn SchemaStore,
    cfg: &LayoutConfig,
    tolerance: f64,
) -> Option<String> {
    let mut hit = None;
    for edge in store.edges() {
        let Some(geometry) = edge_geometry(edge, store, cfg) else {
            continue;
        };
        if distance_to_path(at, &geometry) <= tolerance {
            hit = Some(edge.id.clone());
        }
    }
    hit
}
