//! Edge path geometry: parallel-edge curve offsets, self-loop fan-out, label
//! and arrow anchors.
//!
//! Everything here is total: no input panics, and degenerate inputs (zero
//! distance between distinct endpoints) resolve to a safe geometry instead
//! of NaN.

use crate::config::LayoutConfig;
use crate::geom::{LayoutPoint, Point, point, unit_at, vector};
use kelpie_core::model::Edge;
use kelpie_core::store::SchemaStore;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Rendering geometry for one edge.
///
/// `start`/`control`/`end` describe the quadratic Bezier structurally (for a
/// straight edge the control point is the chord midpoint); `path` is the same
/// curve as SVG path data for direct attribute binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathGeometry {
    pub path: String,
    pub start: LayoutPoint,
    pub control: LayoutPoint,
    pub end: LayoutPoint,
    /// Label anchor.
    pub label: LayoutPoint,
    /// Arrow anchor (the trimmed target endpoint).
    pub arrow: LayoutPoint,
    /// Arrow rotation in degrees (tangent direction at the endpoint).
    pub arrow_angle_deg: f64,
    /// Unit perpendicular of the chord; absent for self-loops and
    /// degenerate geometry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perp: Option<LayoutPoint>,
}

/// Curve offset separating edges that share the same unordered node pair.
///
/// A lone edge runs straight (offset 0). Groups of N are centered
/// symmetrically around the straight line in stable collection order, so no
/// two parallel edges render on an identical curve.
pub fn edge_curve_offset<'a>(
    edge: &Edge,
    all_edges: impl IntoIterator<Item = &'a Edge>,
    cfg: &LayoutConfig,
) -> f64 {
    let related: Vec<&Edge> = all_edges.into_iter().filter(|e| e.same_pair(edge)).collect();
    if related.len() <= 1 {
        return 0.0;
    }
    let Some(index) = related.iter().position(|e| e.id == edge.id) else {
        return 0.0;
    };
    (index as f64 - (related.len() as f64 - 1.0) / 2.0) * cfg.parallel_spacing
}

/// Index of `edge` within the ordered self-edges of its node. Staggers
/// multiple self-loops so they fan out instead of stacking.
pub fn self_loop_index<'a>(edge: &Edge, all_edges: impl IntoIterator<Item = &'a Edge>) -> usize {
    all_edges
        .into_iter()
        .filter(|e| e.is_self() && e.source == edge.source)
        .position(|e| e.id == edge.id)
        .unwrap_or(0)
}

/// Computes the drawn path between two node centers.
///
/// `self_loop` carries the loop index when source and target are the same
/// node; a self-relationship must render as a loop, never a degenerate line.
pub fn edge_path(
    source: Point,
    target: Point,
    curve_offset: f64,
    self_loop: Option<usize>,
    cfg: &LayoutConfig,
) -> PathGeometry {
    if let Some(index) = self_loop {
        return self_loop_path(source, index, cfg);
    }

    let chord = target - source;
    let dist = chord.length();
    if dist < 1e-6 {
        // Coincident endpoints without self-loop handling: callers that skip
        // `self_loop_index` still get a finite, renderable geometry.
        return degenerate_path(source);
    }

    let dir = chord / dist;
    let perp = vector(-dir.y, dir.x);
    let start = source + dir * cfg.node_radius;
    let end = target - dir * cfg.node_radius;
    let mid = point((start.x + end.x) / 2.0, (start.y + end.y) / 2.0);
    let control = mid + perp * (curve_offset * cfg.curve_scale);

    // Quadratic midpoint (t = 0.5), nudged further out for stronger curves so
    // stacked labels separate with their edges.
    let curve_mid = point(
        0.25 * start.x + 0.5 * control.x + 0.25 * end.x,
        0.25 * start.y + 0.5 * control.y + 0.25 * end.y,
    );
    let label = curve_mid + perp * (curve_offset * cfg.label_nudge);

    let tangent = end - control;
    let arrow_angle_deg = tangent.y.atan2(tangent.x).to_degrees();

    let path = if curve_offset == 0.0 {
        line_data(start, end)
    } else {
        quad_data(start, control, end)
    };

    PathGeometry {
        path,
        start: start.into(),
        control: control.into(),
        end: end.into(),
        label: label.into(),
        arrow: end.into(),
        arrow_angle_deg,
        perp: Some(LayoutPoint {
            x: perp.x,
            y: perp.y,
        }),
    }
}

fn self_loop_path(center: Point, index: usize, cfg: &LayoutConfig) -> PathGeometry {
    let base = (cfg.loop_base_angle_deg + index as f64 * cfg.loop_angle_step_deg).to_radians();
    let spread = cfg.loop_spread_deg.to_radians();
    let size = cfg.loop_base_size + index as f64 * cfg.loop_size_step;

    let start = center + unit_at(base - spread) * cfg.node_radius;
    let end = center + unit_at(base + spread) * cfg.node_radius;
    let control = center + unit_at(base) * (size * cfg.loop_control_scale);
    let label = center + unit_at(base) * (size * cfg.loop_label_scale);

    let tangent = end - control;
    let arrow_angle_deg = tangent.y.atan2(tangent.x).to_degrees();

    PathGeometry {
        path: quad_data(start, control, end),
        start: start.into(),
        control: control.into(),
        end: end.into(),
        label: label.into(),
        arrow: end.into(),
        arrow_angle_deg,
        perp: None,
    }
}

fn degenerate_path(at: Point) -> PathGeometry {
    PathGeometry {
        path: line_data(at, at),
        start: at.into(),
        control: at.into(),
        end: at.into(),
        label: at.into(),
        arrow: at.into(),
        arrow_angle_deg: 0.0,
        perp: None,
    }
}

/// Resolves endpoints through the store and composes offset, loop index, and
/// path math. `None` when either endpoint no longer exists; filtering missing
/// nodes is the caller's contract.
pub fn edge_geometry(
    edge: &Edge,
    store: &dyn SchemaStore,
    cfg: &LayoutConfig,
) -> Option<PathGeometry> {
    let source = store.node(&edge.source)?;
    let target = store.node(&edge.target)?;
    let edges = store.edges();
    let (offset, self_loop) = if edge.is_self() {
        (0.0, Some(self_loop_index(edge, edges)))
    } else {
        (edge_curve_offset(edge, edges, cfg), None)
    };
    Some(edge_path(
        point(source.x, source.y),
        point(target.x, target.y),
        offset,
        self_loop,
        cfg,
    ))
}

fn line_data(a: Point, b: Point) -> String {
    let mut out = String::new();
    let _ = write!(out, "M{},{}", fmt_path(a.x), fmt_path(a.y));
    let _ = write!(out, "L{},{}", fmt_path(b.x), fmt_path(b.y));
    out
}

fn quad_data(a: Point, c: Point, b: Point) -> String {
    let mut out = String::new();
    let _ = write!(out, "M{},{}", fmt_path(a.x), fmt_path(a.y));
    let _ = write!(
        out,
        "Q{},{} {},{}",
        fmt_path(c.x),
        fmt_path(c.y),
        fmt_path(b.x),
        fmt_path(b.y)
    );
    out
}

/// Path-data number formatting: three fractional digits, trailing zeros
/// trimmed (the D3 `d3-path` convention).
fn fmt_path(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    let mut s = format!("{r:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::fmt_path;

    #[test]
    fn fmt_path_trims_trailing_zeros() {
        assert_eq!(fmt_path(100.0), "100");
        assert_eq!(fmt_path(12.5), "12.5");
        assert_eq!(fmt_path(0.1234), "0.123");
    }

    #[test]
    fn fmt_path_normalizes_negative_zero() {
        assert_eq!(fmt_path(-0.0001), "0");
        assert_eq!(fmt_path(f64::NAN), "0");
    }
}
