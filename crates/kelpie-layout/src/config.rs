use serde::{Deserialize, Serialize};

/// Layout constants, passed explicitly into every engine entry point so the
/// engine is testable with varied values. Defaults are the canonical editor
/// values. Angles are degrees here and converted to radians once, at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Node circle radius; also the trim distance for edge endpoints.
    pub node_radius: f64,

    /// Curve-offset spacing between parallel edges (offset units).
    pub parallel_spacing: f64,
    /// Midpoint displacement in px per curve-offset unit.
    pub curve_scale: f64,
    /// Extra label displacement along the perpendicular per offset unit.
    pub label_nudge: f64,

    /// Angular placement of the first self-loop.
    pub loop_base_angle_deg: f64,
    /// Rotation added per self-loop index.
    pub loop_angle_step_deg: f64,
    /// Size of the first self-loop.
    pub loop_base_size: f64,
    /// Size added per self-loop index.
    pub loop_size_step: f64,
    /// Half-angle between a loop's anchor points on the node circle.
    pub loop_spread_deg: f64,
    /// Control-point distance = loop size x this.
    pub loop_control_scale: f64,
    /// Label distance = loop size x this. Must stay below
    /// `loop_control_scale` so the label sits inside the loop.
    pub loop_label_scale: f64,

    /// Gap between the node bounding box and a fixed-direction panel.
    pub panel_gap: f64,
    /// Nominal panel size used by the fixed-direction offsets that place the
    /// panel left of / above the node.
    pub panel_width: f64,
    pub panel_height: f64,
    /// Auto placement: neighbor-scan distance along the primary axis.
    pub panel_reach: f64,
    /// Auto placement: neighbor-scan tolerance on the cross axis.
    pub panel_lateral: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_radius: 40.0,
            parallel_spacing: 0.7,
            curve_scale: 50.0,
            label_nudge: 12.0,
            loop_base_angle_deg: -45.0,
            loop_angle_step_deg: 45.0,
            loop_base_size: 60.0,
            loop_size_step: 20.0,
            loop_spread_deg: 25.0,
            loop_control_scale: 2.5,
            loop_label_scale: 1.75,
            panel_gap: 12.0,
            panel_width: 180.0,
            panel_height: 120.0,
            panel_reach: 150.0,
            panel_lateral: 60.0,
        }
    }
}
