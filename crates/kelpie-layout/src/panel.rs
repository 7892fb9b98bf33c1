//! Floating property-panel placement.
//!
//! A concrete direction maps to a fixed offset. `Auto` scans neighboring
//! nodes inside a rectangular proximity window and takes the first free
//! direction in priority order right > left > bottom > top. The heuristic is
//! deliberately greedy: it resolves sparse graphs correctly and tolerates
//! overlap in dense ones.

use crate::config::LayoutConfig;
use kelpie_core::model::{Node, PanelPosition};
use serde::{Deserialize, Serialize};

/// Offset of the panel's top-left corner relative to the node bounding box
/// top-left (the box is the circle's enclosing square).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelOffset {
    pub left: f64,
    pub top: f64,
}

pub fn panel_offset<'a>(
    node: &Node,
    all_nodes: impl IntoIterator<Item = &'a Node>,
    cfg: &LayoutConfig,
) -> PanelOffset {
    match node.data.panel_position {
        Some(position) if position != PanelPosition::Auto => fixed_offset(position, cfg),
        _ => auto_offset(node, all_nodes, cfg),
    }
}

pub fn fixed_offset(position: PanelPosition, cfg: &LayoutConfig) -> PanelOffset {
    let side = cfg.node_radius * 2.0;
    let right = side + cfg.panel_gap;
    let left = -(cfg.panel_gap + cfg.panel_width);
    let below = side + cfg.panel_gap;
    let above = -(cfg.panel_gap + cfg.panel_height);

    match position {
        PanelPosition::Right | PanelPosition::Auto => PanelOffset {
            left: right,
            top: 0.0,
        },
        PanelPosition::Left => PanelOffset { left, top: 0.0 },
        PanelPosition::Bottom => PanelOffset {
            left: 0.0,
            top: below,
        },
        PanelPosition::Top => PanelOffset {
            left: 0.0,
            top: above,
        },
        PanelPosition::TopRight => PanelOffset {
            left: right,
            top: above,
        },
        PanelPosition::BottomRight => PanelOffset {
            left: right,
            top: below,
        },
        PanelPosition::TopLeft => PanelOffset { left, top: above },
        PanelPosition::BottomLeft => PanelOffset { left, top: below },
    }
}

fn auto_offset<'a>(
    node: &Node,
    all_nodes: impl IntoIterator<Item = &'a Node>,
    cfg: &LayoutConfig,
) -> PanelOffset {
    let mut right = false;
    let mut left = false;
    let mut below = false;
    let mut above = false;

    for other in all_nodes {
        if other.id == node.id {
            continue;
        }
        let dx = other.x - node.x;
        let dy = other.y - node.y;

        if dx > 0.0 && dx <= cfg.panel_reach && dy.abs() <= cfg.panel_lateral {
            right = true;
        }
        if dx < 0.0 && -dx <= cfg.panel_reach && dy.abs() <= cfg.panel_lateral {
            left = true;
        }
        if dy > 0.0 && dy <= cfg.panel_reach && dx.abs() <= cfg.panel_lateral {
            below = true;
        }
        if dy < 0.0 && -dy <= cfg.panel_reach && dx.abs() <= cfg.panel_lateral {
            above = true;
        }
    }

    let direction = if !right {
        PanelPosition::Right
    } else if !left {
        PanelPosition::Left
    } else if !below {
        PanelPosition::Bottom
    } else if !above {
        PanelPosition::Top
    } else {
        // Every direction is occupied; overlap on the right beats hiding the
        // panel entirely.
        PanelPosition::Right
    };

    fixed_offset(direction, cfg)
}
