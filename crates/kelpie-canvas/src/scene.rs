//! Per-frame scene assembly for the presentation layer.
//!
//! The scene is everything a renderer needs and nothing it must compute:
//! resolved geometry, panel offsets, selection/hover/drag flags, and the
//! viewport transform to apply as a single affine transform to its surface.

use crate::controller::{CanvasController, DragGesture, Selection};
use kelpie_core::model::LabelStyle;
use kelpie_core::store::SchemaStore;
use kelpie_layout::config::LayoutConfig;
use kelpie_layout::edge::{PathGeometry, edge_geometry};
use kelpie_layout::geom::LayoutPoint;
use kelpie_layout::panel::{PanelOffset, panel_offset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_preview: Option<PreviewLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub color: String,
    pub panel: PanelOffset,
    pub selected: bool,
    pub hovered: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneEdge {
    pub id: String,
    /// Stable per-edge identifier for arrow-marker binding.
    pub marker_id: String,
    pub relationship_type: String,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_style: Option<LabelStyle>,
    pub geometry: PathGeometry,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewLine {
    pub from: LayoutPoint,
    pub to: LayoutPoint,
}

impl CanvasController {
    pub fn scene(&self, store: &dyn SchemaStore, layout: &LayoutConfig) -> Scene {
        let nodes = store
            .nodes()
            .into_iter()
            .map(|node| SceneNode {
                id: node.id.clone(),
                x: node.x,
                y: node.y,
                label: node.data.label.clone(),
                color: node.data.color.clone(),
                panel: panel_offset(node, store.nodes(), layout),
                selected: self.selection().node_id() == Some(node.id.as_str()),
                hovered: self.hovered() == Some(node.id.as_str()),
                dragging: matches!(
                    self.drag(),
                    DragGesture::Dragging { node_id } if *node_id == node.id
                ),
            })
            .collect();

        // Edges with missing endpoints are filtered here, per the layout
        // engine's caller-filters contract.
        let edges = store
            .edges()
            .into_iter()
            .filter_map(|edge| {
                let geometry = edge_geometry(edge, store, layout)?;
                Some(SceneEdge {
                    id: edge.id.clone(),
                    marker_id: format!("arrow-{}", edge.id),
                    relationship_type: edge.data.relationship_type.clone(),
                    color: edge.data.color.clone(),
                    label_style: edge.data.label_style,
                    geometry,
                    selected: matches!(
                        self.selection(),
                        Selection::Edge(id) if *id == edge.id
                    ),
                })
            })
            .collect();

        let preview = self
            .connection_preview(store)
            .map(|(from, to)| PreviewLine { from, to });

        Scene {
            pan_x: self.viewport().pan.x,
            pan_y: self.viewport().pan.y,
            zoom: self.viewport().zoom,
            nodes,
            edges,
            connection_preview: preview,
        }
    }
}
