//! Schema store: the single owner of the node/edge collections.
//!
//! Mutators are silent no-ops for unknown ids. The editing UI guards most
//! call sites already, but the store must stay well-defined when called
//! directly with a stale id.

use crate::model::{
    DEFAULT_EDGE_COLOR, DEFAULT_NODE_LABEL, Edge, EdgeData, EdgeDataPatch, Node, NodeData,
    NodeDataPatch, RELATES_TO, SELF_REF, default_node_color,
};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Time-derived record id: `<prefix>-<unix millis>-<seq>`. The sequence keeps
/// ids unique when several records are created within the same millisecond.
pub fn timed_id(prefix: &str) -> String {
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    let millis = chrono::Utc::now().timestamp_millis();
    format!("{prefix}-{millis}-{seq}")
}

/// The operations the interaction layer (and import/export) drive.
pub trait SchemaStore {
    fn node(&self, id: &str) -> Option<&Node>;
    fn edge(&self, id: &str) -> Option<&Edge>;

    /// Nodes in insertion order.
    fn nodes(&self) -> Vec<&Node>;
    /// Edges in insertion order. Curve-offset grouping relies on this order
    /// being stable across calls.
    fn edges(&self) -> Vec<&Edge>;

    fn node_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    fn create_node(&mut self, x: f64, y: f64, patch: Option<NodeDataPatch>) -> &Node;
    /// Returns `None` (and creates nothing) when either endpoint is unknown.
    fn create_edge(&mut self, source: &str, target: &str, patch: Option<EdgeDataPatch>)
    -> Option<&Edge>;

    fn update_node_data(&mut self, id: &str, patch: NodeDataPatch);
    fn update_edge_data(&mut self, id: &str, patch: EdgeDataPatch);
    fn update_node_position(&mut self, id: &str, x: f64, y: f64);

    /// Removes the node and every edge whose source or target is `id`.
    fn delete_node(&mut self, id: &str);
    fn delete_edge(&mut self, id: &str);

    /// Swaps source and target in place (same id, same data).
    fn reverse_edge(&mut self, id: &str);

    /// Bulk load; replaces the current collections wholesale.
    fn replace_all(&mut self, nodes: Vec<Node>, edges: Vec<Edge>);
    fn clear(&mut self);
}

/// In-memory `SchemaStore`. Insertion order is preserved for both
/// collections; property order lives inside the records themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    nodes: IndexMap<String, Node>,
    edges: IndexMap<String, Edge>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaStore for MemoryStore {
    fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.get(id)
    }

    fn nodes(&self) -> Vec<&Node> {
        self.nodes.values().collect()
    }

    fn edges(&self) -> Vec<&Edge> {
        self.edges.values().collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn create_node(&mut self, x: f64, y: f64, patch: Option<NodeDataPatch>) -> &Node {
        let id = timed_id("node");
        let mut data = NodeData {
            label: DEFAULT_NODE_LABEL.to_string(),
            properties: Vec::new(),
            color: default_node_color(self.nodes.len()).to_string(),
            definition: None,
            panel_position: None,
        };
        if let Some(patch) = patch {
            data.merge(patch);
        }
        tracing::debug!(node = %id, "create node");
        let node = Node {
            id: id.clone(),
            x,
            y,
            data,
        };
        self.nodes.entry(id).or_insert(node)
    }

    fn create_edge(
        &mut self,
        source: &str,
        target: &str,
        patch: Option<EdgeDataPatch>,
    ) -> Option<&Edge> {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return None;
        }
        let id = timed_id("edge");
        let default_type = if source == target { SELF_REF } else { RELATES_TO };
        let mut data = EdgeData {
            relationship_type: default_type.to_string(),
            properties: Vec::new(),
            color: DEFAULT_EDGE_COLOR.to_string(),
            label_style: None,
        };
        if let Some(patch) = patch {
            data.merge(patch);
        }
        tracing::debug!(edge = %id, source, target, "create edge");
        let edge = Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            data,
        };
        Some(self.edges.entry(id).or_insert(edge))
    }

    fn update_node_data(&mut self, id: &str, patch: NodeDataPatch) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.data.merge(patch);
    }

    fn update_edge_data(&mut self, id: &str, patch: EdgeDataPatch) {
        let Some(edge) = self.edges.get_mut(id) else {
            return;
        };
        edge.data.merge(patch);
    }

    fn update_node_position(&mut self, id: &str, x: f64, y: f64) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        node.x = x;
        node.y = y;
    }

    fn delete_node(&mut self, id: &str) {
        if self.nodes.shift_remove(id).is_none() {
            return;
        }
        self.edges.retain(|_, e| e.source != id && e.target != id);
        tracing::debug!(node = id, "delete node (cascading)");
    }

    fn delete_edge(&mut self, id: &str) {
        let _ = self.edges.shift_remove(id);
    }

    fn reverse_edge(&mut self, id: &str) {
        let Some(edge) = self.edges.get_mut(id) else {
            return;
        };
        std::mem::swap(&mut edge.source, &mut edge.target);
    }

    fn replace_all(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        self.edges = edges.into_iter().map(|e| (e.id.clone(), e)).collect();
        tracing::debug!(
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "replaced schema"
        );
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
