//! Schema model types.
//!
//! These are the canonical records the store owns and the document format
//! serializes. Field names follow the exchange format (camelCase), so an
//! exported document round-trips byte-compatible with the in-memory model.

use serde::{Deserialize, Serialize};

/// Node fill colors, cycled by current node count when a node is created.
pub const NODE_COLOR_PALETTE: [&str; 8] = [
    "#4C8EDA", "#FFC454", "#8DCC93", "#F79767", "#C990C0", "#57C7E3", "#F16667", "#D9C8AE",
];

pub const DEFAULT_EDGE_COLOR: &str = "#848484";

pub const DEFAULT_NODE_LABEL: &str = "NewNode";

/// Default relationship type for an edge whose source and target differ.
pub const RELATES_TO: &str = "RELATES_TO";
/// Default relationship type for a self-edge.
pub const SELF_REF: &str = "SELF_REF";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub data: NodeData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(
        default,
        rename = "propertyPanelPosition",
        skip_serializing_if = "Option::is_none"
    )]
    pub panel_position: Option<PanelPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}

impl Edge {
    pub fn is_self(&self) -> bool {
        self.source == self.target
    }

    /// True when `other` connects the same unordered node pair
    /// (direction-insensitive; self-edges pair only with the same node).
    pub fn same_pair(&self, other: &Edge) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeData {
    pub relationship_type: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_style: Option<LabelStyle>,
}

/// A property of a node label or relationship type. Order within the owning
/// `properties` list is insertion order and is display-significant.
/// Duplicate names are permitted; validation belongs to the editing UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: PropertyType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub indexed: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: PropertyType) -> Self {
        Self {
            name: name.into(),
            ty,
            required: false,
            unique: false,
            indexed: false,
        }
    }
}

/// Supported graph-database property types, serialized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyType {
    #[default]
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Time,
    LocalTime,
    DateTime,
    LocalDateTime,
    Duration,
    Point,
    StringArray,
    IntegerArray,
    FloatArray,
    BooleanArray,
    Map,
}

/// Placement rule for a node's floating property panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelPosition {
    #[default]
    Auto,
    Right,
    Left,
    Top,
    Bottom,
    TopRight,
    BottomRight,
    TopLeft,
    BottomLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    Inline,
    Top,
    Bottom,
}

/// Shallow-merge patch for `NodeData`. A `Some` field overwrites, `None`
/// leaves the current value.
#[derive(Debug, Clone, Default)]
pub struct NodeDataPatch {
    pub label: Option<String>,
    pub properties: Option<Vec<Property>>,
    pub color: Option<String>,
    pub definition: Option<String>,
    pub panel_position: Option<PanelPosition>,
}

impl NodeData {
    pub fn merge(&mut self, patch: NodeDataPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(properties) = patch.properties {
            self.properties = properties;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(definition) = patch.definition {
            self.definition = Some(definition);
        }
        if let Some(panel_position) = patch.panel_position {
            self.panel_position = Some(panel_position);
        }
    }
}

/// Shallow-merge patch for `EdgeData`.
#[derive(Debug, Clone, Default)]
pub struct EdgeDataPatch {
    pub relationship_type: Option<String>,
    pub properties: Option<Vec<Property>>,
    pub color: Option<String>,
    pub label_style: Option<LabelStyle>,
}

impl EdgeData {
    pub fn merge(&mut self, patch: EdgeDataPatch) {
        if let Some(relationship_type) = patch.relationship_type {
            self.relationship_type = relationship_type;
        }
        if let Some(properties) = patch.properties {
            self.properties = properties;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(label_style) = patch.label_style {
            self.label_style = Some(label_style);
        }
    }
}

pub fn default_node_color(node_count: usize) -> &'static str {
    NODE_COLOR_PALETTE[node_count % NODE_COLOR_PALETTE.len()]
}
