use kelpie_core::model::{
    Edge, EdgeData, EdgeDataPatch, NODE_COLOR_PALETTE, Node, NodeData, NodeDataPatch, Property,
    PropertyType, RELATES_TO, SELF_REF,
};
use kelpie_core::store::{MemoryStore, SchemaStore, timed_id};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        x,
        y,
        data: NodeData {
            label: id.to_uppercase(),
            properties: Vec::new(),
            color: "#4C8EDA".to_string(),
            definition: None,
            panel_position: None,
        },
    }
}

fn edge(id: &str, source: &str, target: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        data: EdgeData {
            relationship_type: RELATES_TO.to_string(),
            properties: Vec::new(),
            color: "#848484".to_string(),
            label_style: None,
        },
    }
}

#[test]
fn create_node_assigns_defaults() {
    let mut store = MemoryStore::new();
    let created = store.create_node(10.0, 20.0, None);
    assert_eq!(created.data.label, "NewNode");
    assert_eq!(created.data.color, NODE_COLOR_PALETTE[0]);
    assert!(created.data.properties.is_empty());
    assert_eq!((created.x, created.y), (10.0, 20.0));
}

#[test]
fn create_node_cycles_palette_by_node_count() {
    let mut store = MemoryStore::new();
    let mut colors = Vec::new();
    for i in 0..NODE_COLOR_PALETTE.len() + 1 {
        let color = store.create_node(i as f64, 0.0, None).data.color.clone();
        colors.push(color);
    }
    for (i, color) in colors.iter().take(NODE_COLOR_PALETTE.len()).enumerate() {
        assert_eq!(color, NODE_COLOR_PALETTE[i]);
    }
    // Wraps around after exhausting the palette.
    assert_eq!(colors[NODE_COLOR_PALETTE.len()], NODE_COLOR_PALETTE[0]);
}

#[test]
fn create_node_applies_patch_over_defaults() {
    let mut store = MemoryStore::new();
    let created = store.create_node(
        0.0,
        0.0,
        Some(NodeDataPatch {
            label: Some("Person".to_string()),
            ..Default::default()
        }),
    );
    assert_eq!(created.data.label, "Person");
    assert_eq!(created.data.color, NODE_COLOR_PALETTE[0]);
}

#[test]
fn created_ids_are_unique_and_prefixed() {
    let a = timed_id("node");
    let b = timed_id("node");
    assert_ne!(a, b);
    assert!(a.starts_with("node-"));
}

#[test]
fn create_edge_defaults_relates_to_between_distinct_nodes() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0), node("b", 100.0, 0.0)], vec![]);
    let created = store.create_edge("a", "b", None).unwrap();
    assert_eq!(created.data.relationship_type, RELATES_TO);
    assert_eq!(created.source, "a");
    assert_eq!(created.target, "b");
}

#[test]
fn create_edge_defaults_self_ref_for_self_edge() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0)], vec![]);
    let created = store.create_edge("a", "a", None).unwrap();
    assert_eq!(created.data.relationship_type, SELF_REF);
}

#[test]
fn create_edge_with_unknown_endpoint_creates_nothing() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0)], vec![]);
    assert!(store.create_edge("a", "ghost", None).is_none());
    assert!(store.create_edge("ghost", "a", None).is_none());
    assert_eq!(store.edge_count(), 0);
}

#[test]
fn update_node_data_merges_shallowly() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0)], vec![]);
    store.update_node_data(
        "a",
        NodeDataPatch {
            properties: Some(vec![Property::new("name", PropertyType::String)]),
            ..Default::default()
        },
    );
    let a = store.node("a").unwrap();
    assert_eq!(a.data.label, "A");
    assert_eq!(a.data.properties.len(), 1);

    store.update_node_data(
        "a",
        NodeDataPatch {
            label: Some("Person".to_string()),
            ..Default::default()
        },
    );
    let a = store.node("a").unwrap();
    assert_eq!(a.data.label, "Person");
    // Untouched fields survive later patches.
    assert_eq!(a.data.properties.len(), 1);
}

#[test]
fn update_edge_data_merges_shallowly() {
    let mut store = MemoryStore::new();
    store.replace_all(
        vec![node("a", 0.0, 0.0), node("b", 1.0, 0.0)],
        vec![edge("e1", "a", "b")],
    );
    store.update_edge_data(
        "e1",
        EdgeDataPatch {
            relationship_type: Some("KNOWS".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(store.edge("e1").unwrap().data.relationship_type, "KNOWS");
    assert_eq!(store.edge("e1").unwrap().data.color, "#848484");
}

#[test]
fn update_node_position_moves_the_node() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0)], vec![]);
    store.update_node_position("a", 55.0, -12.5);
    let a = store.node("a").unwrap();
    assert_eq!((a.x, a.y), (55.0, -12.5));
}

#[test]
fn mutations_with_stale_ids_are_no_ops() {
    let mut store = MemoryStore::new();
    store.replace_all(vec![node("a", 0.0, 0.0)], vec![]);
    store.update_node_position("ghost", 1.0, 1.0);
    store.update_node_data("ghost", NodeDataPatch::default());
    store.update_edge_data("ghost", EdgeDataPatch::default());
    store.delete_node("ghost");
    store.delete_edge("ghost");
    store.reverse_edge("ghost");
    assert_eq!(store.node_count(), 1);
}

#[test]
fn delete_node_cascades_to_incident_edges() {
    let mut store = MemoryStore::new();
    store.replace_all(
        vec![node("a", 0.0, 0.0), node("b", 1.0, 0.0), node("c", 2.0, 0.0)],
        vec![
            edge("ab", "a", "b"),
            edge("ba", "b", "a"),
            edge("bc", "b", "c"),
            edge("aa", "a", "a"),
        ],
    );
    store.delete_node("a");
    assert!(store.node("a").is_none());
    assert_eq!(store.edge_count(), 1);
    assert!(store.edge("bc").is_some());
    for e in store.edges() {
        assert_ne!(e.source, "a");
        assert_ne!(e.target, "a");
    }
}

#[test]
fn reverse_edge_is_an_involution() {
    let mut store = MemoryStore::new();
    store.replace_all(
        vec![node("a", 0.0, 0.0), node("b", 1.0, 0.0)],
        vec![edge("e1", "a", "b")],
    );
    store.reverse_edge("e1");
    let e = store.edge("e1").unwrap();
    assert_eq!((e.source.as_str(), e.target.as_str()), ("b", "a"));

    store.reverse_edge("e1");
    let e = store.edge("e1").unwrap();
    assert_eq!((e.source.as_str(), e.target.as_str()), ("a", "b"));
}

#[test]
fn collections_keep_insertion_order() {
    let mut store = MemoryStore::new();
    store.replace_all(
        vec![node("z", 0.0, 0.0), node("a", 1.0, 0.0), node("m", 2.0, 0.0)],
        vec![],
    );
    let ids: Vec<&str> = store.nodes().into_iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "a", "m"]);
}

#[test]
fn clear_empties_both_collections() {
    let mut store = MemoryStore::new();
    store.replace_all(
        vec![node("a", 0.0, 0.0), node("b", 1.0, 0.0)],
        vec![edge("e1", "a", "b")],
    );
    store.clear();
    assert_eq!(store.node_count(), 0);
    assert_eq!(store.edge_count(), 0);
}
