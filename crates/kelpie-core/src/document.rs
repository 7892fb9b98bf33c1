//! Persisted/exchanged schema document.
//!
//! Import is strict and all-or-nothing: a document missing its `nodes` or
//! `edges` arrays is rejected whole and the existing store stays untouched.

use crate::error::{Error, Result};
use crate::model::{Edge, Node};
use crate::store::SchemaStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub metadata: DocumentMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMeta {
    pub version: String,
    pub exported_at: DateTime<Utc>,
}

impl Default for DocumentMeta {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION.to_string(),
            exported_at: Utc::now(),
        }
    }
}

/// Snapshot of the store with fresh metadata.
pub fn export(store: &dyn SchemaStore) -> SchemaDocument {
    SchemaDocument {
        nodes: store.nodes().into_iter().cloned().collect(),
        edges: store.edges().into_iter().cloned().collect(),
        metadata: DocumentMeta::default(),
    }
}

pub fn export_json(store: &dyn SchemaStore) -> Result<String> {
    serde_json::to_string_pretty(&export(store)).map_err(|e| Error::DocumentSerialize {
        message: e.to_string(),
    })
}

/// Parses a document without applying it.
pub fn import_json(json: &str) -> Result<SchemaDocument> {
    serde_json::from_str(json).map_err(|e| Error::MalformedDocument {
        message: e.to_string(),
    })
}

/// Parses and bulk-loads a document. On error the store is left as it was.
pub fn import_into(store: &mut dyn SchemaStore, json: &str) -> Result<()> {
    let doc = import_json(json)?;
    tracing::debug!(
        version = %doc.metadata.version,
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        "importing schema document"
    );
    store.replace_all(doc.nodes, doc.edges);
    Ok(())
}
