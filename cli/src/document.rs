//! Figma document tree types
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! API payload is ignored during deserialization.

use serde::Deserialize;

/// Node kind as reported by the Figma API `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Document,
    Canvas,
    Frame,
    Group,
    Component,
    ComponentSet,
    Instance,
    Vector,
    #[serde(other)]
    Other,
}

/// A node in the design file's tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            node_type,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<DocumentNode>) -> Self {
        self.children = children;
        self
    }
}

/// Response body of `GET /v1/files/{file}`
#[derive(Debug, Deserialize)]
pub struct FileResponse {
    pub document: DocumentNode,
}
