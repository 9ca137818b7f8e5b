//! Neighborhood projection data structures.

use crate::neo4j::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One node of the projection, keyed by the store's node id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionNode {
    pub id: NodeId,
    pub label: Option<String>,
    pub title: String,
}

/// One relationship row; parallel relationships stay separate links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionLink {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub rel_type: String,
}

/// Deduplicated node/edge view of a movie's one-hop neighborhood
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphProjection {
    pub nodes: Vec<ProjectionNode>,
    pub links: Vec<ProjectionLink>,
}

/// Accumulates nodes in first-seen order with at most one entry per id.
#[derive(Debug, Default)]
pub struct ProjectionBuilderState {
    nodes: Vec<ProjectionNode>,
    index: HashMap<NodeId, usize>,
    links: Vec<ProjectionLink>,
}

impl ProjectionBuilderState {
    /// Insert the node unless its id is already present
    pub fn add_node(&mut self, node: ProjectionNode) {
        if !self.index.contains_key(&node.id) {
            self.index.insert(node.id, self.nodes.len());
            self.nodes.push(node);
        }
    }

    /// Append a link unconditionally
    pub fn add_link(&mut self, link: ProjectionLink) {
        self.links.push(link);
    }

    pub fn finish(self) -> GraphProjection {
        GraphProjection {
            nodes: self.nodes,
            links: self.links,
        }
    }
}
