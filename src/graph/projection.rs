//! Neighborhood projection builder.
//!
//! Fetches every relationship touching a focal movie (any type, either
//! direction, uncapped) and folds the rows into a `GraphProjection`:
//!
//! - a node is emitted once per store id, the first time it is seen
//! - a link is emitted for every row, so parallel relationships survive

use crate::neo4j::{GraphStore, NeighborhoodRow, NodeNames};
use anyhow::{Context, Result};
use std::sync::Arc;

use super::models::{GraphProjection, ProjectionBuilderState, ProjectionLink, ProjectionNode};

/// Builds the "local neighborhood graph" view through the `GraphStore` trait.
pub struct ProjectionBuilder {
    store: Arc<dyn GraphStore>,
}

impl ProjectionBuilder {
    /// Create a new builder backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Project the one-hop neighborhood of `title`.
    ///
    /// An unknown title produces an empty projection.
    pub async fn project(&self, title: &str) -> Result<GraphProjection> {
        let rows = self
            .store
            .get_movie_neighborhood(title)
            .await
            .context("Failed to fetch movie neighborhood")?;

        let projection = build_projection(&rows);
        tracing::info!(
            title,
            nodes = projection.nodes.len(),
            links = projection.links.len(),
            "Neighborhood projected"
        );
        Ok(projection)
    }
}

/// Fold relationship rows into a deduplicated projection, preserving row order
pub fn build_projection(rows: &[NeighborhoodRow]) -> GraphProjection {
    let mut state = ProjectionBuilderState::default();

    for row in rows {
        state.add_node(ProjectionNode {
            id: row.source_id,
            label: row.source_label.clone(),
            title: source_title(&row.source_names),
        });
        state.add_node(ProjectionNode {
            id: row.target_id,
            label: row.target_label.clone(),
            title: target_title(&row.target_names),
        });
        state.add_link(ProjectionLink {
            source: row.source_id,
            target: row.target_id,
            rel_type: row.rel_type.clone(),
        });
    }

    state.finish()
}

/// Focal side: title, then movie_title, then name
fn source_title(names: &NodeNames) -> String {
    first_present(&[&names.title, &names.movie_title, &names.name])
}

/// Neighbor side: title, then actor_name, then director_name, then name
fn target_title(names: &NodeNames) -> String {
    first_present(&[
        &names.title,
        &names.actor_name,
        &names.director_name,
        &names.name,
    ])
}

fn first_present(chain: &[&Option<String>]) -> String {
    chain
        .iter()
        .find_map(|candidate| candidate.as_deref())
        .unwrap_or_default()
        .to_string()
}
