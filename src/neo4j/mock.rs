//! In-memory mock implementation of GraphStore for testing.
//!
//! Holds a tiny property graph in `tokio::sync::RwLock<Vec<_>>` collections and
//! answers every query with the same semantics as the Cypher in `client.rs`:
//! focal-movie exclusion, optional joins, null years dropping out, limits.
//! Conditionally compiled with `#[cfg(test)]`.

use crate::neo4j::models::*;
use crate::neo4j::traits::GraphStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// A node in the mock graph
#[derive(Debug, Clone)]
pub struct MockNode {
    pub id: NodeId,
    pub label: Option<String>,
    pub names: NodeNames,
    pub year: Option<i64>,
    pub genres: RawGenres,
}

impl MockNode {
    fn is_movie_titled(&self, title: &str) -> bool {
        self.label.as_deref() == Some(MOVIE_LABEL) && self.names.title.as_deref() == Some(title)
    }

    fn is_movie(&self) -> bool {
        self.label.as_deref() == Some(MOVIE_LABEL)
    }
}

/// A directed relationship in the mock graph
#[derive(Debug, Clone)]
pub struct MockRelationship {
    pub start: NodeId,
    pub end: NodeId,
    pub rel_type: String,
}

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    pub nodes: RwLock<Vec<MockNode>>,
    pub relationships: RwLock<Vec<MockRelationship>>,
    /// When set, every query fails with this message
    pub failure: RwLock<Option<String>>,
    next_id: AtomicI64,
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            nodes: RwLock::new(Vec::new()),
            relationships: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
            next_id: AtomicI64::new(0),
        }
    }

    // ========================================================================
    // Seeding helpers
    // ========================================================================

    /// Insert an arbitrary node and return its id
    pub async fn add_node(&self, label: Option<&str>, names: NodeNames) -> NodeId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.nodes.write().await.push(MockNode {
            id,
            label: label.map(str::to_string),
            names,
            year: None,
            genres: RawGenres::Missing,
        });
        id
    }

    /// Insert a movie node
    pub async fn add_movie(
        &self,
        title: &str,
        year: Option<i64>,
        genres: impl Into<RawGenres>,
    ) -> NodeId {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.nodes.write().await.push(MockNode {
            id,
            label: Some(MOVIE_LABEL.to_string()),
            names: NodeNames {
                title: Some(title.to_string()),
                ..Default::default()
            },
            year,
            genres: genres.into(),
        });
        id
    }

    /// Insert an actor node
    pub async fn add_actor(&self, name: &str) -> NodeId {
        self.add_node(
            Some(ACTOR_LABEL),
            NodeNames {
                actor_name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Insert a director node
    pub async fn add_director(&self, name: &str) -> NodeId {
        self.add_node(
            Some(DIRECTOR_LABEL),
            NodeNames {
                director_name: Some(name.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    /// Insert a relationship of any type
    pub async fn relate(&self, start: NodeId, end: NodeId, rel_type: &str) {
        self.relationships.write().await.push(MockRelationship {
            start,
            end,
            rel_type: rel_type.to_string(),
        });
    }

    /// `(actor)-[:Acted_In]->(movie)`
    pub async fn acted_in(&self, actor: NodeId, movie: NodeId) {
        self.relate(actor, movie, ACTED_IN).await;
    }

    /// `(director)-[:Directed_In]->(movie)`
    pub async fn directed(&self, director: NodeId, movie: NodeId) {
        self.relate(director, movie, DIRECTED_IN).await;
    }

    /// Make every subsequent query fail
    pub async fn fail_queries(&self, message: &str) {
        *self.failure.write().await = Some(message.to_string());
    }

    async fn check_failure(&self) -> Result<()> {
        match self.failure.read().await.as_ref() {
            Some(message) => Err(anyhow::anyhow!("{}", message)),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Traversal helpers
    // ========================================================================

    /// Nodes with `label` pointing at `movie` through `rel_type`
    fn incoming<'a>(
        nodes: &'a [MockNode],
        rels: &[MockRelationship],
        movie: NodeId,
        rel_type: &str,
        label: &str,
    ) -> Vec<&'a MockNode> {
        rels.iter()
            .filter(|r| r.end == movie && r.rel_type == rel_type)
            .filter_map(|r| nodes.iter().find(|n| n.id == r.start))
            .filter(|n| n.label.as_deref() == Some(label))
            .collect()
    }

    /// Movies reached from `person` through `rel_type`
    fn outgoing_movies<'a>(
        nodes: &'a [MockNode],
        rels: &[MockRelationship],
        person: NodeId,
        rel_type: &str,
    ) -> Vec<&'a MockNode> {
        rels.iter()
            .filter(|r| r.start == person && r.rel_type == rel_type)
            .filter_map(|r| nodes.iter().find(|n| n.id == r.end))
            .filter(|n| n.is_movie())
            .collect()
    }
}

fn push_distinct(values: &mut Vec<String>, value: Option<&String>) {
    if let Some(value) = value {
        if !values.contains(value) {
            values.push(value.clone());
        }
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    async fn get_movie_info(&self, title: &str) -> Result<Option<MovieInfoRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;
        let rels = self.relationships.read().await;

        let Some(movie) = nodes.iter().find(|n| n.is_movie_titled(title)) else {
            return Ok(None);
        };

        let mut actors = Vec::new();
        for actor in Self::incoming(&nodes, &rels, movie.id, ACTED_IN, ACTOR_LABEL) {
            push_distinct(&mut actors, actor.names.actor_name.as_ref());
        }
        let mut directors = Vec::new();
        for director in Self::incoming(&nodes, &rels, movie.id, DIRECTED_IN, DIRECTOR_LABEL) {
            push_distinct(&mut directors, director.names.director_name.as_ref());
        }

        Ok(Some(MovieInfoRow {
            title: movie.names.title.clone(),
            year: movie.year,
            genres: movie.genres.clone(),
            actors,
            directors,
        }))
    }

    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<Option<String>>> {
        self.check_failure().await?;
        let needle = query.to_lowercase();
        let nodes = self.nodes.read().await;

        let mut hits: Vec<&MockNode> = nodes
            .iter()
            .filter(|n| n.is_movie())
            .filter(|n| {
                n.names
                    .title
                    .as_ref()
                    .is_some_and(|t| t.to_lowercase().contains(&needle))
            })
            .collect();
        // Cypher orders nulls last ascending, so first when descending
        hits.sort_by(|a, b| match (a.year, b.year) {
            (None, None) => std::cmp::Ordering::Equal,
            (None, Some(_)) => std::cmp::Ordering::Less,
            (Some(_), None) => std::cmp::Ordering::Greater,
            (Some(x), Some(y)) => y.cmp(&x),
        });

        Ok(hits
            .into_iter()
            .take(limit)
            .map(|n| n.names.title.clone())
            .collect())
    }

    async fn find_co_actor_movies(&self, title: &str, limit: usize) -> Result<Vec<CoActorRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;
        let rels = self.relationships.read().await;

        // Grouped by candidate title, like the Cypher aggregation
        let mut rows: Vec<CoActorRow> = Vec::new();
        for focal in nodes.iter().filter(|n| n.is_movie_titled(title)) {
            for actor in Self::incoming(&nodes, &rels, focal.id, ACTED_IN, ACTOR_LABEL) {
                for rec in Self::outgoing_movies(&nodes, &rels, actor.id, ACTED_IN) {
                    if rec.id == focal.id {
                        continue;
                    }
                    let idx = match rows.iter().position(|r| r.movie == rec.names.title) {
                        Some(idx) => idx,
                        None => {
                            rows.push(CoActorRow {
                                movie: rec.names.title.clone(),
                                shared_actors: Vec::new(),
                            });
                            rows.len() - 1
                        }
                    };
                    push_distinct(&mut rows[idx].shared_actors, actor.names.actor_name.as_ref());
                }
            }
        }

        rows.truncate(limit);
        Ok(rows)
    }

    async fn find_co_director_movies(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<CoDirectorRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;
        let rels = self.relationships.read().await;

        let mut rows = Vec::new();
        for focal in nodes.iter().filter(|n| n.is_movie_titled(title)) {
            for director in Self::incoming(&nodes, &rels, focal.id, DIRECTED_IN, DIRECTOR_LABEL) {
                for rec in Self::outgoing_movies(&nodes, &rels, director.id, DIRECTED_IN) {
                    if rec.id != focal.id {
                        rows.push(CoDirectorRow {
                            movie: rec.names.title.clone(),
                            shared_director: director.names.director_name.clone(),
                        });
                    }
                }
            }
        }

        rows.truncate(limit);
        Ok(rows)
    }

    async fn sample_genre_candidates(
        &self,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<GenreCandidateRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;

        Ok(nodes
            .iter()
            .filter(|n| n.is_movie())
            .filter(|n| {
                n.names
                    .title
                    .as_deref()
                    .is_some_and(|t| t != exclude_title)
            })
            .take(limit)
            .map(|n| GenreCandidateRow {
                movie: n.names.title.clone(),
                genres: n.genres.clone(),
            })
            .collect())
    }

    async fn find_year_neighbors(
        &self,
        title: &str,
        window: i64,
        limit: usize,
    ) -> Result<Vec<YearRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;

        let mut rows = Vec::new();
        for focal in nodes.iter().filter(|n| n.is_movie_titled(title)) {
            let Some(focal_year) = focal.year else {
                continue;
            };
            for rec in nodes.iter().filter(|n| n.is_movie() && n.id != focal.id) {
                if let Some(year) = rec.year {
                    if (year - focal_year).abs() <= window {
                        rows.push(YearRow {
                            movie: rec.names.title.clone(),
                            year: Some(year),
                        });
                    }
                }
            }
        }

        rows.truncate(limit);
        Ok(rows)
    }

    async fn get_movie_neighborhood(&self, title: &str) -> Result<Vec<NeighborhoodRow>> {
        self.check_failure().await?;
        let nodes = self.nodes.read().await;
        let rels = self.relationships.read().await;

        let mut rows = Vec::new();
        for focal in nodes.iter().filter(|n| n.is_movie_titled(title)) {
            for rel in rels.iter() {
                let other = if rel.start == focal.id {
                    rel.end
                } else if rel.end == focal.id {
                    rel.start
                } else {
                    continue;
                };
                let Some(neighbor) = nodes.iter().find(|n| n.id == other) else {
                    continue;
                };
                rows.push(NeighborhoodRow {
                    source_id: focal.id,
                    source_label: focal.label.clone(),
                    source_names: NodeNames {
                        title: focal.names.title.clone(),
                        movie_title: focal.names.movie_title.clone(),
                        name: focal.names.name.clone(),
                        ..Default::default()
                    },
                    target_id: neighbor.id,
                    target_label: neighbor.label.clone(),
                    target_names: NodeNames {
                        title: neighbor.names.title.clone(),
                        actor_name: neighbor.names.actor_name.clone(),
                        director_name: neighbor.names.director_name.clone(),
                        name: neighbor.names.name.clone(),
                        ..Default::default()
                    },
                    rel_type: rel.rel_type.clone(),
                });
            }
        }

        Ok(rows)
    }

    async fn health_check(&self) -> Result<bool> {
        Ok(self.failure.read().await.is_none())
    }
}
