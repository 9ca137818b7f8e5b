//! Neo4j row models for the movie graph
//!
//! Every query issued by the client is decoded exactly once into one of these
//! records. Fields the store may leave null are `Option`s; nothing downstream
//! looks at raw `neo4rs::Row`s.

use serde::{Deserialize, Serialize};

// ============================================================================
// Graph vocabulary
// ============================================================================

/// Label carried by movie nodes
pub const MOVIE_LABEL: &str = "Movies";
/// Label carried by actor nodes
pub const ACTOR_LABEL: &str = "Actors";
/// Label carried by director nodes
pub const DIRECTOR_LABEL: &str = "Directors";
/// Actor → Movie relationship type
pub const ACTED_IN: &str = "Acted_In";
/// Director → Movie relationship type
pub const DIRECTED_IN: &str = "Directed_In";

/// Store-assigned node identifier (`id(n)`)
pub type NodeId = i64;

// ============================================================================
// Genre property
// ============================================================================

/// The `genres` property exactly as the store returned it.
///
/// Imported data sets disagree on the shape: some carry a native list, some a
/// stringified list literal, some a comma separated string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawGenres {
    #[default]
    Missing,
    List(Vec<String>),
    Text(String),
}

impl From<Option<String>> for RawGenres {
    fn from(value: Option<String>) -> Self {
        value.map(RawGenres::Text).unwrap_or_default()
    }
}

impl From<Vec<String>> for RawGenres {
    fn from(value: Vec<String>) -> Self {
        RawGenres::List(value)
    }
}

impl From<&str> for RawGenres {
    fn from(value: &str) -> Self {
        RawGenres::Text(value.to_string())
    }
}

// ============================================================================
// Recommendation query rows
// ============================================================================

/// Focal movie attributes plus distinct actor and director names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieInfoRow {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub genres: RawGenres,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
}

/// A candidate reached through one or more shared actors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoActorRow {
    pub movie: Option<String>,
    pub shared_actors: Vec<String>,
}

/// A candidate reached through one shared director
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoDirectorRow {
    pub movie: Option<String>,
    pub shared_director: Option<String>,
}

/// An unfiltered candidate for the genre-overlap signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCandidateRow {
    pub movie: Option<String>,
    pub genres: RawGenres,
}

/// A candidate released close to the focal movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRow {
    pub movie: Option<String>,
    pub year: Option<i64>,
}

// ============================================================================
// Neighborhood query rows
// ============================================================================

/// Title-like properties of one relationship endpoint.
///
/// Which of these a node carries depends on its kind; the projection picks the
/// first one present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeNames {
    pub title: Option<String>,
    pub movie_title: Option<String>,
    pub actor_name: Option<String>,
    pub director_name: Option<String>,
    pub name: Option<String>,
}

/// One relationship incident to the focal movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodRow {
    pub source_id: NodeId,
    pub source_label: Option<String>,
    pub source_names: NodeNames,
    pub target_id: NodeId,
    pub target_label: Option<String>,
    pub target_names: NodeNames,
    pub rel_type: String,
}
