//! GraphStore trait definition
//!
//! Defines the abstract interface for every read the service performs against
//! the movie graph. `Neo4jClient` implements it over Bolt; `MockGraphStore`
//! implements it in memory for tests.

use crate::neo4j::models::*;
use anyhow::Result;
use async_trait::async_trait;

/// Abstract interface for all graph database reads.
///
/// Each method is one parametrized query. Implementations never fail for a
/// title that matches nothing: they return `None` or an empty list.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // ========================================================================
    // Movie lookups
    // ========================================================================

    /// Load one movie with its distinct actor and director names.
    ///
    /// Movies without actors or directors are still returned.
    async fn get_movie_info(&self, title: &str) -> Result<Option<MovieInfoRow>>;

    /// Case-insensitive substring search on movie titles, newest first
    async fn search_titles(&self, query: &str, limit: usize) -> Result<Vec<Option<String>>>;

    // ========================================================================
    // Signal queries
    // ========================================================================

    /// Movies sharing at least one actor with the focal movie
    async fn find_co_actor_movies(&self, title: &str, limit: usize) -> Result<Vec<CoActorRow>>;

    /// Movies sharing a director with the focal movie, one row per shared director
    async fn find_co_director_movies(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<CoDirectorRow>>;

    /// An arbitrary slice of movies other than the focal one, with raw genres
    async fn sample_genre_candidates(
        &self,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<GenreCandidateRow>>;

    /// Movies whose year is within `window` years of the focal movie's year
    async fn find_year_neighbors(
        &self,
        title: &str,
        window: i64,
        limit: usize,
    ) -> Result<Vec<YearRow>>;

    // ========================================================================
    // Neighborhood
    // ========================================================================

    /// Every relationship touching the focal movie, any type, either direction
    async fn get_movie_neighborhood(&self, title: &str) -> Result<Vec<NeighborhoodRow>>;

    // ========================================================================
    // Health
    // ========================================================================

    /// Check connectivity to the store
    async fn health_check(&self) -> Result<bool>;
}
