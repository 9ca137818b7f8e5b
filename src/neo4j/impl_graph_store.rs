//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::models::*;
use super::traits::GraphStore;

#[async_trait]
impl GraphStore for Neo4jClient {
    // ========================================================================
    // Movie lookups
    // ========================================================================

    async fn get_movie_info(&self, title: &str) -> anyhow::Result<Option<MovieInfoRow>> {
        self.get_movie_info(title).await
    }

    async fn search_titles(&self, query: &str, limit: usize) -> anyhow::Result<Vec<Option<String>>> {
        self.search_titles(query, limit).await
    }

    // ========================================================================
    // Signal queries
    // ========================================================================

    async fn find_co_actor_movies(
        &self,
        title: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<CoActorRow>> {
        self.find_co_actor_movies(title, limit).await
    }

    async fn find_co_director_movies(
        &self,
        title: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<CoDirectorRow>> {
        self.find_co_director_movies(title, limit).await
    }

    async fn sample_genre_candidates(
        &self,
        exclude_title: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<GenreCandidateRow>> {
        self.sample_genre_candidates(exclude_title, limit).await
    }

    async fn find_year_neighbors(
        &self,
        title: &str,
        window: i64,
        limit: usize,
    ) -> anyhow::Result<Vec<YearRow>> {
        self.find_year_neighbors(title, window, limit).await
    }

    // ========================================================================
    // Neighborhood
    // ========================================================================

    async fn get_movie_neighborhood(&self, title: &str) -> anyhow::Result<Vec<NeighborhoodRow>> {
        self.get_movie_neighborhood(title).await
    }

    async fn health_check(&self) -> anyhow::Result<bool> {
        self.health_check().await
    }
}
