//! Movie info resolution with soft-miss semantics.

use crate::neo4j::GraphStore;
use anyhow::Result;
use std::sync::Arc;

use super::genres::normalize_genres;
use super::models::MovieInfo;

/// Loads a movie's canonical attributes through the `GraphStore` trait.
pub struct MovieResolver {
    store: Arc<dyn GraphStore>,
}

impl MovieResolver {
    /// Create a new resolver backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Resolve `title` into a [`MovieInfo`].
    ///
    /// A title the store does not know yields [`MovieInfo::unknown`], never an
    /// error. Only store failures are propagated.
    pub async fn resolve(&self, title: &str) -> Result<MovieInfo> {
        let Some(row) = self.store.get_movie_info(title).await? else {
            tracing::debug!(title, "Movie not found, using empty record");
            return Ok(MovieInfo::unknown(title));
        };

        Ok(MovieInfo {
            title: row.title.unwrap_or_else(|| title.to_string()),
            year: row.year,
            genres: normalize_genres(&row.genres),
            actors: row.actors,
            directors: row.directors,
        })
    }
}
