//! Recommendation aggregator.
//!
//! Composes `MovieResolver` and `SignalCollector` into a single response. The
//! signals are reported side by side: nothing is scored, ranked or merged
//! across signals.

use crate::neo4j::GraphStore;
use anyhow::{Context, Result};
use std::sync::Arc;

use super::models::{RecommendSettings, Recommendations};
use super::resolver::MovieResolver;
use super::signals::SignalCollector;

/// Builds "similar movies, and why" answers for one focal title.
pub struct Recommender {
    resolver: MovieResolver,
    signals: SignalCollector,
}

impl Recommender {
    /// Create a new recommender backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>, settings: RecommendSettings) -> Self {
        Self {
            resolver: MovieResolver::new(store.clone()),
            signals: SignalCollector::new(store, settings),
        }
    }

    /// Resolve `title`, then run the four signals against it.
    ///
    /// Queries run one after another. The first failing query fails the
    /// whole request; a title matching nothing yields empty lists.
    pub async fn recommend(&self, title: &str) -> Result<Recommendations> {
        // 1. Focal movie (also the genre signal's context)
        let movie = self
            .resolver
            .resolve(title)
            .await
            .context("Failed to resolve movie info")?;

        // 2. Signals
        let actors = self
            .signals
            .co_actors(title)
            .await
            .context("Failed to collect co-actor signal")?;
        let directors = self
            .signals
            .co_directors(title)
            .await
            .context("Failed to collect co-director signal")?;
        let genres = self
            .signals
            .shared_genres(title, &movie.genres)
            .await
            .context("Failed to collect genre signal")?;
        let year = self
            .signals
            .nearby_years(title)
            .await
            .context("Failed to collect year signal")?;

        tracing::info!(
            title,
            actors = actors.len(),
            directors = directors.len(),
            genres = genres.len(),
            year = year.len(),
            "Recommendations built"
        );

        Ok(Recommendations {
            movie,
            actors,
            directors,
            genres,
            year,
        })
    }
}
