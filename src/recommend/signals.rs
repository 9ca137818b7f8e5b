//! Signal collectors.
//!
//! Each signal is one independent read against the store, capped at
//! `signal_limit` rows and never including the focal movie itself:
//!
//! - **co-actor**: candidates sharing at least one actor
//! - **co-director**: candidates sharing a director, one row per director
//! - **genre overlap**: candidates whose normalized genres intersect the focal list
//! - **year proximity**: candidates released within `year_window` years
//!
//! The genre signal filters after normalization over an arbitrary slice of
//! `signal_limit` movies, so on a large catalogue it can miss overlapping
//! movies that fall outside the slice. This is a known precision limit.

use crate::neo4j::{CoActorRow, CoDirectorRow, GraphStore};
use anyhow::Result;
use std::sync::Arc;

use super::genres::normalize_genres;
use super::models::{
    CandidatePolicy, NearbyYear, RecommendSettings, SharedActors, SharedDirector, SharedGenres,
};

/// Runs the four evidence queries through the `GraphStore` trait.
pub struct SignalCollector {
    store: Arc<dyn GraphStore>,
    settings: RecommendSettings,
}

impl SignalCollector {
    /// Create a new collector backed by the given GraphStore.
    pub fn new(store: Arc<dyn GraphStore>, settings: RecommendSettings) -> Self {
        Self { store, settings }
    }

    /// Candidates sharing actors with `title`
    pub async fn co_actors(&self, title: &str) -> Result<Vec<SharedActors>> {
        let rows = self
            .store
            .find_co_actor_movies(title, self.settings.signal_limit)
            .await?;
        tracing::debug!(title, rows = rows.len(), "co-actor signal");

        let rows = match self.settings.candidate_policy {
            CandidatePolicy::PerPath => rows,
            CandidatePolicy::PerCandidate => merge_co_actor_rows(rows),
        };

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                Some(SharedActors {
                    movie: row.movie?,
                    shared_actors: row.shared_actors,
                })
            })
            .collect())
    }

    /// Candidates sharing a director with `title`
    pub async fn co_directors(&self, title: &str) -> Result<Vec<SharedDirector>> {
        let rows = self
            .store
            .find_co_director_movies(title, self.settings.signal_limit)
            .await?;
        tracing::debug!(title, rows = rows.len(), "co-director signal");

        let rows = match self.settings.candidate_policy {
            CandidatePolicy::PerPath => rows,
            CandidatePolicy::PerCandidate => first_row_per_candidate(rows),
        };

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                Some(SharedDirector {
                    movie: row.movie?,
                    shared_director: row.shared_director,
                })
            })
            .collect())
    }

    /// Candidates whose genres intersect `genres`.
    ///
    /// `genres` must already be normalized. An empty list short-circuits
    /// without touching the store.
    pub async fn shared_genres(&self, title: &str, genres: &[String]) -> Result<Vec<SharedGenres>> {
        if genres.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self
            .store
            .sample_genre_candidates(title, self.settings.signal_limit)
            .await?;
        tracing::debug!(title, candidates = candidates.len(), "genre signal");

        Ok(candidates
            .into_iter()
            .filter_map(|row| {
                let movie = row.movie?;
                let common: Vec<String> = normalize_genres(&row.genres)
                    .into_iter()
                    .filter(|g| genres.contains(g))
                    .collect();
                (!common.is_empty()).then_some(SharedGenres {
                    movie,
                    shared_genres: common,
                })
            })
            .collect())
    }

    /// Candidates released within `year_window` years of `title`
    pub async fn nearby_years(&self, title: &str) -> Result<Vec<NearbyYear>> {
        let rows = self
            .store
            .find_year_neighbors(
                title,
                self.settings.year_window,
                self.settings.signal_limit,
            )
            .await?;
        tracing::debug!(title, rows = rows.len(), "year signal");

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                Some(NearbyYear {
                    movie: row.movie?,
                    year: row.year,
                })
            })
            .collect())
    }
}

/// Merge co-actor rows by candidate title, keeping first-seen order
fn merge_co_actor_rows(rows: Vec<CoActorRow>) -> Vec<CoActorRow> {
    let mut merged: Vec<CoActorRow> = Vec::with_capacity(rows.len());
    for row in rows {
        match merged.iter_mut().find(|m| m.movie == row.movie) {
            Some(existing) => {
                for actor in row.shared_actors {
                    if !existing.shared_actors.contains(&actor) {
                        existing.shared_actors.push(actor);
                    }
                }
            }
            None => merged.push(row),
        }
    }
    merged
}

/// Keep only the first co-director row for each candidate title
fn first_row_per_candidate(rows: Vec<CoDirectorRow>) -> Vec<CoDirectorRow> {
    let mut kept: Vec<CoDirectorRow> = Vec::with_capacity(rows.len());
    for row in rows {
        if !kept.iter().any(|k| k.movie == row.movie) {
            kept.push(row);
        }
    }
    kept
}
