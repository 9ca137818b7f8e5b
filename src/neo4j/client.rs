//! Neo4j client for reading the movie graph

use super::models::*;
use anyhow::{Context, Result};
use neo4rs::{query, ConfigBuilder, Graph, Query, Row};
use std::sync::Arc;

/// Connection settings for [`Neo4jClient::new`]
#[derive(Debug, Clone)]
pub struct Neo4jSettings {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: usize,
    pub fetch_size: usize,
}

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Create a new Neo4j client backed by a connection pool.
    ///
    /// Each query borrows a pooled connection and hands it back when its row
    /// stream is drained or dropped, including on error paths.
    pub async fn new(settings: &Neo4jSettings) -> Result<Self> {
        let config = ConfigBuilder::default()
            .uri(settings.uri.as_str())
            .user(settings.user.as_str())
            .password(settings.password.as_str())
            .max_connections(settings.max_connections)
            .fetch_size(settings.fetch_size)
            .build()
            .context("Invalid Neo4j configuration")?;

        let graph = Graph::connect(config)
            .await
            .context("Failed to connect to Neo4j")?;

        tracing::info!(uri = %settings.uri, "Connected to Neo4j");

        Ok(Self {
            graph: Arc::new(graph),
        })
    }

    /// Execute a raw Cypher query (internal use only)
    pub(crate) async fn execute(&self, cypher: &str) -> Result<Vec<Row>> {
        self.execute_with_params(query(cypher)).await
    }

    /// Execute a parameterized Cypher query (internal use only)
    pub(crate) async fn execute_with_params(&self, q: Query) -> Result<Vec<Row>> {
        let mut result = self.graph.execute(q).await?;
        let mut rows = Vec::new();
        while let Some(row) = result.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    // ========================================================================
    // Movie lookups
    // ========================================================================

    /// Get a movie with its distinct actors and directors
    pub async fn get_movie_info(&self, title: &str) -> Result<Option<MovieInfoRow>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie} {{title: $title}})
            OPTIONAL MATCH (m)<-[:{acted}]-(a:{actor})
            OPTIONAL MATCH (m)<-[:{directed}]-(d:{director})
            RETURN m.title AS title, m.year AS year, m.genres AS genres,
                   collect(DISTINCT a.actor_name) AS actors,
                   collect(DISTINCT d.director_name) AS directors
            LIMIT 1
            "#,
            movie = MOVIE_LABEL,
            acted = ACTED_IN,
            actor = ACTOR_LABEL,
            directed = DIRECTED_IN,
            director = DIRECTOR_LABEL,
        ))
        .param("title", title);

        let rows = self
            .execute_with_params(q)
            .await
            .context("movie info query failed")?;

        Ok(rows.first().map(|row| MovieInfoRow {
            title: row.get::<String>("title").ok(),
            year: row.get::<i64>("year").ok(),
            genres: decode_genres(row, "genres"),
            actors: row.get::<Vec<String>>("actors").unwrap_or_default(),
            directors: row.get::<Vec<String>>("directors").unwrap_or_default(),
        }))
    }

    /// Search movie titles by case-insensitive substring, newest first
    pub async fn search_titles(&self, search: &str, limit: usize) -> Result<Vec<Option<String>>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie})
            WHERE toLower(m.title) CONTAINS toLower($q)
            RETURN m.title AS title
            ORDER BY m.year DESC
            LIMIT $limit
            "#,
            movie = MOVIE_LABEL,
        ))
        .param("q", search)
        .param("limit", limit as i64);

        let rows = self
            .execute_with_params(q)
            .await
            .context("title search query failed")?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String>("title").ok())
            .collect())
    }

    // ========================================================================
    // Signal queries
    // ========================================================================

    /// Movies sharing an actor with the focal movie
    pub async fn find_co_actor_movies(&self, title: &str, limit: usize) -> Result<Vec<CoActorRow>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie} {{title: $title}})<-[:{acted}]-(a:{actor})-[:{acted}]->(rec:{movie})
            WHERE rec <> m
            RETURN rec.title AS movie, collect(DISTINCT a.actor_name) AS shared_actors
            LIMIT $limit
            "#,
            movie = MOVIE_LABEL,
            acted = ACTED_IN,
            actor = ACTOR_LABEL,
        ))
        .param("title", title)
        .param("limit", limit as i64);

        let rows = self
            .execute_with_params(q)
            .await
            .context("co-actor query failed")?;

        Ok(rows
            .iter()
            .map(|row| CoActorRow {
                movie: row.get::<String>("movie").ok(),
                shared_actors: row.get::<Vec<String>>("shared_actors").unwrap_or_default(),
            })
            .collect())
    }

    /// Movies sharing a director with the focal movie
    pub async fn find_co_director_movies(
        &self,
        title: &str,
        limit: usize,
    ) -> Result<Vec<CoDirectorRow>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie} {{title: $title}})<-[:{directed}]-(d:{director})-[:{directed}]->(rec:{movie})
            WHERE rec <> m
            RETURN rec.title AS movie, d.director_name AS shared_director
            LIMIT $limit
            "#,
            movie = MOVIE_LABEL,
            directed = DIRECTED_IN,
            director = DIRECTOR_LABEL,
        ))
        .param("title", title)
        .param("limit", limit as i64);

        let rows = self
            .execute_with_params(q)
            .await
            .context("co-director query failed")?;

        Ok(rows
            .iter()
            .map(|row| CoDirectorRow {
                movie: row.get::<String>("movie").ok(),
                shared_director: row.get::<String>("shared_director").ok(),
            })
            .collect())
    }

    /// First `limit` movies other than the focal one, in store order
    pub async fn sample_genre_candidates(
        &self,
        exclude_title: &str,
        limit: usize,
    ) -> Result<Vec<GenreCandidateRow>> {
        let q = query(&format!(
            r#"
            MATCH (rec:{movie})
            WHERE rec.title <> $title
            RETURN rec.title AS movie, rec.genres AS genres
            LIMIT $limit
            "#,
            movie = MOVIE_LABEL,
        ))
        .param("title", exclude_title)
        .param("limit", limit as i64);

        let rows = self
            .execute_with_params(q)
            .await
            .context("genre candidate query failed")?;

        Ok(rows
            .iter()
            .map(|row| GenreCandidateRow {
                movie: row.get::<String>("movie").ok(),
                genres: decode_genres(row, "genres"),
            })
            .collect())
    }

    /// Movies released within `window` years of the focal movie.
    ///
    /// A null year on either side makes the comparison null, which drops the pair.
    pub async fn find_year_neighbors(
        &self,
        title: &str,
        window: i64,
        limit: usize,
    ) -> Result<Vec<YearRow>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie} {{title: $title}}), (rec:{movie})
            WHERE rec <> m AND abs(rec.year - m.year) <= $window
            RETURN rec.title AS movie, rec.year AS year
            LIMIT $limit
            "#,
            movie = MOVIE_LABEL,
        ))
        .param("title", title)
        .param("window", window)
        .param("limit", limit as i64);

        let rows = self
            .execute_with_params(q)
            .await
            .context("year proximity query failed")?;

        Ok(rows
            .iter()
            .map(|row| YearRow {
                movie: row.get::<String>("movie").ok(),
                year: row.get::<i64>("year").ok(),
            })
            .collect())
    }

    // ========================================================================
    // Neighborhood
    // ========================================================================

    /// All relationships incident to the focal movie, uncapped
    pub async fn get_movie_neighborhood(&self, title: &str) -> Result<Vec<NeighborhoodRow>> {
        let q = query(&format!(
            r#"
            MATCH (m:{movie} {{title: $title}})-[r]-(x)
            RETURN id(m) AS source,
                   id(x) AS target,
                   labels(m)[0] AS source_label,
                   labels(x)[0] AS target_label,
                   m.title AS source_title,
                   m.movie_title AS source_movie_title,
                   m.name AS source_name,
                   x.title AS target_title,
                   x.actor_name AS target_actor_name,
                   x.director_name AS target_director_name,
                   x.name AS target_name,
                   type(r) AS rel_type
            "#,
            movie = MOVIE_LABEL,
        ))
        .param("title", title);

        let rows = self
            .execute_with_params(q)
            .await
            .context("neighborhood query failed")?;

        rows.iter().map(row_to_neighborhood).collect()
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Ping the database
    pub async fn health_check(&self) -> Result<bool> {
        match self.execute("RETURN 1 AS ping").await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("Neo4j health check failed: {:#}", e);
                Ok(false)
            }
        }
    }
}

/// Read a `genres` column in whichever shape the store holds it
fn decode_genres(row: &Row, key: &str) -> RawGenres {
    if let Ok(list) = row.get::<Vec<String>>(key) {
        return RawGenres::List(list);
    }
    match row.get::<String>(key) {
        Ok(text) => RawGenres::Text(text),
        Err(_) => RawGenres::Missing,
    }
}

fn row_to_neighborhood(row: &Row) -> Result<NeighborhoodRow> {
    Ok(NeighborhoodRow {
        source_id: row.get::<i64>("source")?,
        source_label: row.get::<String>("source_label").ok(),
        source_names: NodeNames {
            title: row.get::<String>("source_title").ok(),
            movie_title: row.get::<String>("source_movie_title").ok(),
            name: row.get::<String>("source_name").ok(),
            ..Default::default()
        },
        target_id: row.get::<i64>("target")?,
        target_label: row.get::<String>("target_label").ok(),
        target_names: NodeNames {
            title: row.get::<String>("target_title").ok(),
            actor_name: row.get::<String>("target_actor_name").ok(),
            director_name: row.get::<String>("target_director_name").ok(),
            name: row.get::<String>("target_name").ok(),
            ..Default::default()
        },
        rel_type: row.get::<String>("rel_type")?,
    })
}
