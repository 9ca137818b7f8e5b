//! Movie Graph
//!
//! Answers two questions over a Neo4j movie property graph:
//! - "which movies are similar to X, and why": four independent signals
//!   (shared actors, shared directors, overlapping genres, nearby years)
//! - "show me the neighborhood around X": a deduplicated node/link projection

pub mod api;
pub mod graph;
pub mod neo4j;
pub mod recommend;

use anyhow::{Context, Result};
use recommend::{CandidatePolicy, RecommendSettings};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
    pub neo4j: Neo4jYamlConfig,
    pub recommend: RecommendSettings,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerYamlConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

/// Neo4j configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jYamlConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: usize,
    pub fetch_size: usize,
}

impl Default for Neo4jYamlConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://127.0.0.1:7687".into(),
            user: "neo4j".into(),
            password: "neo4j".into(),
            max_connections: 16,
            fetch_size: 200,
        }
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub neo4j_uri: String,
    pub neo4j_user: String,
    pub neo4j_password: String,
    pub neo4j_max_connections: usize,
    pub neo4j_fetch_size: usize,
    pub server_host: String,
    pub server_port: u16,
    pub recommend: RecommendSettings,
}

impl Config {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        // 1. Load YAML config (or defaults if file not found)
        let yaml = Self::load_yaml(yaml_path);

        // 2. Build Config with env var overrides
        let recommend = RecommendSettings {
            signal_limit: env_parsed("SIGNAL_LIMIT")?.unwrap_or(yaml.recommend.signal_limit),
            year_window: env_parsed("YEAR_WINDOW")?.unwrap_or(yaml.recommend.year_window),
            candidate_policy: env_parsed::<CandidatePolicy>("CANDIDATE_POLICY")?
                .unwrap_or(yaml.recommend.candidate_policy),
            search_limit: yaml.recommend.search_limit,
        };

        Ok(Self {
            neo4j_uri: std::env::var("NEO4J_URI").unwrap_or(yaml.neo4j.uri),
            neo4j_user: std::env::var("NEO4J_USER").unwrap_or(yaml.neo4j.user),
            neo4j_password: std::env::var("NEO4J_PASSWORD").unwrap_or(yaml.neo4j.password),
            neo4j_max_connections: env_parsed("NEO4J_MAX_CONNECTIONS")?
                .unwrap_or(yaml.neo4j.max_connections),
            neo4j_fetch_size: yaml.neo4j.fetch_size,
            server_host: std::env::var("SERVER_HOST").unwrap_or(yaml.server.host),
            server_port: env_parsed("SERVER_PORT")?.unwrap_or(yaml.server.port),
            recommend,
        })
    }

    /// Connection settings for the Neo4j client
    pub fn neo4j_settings(&self) -> neo4j::Neo4jSettings {
        neo4j::Neo4jSettings {
            uri: self.neo4j_uri.clone(),
            user: self.neo4j_user.clone(),
            password: self.neo4j_password.clone(),
            max_connections: self.neo4j_max_connections,
            fetch_size: self.neo4j_fetch_size,
        }
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

/// Read and parse an env var; unset or empty is `None`, unparseable is an error
fn env_parsed<T>(var: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid {}={:?}: {}", var, raw, e)),
        _ => Ok(None),
    }
}

// ============================================================================
// Application state
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub neo4j: Arc<dyn neo4j::GraphStore>,
    pub recommender: Arc<recommend::Recommender>,
    pub projector: Arc<graph::ProjectionBuilder>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Connect to Neo4j and wire the services around the client
    pub async fn new(config: Config) -> Result<Self> {
        let neo4j = Arc::new(neo4j::Neo4jClient::new(&config.neo4j_settings()).await?);
        Ok(Self::with_store(neo4j, config))
    }

    /// Wire the services around an already constructed store
    pub fn with_store(neo4j: Arc<dyn neo4j::GraphStore>, config: Config) -> Self {
        let recommender = Arc::new(recommend::Recommender::new(
            neo4j.clone(),
            config.recommend.clone(),
        ));
        let projector = Arc::new(graph::ProjectionBuilder::new(neo4j.clone()));

        Self {
            neo4j,
            recommender,
            projector,
            config: Arc::new(config),
        }
    }
}

/// Connect, bind and serve until Ctrl-C.
///
/// The store client lives exactly as long as the server: it is dropped, and
/// its pool closed, when this future returns.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server_host, config.server_port);

    let state = AppState::new(config).await?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Serving HTTP on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
