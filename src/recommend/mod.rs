//! Multi-signal movie recommendations.
//!
//! ## Architecture
//!
//! ```text
//! title ──► MovieResolver ──► MovieInfo (year, normalized genres, people)
//!   │                              │
//!   │                         genre list
//!   ▼                              ▼
//! SignalCollector: co-actor · co-director · genre overlap · year proximity
//!   │
//!   ▼
//! Recommender ──► Recommendations { movie, actors, directors, genres, year }
//! ```
//!
//! ## Modules
//!
//! - [`genres`]: Genre property normalization
//! - [`resolver`]: Focal movie lookup with soft-miss default
//! - [`signals`]: The four independent evidence queries
//! - [`engine`]: `Recommender`, which runs them in order
//! - [`models`]: Response and settings types

pub mod engine;
pub mod genres;
pub mod models;
pub mod resolver;
pub mod signals;

pub use engine::Recommender;
pub use genres::normalize_genres;
pub use models::{
    CandidatePolicy, MovieInfo, NearbyYear, RecommendSettings, Recommendations, SharedActors,
    SharedDirector, SharedGenres,
};
pub use resolver::MovieResolver;
pub use signals::SignalCollector;
