//! Recommendation data structures

use serde::{Deserialize, Serialize};

// ============================================================================
// Focal movie
// ============================================================================

/// Canonical attributes of the movie a recommendation is built around
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieInfo {
    pub title: String,
    pub year: Option<i64>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
}

impl MovieInfo {
    /// The soft-miss record for a title the store does not know
    pub fn unknown(title: &str) -> Self {
        Self {
            title: title.to_string(),
            year: None,
            genres: Vec::new(),
            actors: Vec::new(),
            directors: Vec::new(),
        }
    }
}

// ============================================================================
// Evidence
// ============================================================================

/// Candidate sharing actors with the focal movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedActors {
    pub movie: String,
    pub shared_actors: Vec<String>,
}

/// Candidate sharing a director with the focal movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedDirector {
    pub movie: String,
    pub shared_director: Option<String>,
}

/// Candidate whose genres intersect the focal movie's
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedGenres {
    pub movie: String,
    pub shared_genres: Vec<String>,
}

/// Candidate released near the focal movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyYear {
    pub movie: String,
    pub year: Option<i64>,
}

/// The four signals reported side by side, unranked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub movie: MovieInfo,
    pub actors: Vec<SharedActors>,
    pub directors: Vec<SharedDirector>,
    pub genres: Vec<SharedGenres>,
    pub year: Vec<NearbyYear>,
}

// ============================================================================
// Settings
// ============================================================================

/// How co-actor and co-director rows for the same candidate are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidatePolicy {
    /// One row per shared-person path, as the store returns them
    #[default]
    PerPath,
    /// One row per candidate title, evidence merged into the first row
    PerCandidate,
}

impl std::str::FromStr for CandidatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "per_path" => Ok(Self::PerPath),
            "per_candidate" => Ok(Self::PerCandidate),
            other => Err(format!("unknown candidate policy: {}", other)),
        }
    }
}

/// Tuning knobs for the signal collectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendSettings {
    /// Max rows per signal (and size of the genre candidate slice)
    pub signal_limit: usize,
    /// Max year distance for the year-proximity signal
    pub year_window: i64,
    pub candidate_policy: CandidatePolicy,
    /// Max titles returned by search
    pub search_limit: usize,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            signal_limit: 20,
            year_window: 2,
            candidate_policy: CandidatePolicy::PerPath,
            search_limit: 20,
        }
    }
}
