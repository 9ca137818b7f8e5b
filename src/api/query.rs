//! Query parameter structs

use serde::Deserialize;

/// `?title=` parameter shared by the recommend and graph endpoints
#[derive(Debug, Deserialize, Clone, Default)]
pub struct TitleParams {
    #[serde(default)]
    pub title: String,
}

impl TitleParams {
    /// The trimmed title, or `None` when blank
    pub fn title(&self) -> Option<&str> {
        Some(self.title.trim()).filter(|t| !t.is_empty())
    }
}

/// `?q=` parameter of the search endpoint
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

impl SearchParams {
    /// The trimmed query, or `None` when blank
    pub fn query(&self) -> Option<&str> {
        Some(self.q.trim()).filter(|q| !q.is_empty())
    }
}
