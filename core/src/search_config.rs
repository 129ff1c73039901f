use serde::{Deserialize, Serialize};

/// Frontier discipline used by the search driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Queue frontier. Finds a path with the fewest works.
    #[default]
    Bfs,
    /// Stack frontier. Finds some path, not necessarily the shortest.
    Dfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "dfs" => Algorithm::Dfs,
            _ => Algorithm::Bfs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}

/// Configuration for a single search call
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Give up after this many nodes have been taken off the frontier
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, max_expansions: Option<usize>) -> Self {
        Self {
            algorithm,
            max_expansions,
        }
    }
}
