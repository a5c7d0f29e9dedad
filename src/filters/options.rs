use serde::{Deserialize, Serialize};

/// Dropdown option lists from `/api/filter-options`.
///
/// The server also sends its bio-relevance levels; older deployments omit the
/// key, so it defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub vendors: Vec<String>,
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub bio_relevance: Vec<String>,
}
