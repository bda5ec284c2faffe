use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum number of posts shown in the recent-posts list.
pub const RECENT_POST_LIMIT: usize = 5;

/// One record returned by the search endpoint.
///
/// The endpoint owns the schema, so the record is kept as raw JSON. The
/// accessors only look up common display keys and never require them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResult(Value);

impl SearchResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    pub fn title(&self) -> Option<&str> {
        self.first_str(&["title", "name"])
    }

    pub fn link(&self) -> Option<&str> {
        self.first_str(&["url", "href", "slug"])
    }

    pub fn summary(&self) -> Option<&str> {
        self.first_str(&["summary", "description", "excerpt"])
    }

    fn first_str(&self, keys: &[&str]) -> Option<&str> {
        keys.iter()
            .find_map(|key| self.0.get(*key).and_then(Value::as_str))
    }
}

impl From<Value> for SearchResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub collection: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Static listings consumed read-only by the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub projects: Vec<ProjectSummary>,
    #[serde(default)]
    pub posts: Vec<PostSummary>,
}

impl ContentCatalog {
    /// Distinct named collections across all projects.
    pub fn collection_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .projects
            .iter()
            .filter_map(|project| project.collection.as_deref())
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }

    pub fn recent_posts(&self) -> &[PostSummary] {
        let end = self.posts.len().min(RECENT_POST_LIMIT);
        &self.posts[..end]
    }
}
