use crate::{PostSummary, SearchQuery, SearchResult};

/// Which layout the landing page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Centered search box; nothing searched and no filters in the location.
    EmptySearch,
    /// Compact layout showing results or an in-flight search.
    Results,
    /// Compact layout after a settled search with zero results.
    ResultsEmptyFallthrough,
}

impl ViewMode {
    pub fn derive(
        has_searched: bool,
        location_has_filters: bool,
        is_searching: bool,
        result_count: usize,
    ) -> Self {
        if !has_searched && !location_has_filters {
            ViewMode::EmptySearch
        } else if !is_searching && result_count == 0 {
            ViewMode::ResultsEmptyFallthrough
        } else {
            ViewMode::Results
        }
    }

    /// Intro and recent posts are hidden only while results (or a pending
    /// search) occupy the page.
    pub fn shows_intro(self) -> bool {
        !matches!(self, ViewMode::Results)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LandingViewModel {
    pub mode: ViewMode,
    pub form: SearchQuery,
    pub is_searching: bool,
    pub error: Option<String>,
    pub results: Vec<SearchResult>,
    pub show_intro: bool,
    pub recent_posts: Vec<PostSummary>,
    pub project_count: usize,
    pub collection_count: usize,
    pub post_count: usize,
    pub dirty: bool,
}
