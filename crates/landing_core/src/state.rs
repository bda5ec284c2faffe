use crate::view_model::{LandingViewModel, ViewMode};
use crate::{ContentCatalog, Effect, SearchQuery, SearchResult};

/// Monotonic identifier of one issued search request.
pub type SearchSeq = u64;

/// The only message a failed search ever shows to the user.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

/// How a search request settled, as far as the page is concerned.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success(Vec<SearchResult>),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub is_searching: bool,
    pub error: Option<String>,
    pub results: Vec<SearchResult>,
    pub has_searched: bool,
}

impl SearchState {
    fn begin(&mut self) {
        self.error = None;
        self.results.clear();
        self.is_searching = true;
        self.has_searched = true;
    }

    fn settle(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Success(results) => {
                self.error = None;
                self.results = results;
            }
            SearchOutcome::Failed => {
                self.error = Some(SEARCH_FAILED_MESSAGE.to_string());
                self.results.clear();
            }
        }
        self.is_searching = false;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    form: SearchQuery,
    search: SearchState,
    latest_seq: SearchSeq,
    location_has_filters: bool,
    catalog: ContentCatalog,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &SearchQuery {
        &self.form
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Sequence number of the most recently issued search, 0 if none.
    pub fn latest_seq(&self) -> SearchSeq {
        self.latest_seq
    }

    pub fn view(&self) -> LandingViewModel {
        let mode = ViewMode::derive(
            self.search.has_searched,
            self.location_has_filters,
            self.search.is_searching,
            self.search.results.len(),
        );
        LandingViewModel {
            mode,
            form: self.form.clone(),
            is_searching: self.search.is_searching,
            error: self.search.error.clone(),
            results: self.search.results.clone(),
            show_intro: mode.shows_intro(),
            recent_posts: self.catalog.recent_posts().to_vec(),
            project_count: self.catalog.projects.len(),
            collection_count: self.catalog.collection_count(),
            post_count: self.catalog.posts.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> &mut SearchQuery {
        &mut self.form
    }

    pub(crate) fn set_location_has_filters(&mut self, present: bool) {
        self.location_has_filters = present;
    }

    pub(crate) fn set_catalog(&mut self, catalog: ContentCatalog) {
        self.catalog = catalog;
    }

    /// Starts a search for `query` and returns the effects that carry it out.
    pub(crate) fn start_search(&mut self, query: &SearchQuery) -> Vec<Effect> {
        self.latest_seq += 1;
        self.search.begin();

        let encoded = query.to_query_string();
        self.location_has_filters = !query.is_blank();
        self.dirty = true;

        vec![
            Effect::ReplaceLocation {
                query: encoded.clone(),
            },
            Effect::RunSearch {
                seq: self.latest_seq,
                query: encoded,
            },
        ]
    }

    /// Applies a completion if it belongs to the latest request.
    ///
    /// Returns false when the completion was stale, or arrived before any
    /// search was issued, and was discarded.
    pub(crate) fn apply_completion(&mut self, seq: SearchSeq, outcome: SearchOutcome) -> bool {
        if self.latest_seq == 0 || seq != self.latest_seq {
            return false;
        }
        self.search.settle(outcome);
        self.dirty = true;
        true
    }
}
