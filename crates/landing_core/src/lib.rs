//! Landing core: pure search coordinator state machine and view-model helpers.
mod content;
mod effect;
mod msg;
mod query;
mod state;
mod update;
mod view_model;

pub use content::{ContentCatalog, PostSummary, ProjectSummary, SearchResult, RECENT_POST_LIMIT};
pub use effect::Effect;
pub use msg::Msg;
pub use query::{QueryField, SearchQuery};
pub use state::{AppState, SearchOutcome, SearchSeq, SearchState, SEARCH_FAILED_MESSAGE};
pub use update::update;
pub use view_model::{LandingViewModel, ViewMode};
