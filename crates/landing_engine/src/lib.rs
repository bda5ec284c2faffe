//! Landing engine: search requests and effect execution.
mod engine;
mod search;
mod types;

pub use engine::EngineHandle;
pub use search::{
    parse_results, ReqwestSearchClient, SearchClient, SearchSettings, DEFAULT_ENDPOINT,
};
pub use types::{EngineError, EngineEvent, FailureKind, SearchError, SearchSeq};
