use landing_core::{Effect, Msg, SearchOutcome, SearchResult};
use landing_engine::{EngineError, EngineEvent, EngineHandle, SearchSettings};
use landing_logging::{landing_info, landing_warn, LOCATION_TARGET, SEARCH_TARGET};

use super::location::AddressBar;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: SearchSettings) -> Result<Self, EngineError> {
        Ok(Self::with_engine(EngineHandle::new(settings)?))
    }

    pub fn with_engine(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>, location: &mut AddressBar) {
        for effect in effects {
            match effect {
                Effect::ReplaceLocation { query } => {
                    landing_info!(target: LOCATION_TARGET, "ReplaceLocation query={}", query);
                    location.replace_query(&query);
                }
                Effect::RunSearch { seq, query } => {
                    landing_info!(target: SEARCH_TARGET, "RunSearch seq={} query={}", seq, query);
                    self.engine.search(seq, query);
                }
            }
        }
    }

    /// Next completed search as a core message, if any arrived.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }

    #[cfg(test)]
    pub fn poll_timeout(&self, timeout: std::time::Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SearchCompleted { seq, result } => {
            let outcome = match result {
                Ok(records) => {
                    landing_info!(
                        target: SEARCH_TARGET,
                        "Search #{} returned {} results",
                        seq,
                        records.len()
                    );
                    SearchOutcome::Success(records.into_iter().map(SearchResult::new).collect())
                }
                Err(err) => {
                    landing_warn!(target: SEARCH_TARGET, "Search #{} failed: {}", seq, err);
                    SearchOutcome::Failed
                }
            };
            Msg::SearchCompleted { seq, outcome }
        }
    }
}
