use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use landing_logging::{landing_debug, landing_warn, SEARCH_TARGET};

use crate::search::{ReqwestSearchClient, SearchClient, SearchSettings};
use crate::{EngineError, EngineEvent, SearchSeq};

enum EngineCommand {
    Search { seq: SearchSeq, query: String },
}

/// Runs search requests on a background tokio runtime.
///
/// Requests are never cancelled or de-duplicated; every enqueued search
/// produces exactly one `SearchCompleted` event, in completion order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, EngineError> {
        let client = ReqwestSearchClient::new(settings)?;
        Self::with_client(Arc::new(client))
    }

    pub fn with_client(client: Arc<dyn SearchClient>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        thread::Builder::new()
            .name("landing-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(client.as_ref(), command, event_tx).await;
                    });
                }
                landing_debug!("engine command channel closed");
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, seq: SearchSeq, query: impl Into<String>) {
        let query = query.into();
        if self
            .cmd_tx
            .send(EngineCommand::Search { seq, query })
            .is_err()
        {
            landing_warn!(target: SEARCH_TARGET, "engine stopped; search #{} dropped", seq);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { seq, query } => {
            let result = client.search(&query).await;
            let _ = event_tx.send(EngineEvent::SearchCompleted { seq, result });
        }
    }
}
