use std::sync::{mpsc, Arc};
use std::thread;

use catalog_core::{CategoriesPage, FetchKind, Generation, QueryVariables};
use catalog_logging::{catalog_debug, catalog_warn};

use crate::executor::{ExecutorSettings, QueryExecutor, ReqwestExecutor, TransportError};

enum EngineCommand {
    FetchPage {
        generation: Generation,
        kind: FetchKind,
        variables: QueryVariables,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        generation: Generation,
        kind: FetchKind,
        result: Result<CategoriesPage, TransportError>,
    },
}

/// Command/event pump around a [`QueryExecutor`]. Fetches run on a
/// dedicated runtime thread; completions are polled with [`Self::try_recv`].
/// Generation and kind pass through untouched; staleness is judged by the
/// state machine, never here.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ExecutorSettings) -> Result<Self, TransportError> {
        let executor = Arc::new(ReqwestExecutor::new(settings)?);
        Ok(Self::with_executor(executor))
    }

    pub fn with_executor(executor: Arc<dyn QueryExecutor>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let executor = executor.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(executor.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_page(&self, generation: Generation, kind: FetchKind, variables: QueryVariables) {
        let _ = self.cmd_tx.send(EngineCommand::FetchPage {
            generation,
            kind,
            variables,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    executor: &dyn QueryExecutor,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::FetchPage {
            generation,
            kind,
            variables,
        } => {
            catalog_debug!(
                "fetch_page generation={} kind={:?} offset={}",
                generation,
                kind,
                variables.offset
            );
            let result = executor.execute(&variables).await;
            if let Err(err) = &result {
                catalog_warn!("fetch_page generation={} failed: {}", generation, err);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted {
                generation,
                kind,
                result,
            });
        }
    }
}
