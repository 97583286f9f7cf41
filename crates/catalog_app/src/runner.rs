use catalog_core::{Effect, LoadError, Msg};
use catalog_engine::{EngineEvent, EngineHandle, ExecutorSettings, TransportError};
use catalog_logging::catalog_info;

/// Executes loader effects against the engine and maps completions back
/// into messages. The structured transport error collapses to its display
/// form here; the state machine only keeps the message.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ExecutorSettings) -> Result<Self, TransportError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage {
                    generation,
                    kind,
                    variables,
                } => {
                    catalog_info!(
                        "FetchPage generation={} kind={:?} ids={:?} first={} offset={}",
                        generation,
                        kind,
                        variables.ids,
                        variables.first,
                        variables.offset
                    );
                    self.engine.fetch_page(generation, kind, variables);
                }
            }
        }
    }

    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::FetchCompleted {
                generation,
                kind,
                result,
            } => Msg::FetchCompleted {
                generation,
                kind,
                result: result.map_err(|err| LoadError::new(err.to_string())),
            },
        })
    }
}
