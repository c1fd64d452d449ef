//! Lazily bound answer engine with permanent fallback.

mod builder;
mod engine;

pub use builder::{
    Construction, DisabledEngineBuilder, EngineBuilder, PrimaryEngineBuilder, select_builder,
};
pub use engine::{
    AnswerEngine, FALLBACK_MESSAGE, FallbackEngine, GENERATION_FAILED_MESSAGE, PrimaryEngine,
};

use std::sync::Arc;
use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

/// Which engine the responder ended up bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    Primary,
    Degraded { reason: String },
}

/// Lifecycle of the binding as seen from outside, e.g. by `/health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Initializing,
    Bound(Readiness),
}

struct Binding {
    engine: Arc<dyn AnswerEngine>,
    readiness: Readiness,
}

pub struct Responder {
    builder: Box<dyn EngineBuilder>,
    binding: Mutex<Option<Binding>>,
    state: watch::Sender<EngineState>,
}

impl Responder {
    pub fn new(builder: Box<dyn EngineBuilder>) -> Self {
        Self {
            builder,
            binding: Mutex::new(None),
            state: watch::channel(EngineState::Uninitialized).0,
        }
    }

    /// Binds an engine on first call; later calls return the stored state.
    /// Concurrent first callers wait for a single construction.
    pub async fn ensure_ready(&self) -> Readiness {
        self.bound_engine().await.1
    }

    /// Current binding state. Never waits on or triggers construction.
    pub fn state(&self) -> EngineState {
        self.state.borrow().clone()
    }

    /// Answers an English question in English. Never fails: generation
    /// errors are logged and replaced with a canned message.
    pub async fn answer(&self, question: &str) -> String {
        let (engine, _) = self.bound_engine().await;
        match engine.generate(question).await {
            Ok(answer) => answer,
            Err(e) => {
                warn!("Answer engine failed: {}", e);
                GENERATION_FAILED_MESSAGE.to_string()
            }
        }
    }

    async fn bound_engine(&self) -> (Arc<dyn AnswerEngine>, Readiness) {
        let mut binding = self.binding.lock().await;

        if let Some(ref bound) = *binding {
            return (bound.engine.clone(), bound.readiness.clone());
        }

        self.state.send_replace(EngineState::Initializing);
        let bound = match self.builder.build().await {
            Construction::Built(engine) => {
                info!("Answer engine bound to primary model");
                Binding {
                    engine,
                    readiness: Readiness::Primary,
                }
            }
            Construction::Unavailable { reason } => {
                warn!("Primary engine unavailable, falling back: {}", reason);
                Binding {
                    engine: Arc::new(FallbackEngine),
                    readiness: Readiness::Degraded { reason },
                }
            }
        };

        let result = (bound.engine.clone(), bound.readiness.clone());
        self.state.send_replace(EngineState::Bound(bound.readiness.clone()));
        *binding = Some(bound);
        result
    }
}
