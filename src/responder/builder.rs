use super::engine::{AnswerEngine, PrimaryEngine};
use crate::{
    config::{EngineMode, LlmConfig},
    llm::{
        GenerationParams, HuggingFaceRegistry, LlmClient, ModelArtifact, ModelRegistry,
        OpenAiClient, PromptTemplate,
    },
    timeout,
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info};

/// Outcome of an attempt to build the primary answer engine.
pub enum Construction {
    Built(Arc<dyn AnswerEngine>),
    Unavailable { reason: String },
}

impl Construction {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

#[async_trait]
pub trait EngineBuilder: Send + Sync {
    async fn build(&self) -> Construction;
}

/// Builder that never produces an engine; used when the model backend is
/// switched off or not configured.
pub struct DisabledEngineBuilder {
    reason: String,
}

impl DisabledEngineBuilder {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl EngineBuilder for DisabledEngineBuilder {
    async fn build(&self) -> Construction {
        Construction::unavailable(self.reason.clone())
    }
}

/// Resolves the model artifact, connects to the completion backend and
/// wraps both in a `PrimaryEngine`.
pub struct PrimaryEngineBuilder {
    config: LlmConfig,
    registry: Arc<dyn ModelRegistry>,
}

impl PrimaryEngineBuilder {
    pub fn new(config: LlmConfig, registry: Arc<dyn ModelRegistry>) -> Self {
        Self { config, registry }
    }
}

#[async_trait]
impl EngineBuilder for PrimaryEngineBuilder {
    async fn build(&self) -> Construction {
        let artifact = ModelArtifact::from(&self.config.registry);
        let model_path = match self.registry.resolve(&artifact).await {
            Ok(path) => path,
            Err(e) => {
                return Construction::unavailable(format!(
                    "model artifact {}/{} unavailable: {}",
                    artifact.repo_id, artifact.file_name, e
                ));
            }
        };

        let client = OpenAiClient::new(&self.config, model_path.to_string_lossy());

        let timeout = Duration::from_secs(self.config.timeout_secs);

        if self.config.probe_backend {
            if let Err(e) = timeout::bounded("Backend probe", timeout, client.probe()).await {
                return Construction::unavailable(format!(
                    "generation backend at {} unreachable: {}",
                    self.config.base_url, e
                ));
            }
            debug!("Generation backend probe succeeded");
        }

        info!("Primary engine ready with model: {}", model_path.display());

        Construction::Built(Arc::new(PrimaryEngine::new(
            PromptTemplate::new(&self.config.system_prompt),
            Arc::new(client),
            GenerationParams::from(&self.config),
            timeout,
        )))
    }
}

/// Picks the engine builder once at startup from explicit configuration.
pub fn select_builder(config: &LlmConfig) -> Box<dyn EngineBuilder> {
    match config.mode {
        EngineMode::Fallback => Box::new(DisabledEngineBuilder::new(
            "fallback mode selected in configuration",
        )),
        EngineMode::Primary if config.base_url.trim().is_empty() => Box::new(
            DisabledEngineBuilder::new("no generation backend base_url configured"),
        ),
        EngineMode::Primary => match HuggingFaceRegistry::new(&config.registry) {
            Ok(registry) => Box::new(PrimaryEngineBuilder::new(config.clone(), Arc::new(registry))),
            Err(e) => Box::new(DisabledEngineBuilder::new(format!(
                "model registry client unavailable: {}",
                e
            ))),
        },
    }
}
