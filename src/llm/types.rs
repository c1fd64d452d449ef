use crate::config::{LlmConfig, RegistryConfig};
use serde::{Deserialize, Serialize};

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u16,
    pub top_p: f32,
    pub stop: Vec<String>,
    pub streaming: bool,
}

impl From<&LlmConfig> for GenerationParams {
    fn from(config: &LlmConfig) -> Self {
        Self {
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            top_p: config.top_p,
            stop: config.stop.clone(),
            streaming: config.streaming,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub params: GenerationParams,
}

/// A model file published in a remote registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelArtifact {
    pub repo_id: String,
    pub file_name: String,
    pub revision: String,
}

impl From<&RegistryConfig> for ModelArtifact {
    fn from(config: &RegistryConfig) -> Self {
        Self {
            repo_id: config.repo_id.clone(),
            file_name: config.file_name.clone(),
            revision: config.revision.clone(),
        }
    }
}
