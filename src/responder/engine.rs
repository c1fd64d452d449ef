use crate::{
    Result,
    llm::{CompletionRequest, GenerationParams, LlmClient, PromptTemplate},
    timeout,
};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::debug;

pub const FALLBACK_MESSAGE: &str =
    "I don't have the model available here. Please try again later or use the hosted demo.";

pub const GENERATION_FAILED_MESSAGE: &str = "Sorry, the model failed to generate a response.";

/// Maps an English question to an English answer.
#[async_trait]
pub trait AnswerEngine: Send + Sync {
    async fn generate(&self, question: &str) -> Result<String>;
}

/// Engine backed by a generative model.
pub struct PrimaryEngine {
    template: PromptTemplate,
    client: Arc<dyn LlmClient>,
    params: GenerationParams,
    timeout: Duration,
}

impl PrimaryEngine {
    pub fn new(
        template: PromptTemplate,
        client: Arc<dyn LlmClient>,
        params: GenerationParams,
        timeout: Duration,
    ) -> Self {
        Self {
            template,
            client,
            params,
            timeout,
        }
    }
}

#[async_trait]
impl AnswerEngine for PrimaryEngine {
    async fn generate(&self, question: &str) -> Result<String> {
        let request = CompletionRequest {
            prompt: self.template.render(question),
            params: self.params.clone(),
        };

        let text = timeout::bounded("Generation", self.timeout, self.client.complete(request)).await?;

        debug!("Model produced {} chars", text.len());
        Ok(text.trim().to_string())
    }
}

/// Degraded engine bound when the primary engine cannot be built.
#[derive(Debug, Default)]
pub struct FallbackEngine;

#[async_trait]
impl AnswerEngine for FallbackEngine {
    async fn generate(&self, _question: &str) -> Result<String> {
        Ok(FALLBACK_MESSAGE.to_string())
    }
}
