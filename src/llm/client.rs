use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{CreateCompletionRequestArgs, Prompt, Stop},
};
use async_trait::async_trait;
use futures::StreamExt;
use tracing::debug;

/// Text-completion backend: structured prompt plus sampling parameters in,
/// generated text out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Cheap connectivity check against the backend.
    async fn probe(&self) -> Result<()>;
}

/// Client for OpenAI-compatible completion servers (llama.cpp, vLLM, ...).
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig, model: impl Into<String>) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.clone());
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let params = request.params;
        debug!(
            "Creating completion: {} prompt chars, temperature={}, max_tokens={}, top_p={}, streaming={}",
            request.prompt.len(),
            params.temperature,
            params.max_tokens,
            params.top_p,
            params.streaming
        );

        let mut request_builder = CreateCompletionRequestArgs::default();
        request_builder
            .model(&self.model)
            .prompt(Prompt::String(request.prompt))
            .temperature(params.temperature)
            .top_p(params.top_p)
            .max_tokens(params.max_tokens);

        if !params.stop.is_empty() {
            request_builder.stop(Stop::StringArray(params.stop));
        }

        let openai_request = request_builder.build()?;

        if params.streaming {
            let mut stream = self.client.completions().create_stream(openai_request).await?;
            let mut text = String::new();
            while let Some(chunk) = stream.next().await {
                for choice in chunk?.choices {
                    text.push_str(&choice.text);
                }
            }
            debug!("Streamed completion finished with {} chars", text.len());
            return Ok(text);
        }

        let response = self.client.completions().create(openai_request).await?;

        debug!(
            "Received completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| Error::llm("Completion response contained no choices"))
    }

    async fn probe(&self) -> Result<()> {
        let models = self.client.models().list().await?;
        debug!("Backend reachable, {} models listed", models.data.len());
        Ok(())
    }
}
