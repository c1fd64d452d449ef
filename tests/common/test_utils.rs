use super::mocks::MockTranslator;
use govinfohub::{
    Result,
    hub::Hub,
    responder::{DisabledEngineBuilder, EngineBuilder, Responder},
    translation::TranslationAdapter,
};
use std::{sync::Arc, time::Duration};
use tempfile::TempDir;
use tokio::fs;

/// Responder whose primary engine can never be built
pub fn fallback_responder() -> Arc<Responder> {
    Arc::new(Responder::new(Box::new(DisabledEngineBuilder::new(
        "model runtime not installed",
    ))))
}

pub fn responder_with(builder: impl EngineBuilder + 'static) -> Arc<Responder> {
    Arc::new(Responder::new(Box::new(builder)))
}

pub fn adapter_for(translator: &Arc<MockTranslator>) -> TranslationAdapter {
    TranslationAdapter::new(translator.clone(), Duration::from_secs(5))
}

pub fn hub_with(translator: &Arc<MockTranslator>, responder: Arc<Responder>) -> Hub {
    Hub::new(responder, adapter_for(translator))
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  frontend_path: "web/index.html"
  logs:
    level: "debug"
    format: "pretty"

llm:
  mode: "primary"
  base_url: "http://localhost:8081/v1"
  system_prompt: "You answer questions about public services."
  max_tokens: 256
  stop: ["[INST]", "</s>"]
  streaming: false
  timeout_secs: 30
  registry:
    repo_id: "TheBloke/Mistral-7B-Instruct-v0.1-GGUF"
    file_name: "mistral-7b-instruct-v0.1.Q5_K_M.gguf"
    cache_dir: "/var/cache/models"

translation:
  enabled: true
  timeout_secs: 3
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
llm:
  mode: "quantum"
"#;
