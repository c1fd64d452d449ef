use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub translation: TranslationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default = "default_frontend_path")]
    pub frontend_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

/// Which answer engine the responder should try to bind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineMode {
    #[default]
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub mode: EngineMode,
    /// OpenAI-compatible completion endpoint, e.g. a llama.cpp server.
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u16,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,
    #[serde(default = "default_true")]
    pub streaming: bool,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_true")]
    pub probe_backend: bool,
    #[serde(default)]
    pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_registry_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_repo_id")]
    pub repo_id: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_revision")]
    pub revision: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_registry_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_translation_base_url")]
    pub base_url: String,
    #[serde(default = "default_translation_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            frontend_path: default_frontend_path(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::default(),
            base_url: default_llm_base_url(),
            api_key: String::new(),
            system_prompt: default_system_prompt(),
            temperature: 0.0,
            max_tokens: default_max_tokens(),
            top_p: default_top_p(),
            stop: default_stop(),
            streaming: true,
            timeout_secs: default_llm_timeout_secs(),
            probe_backend: true,
            registry: RegistryConfig::default(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_registry_endpoint(),
            repo_id: default_repo_id(),
            file_name: default_file_name(),
            revision: default_revision(),
            cache_dir: default_cache_dir(),
            token: None,
            timeout_secs: default_registry_timeout_secs(),
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_translation_base_url(),
            timeout_secs: default_translation_timeout_secs(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_frontend_path() -> String {
    "FRONTEND/src/main.html".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_llm_base_url() -> String {
    "http://127.0.0.1:8081/v1".to_string()
}

fn default_system_prompt() -> String {
    "You are a helpful AI assistant who answers questions in short sentences.".to_string()
}

fn default_max_tokens() -> u16 {
    512
}

fn default_top_p() -> f32 {
    1.0
}

fn default_stop() -> Vec<String> {
    vec!["[INST]".to_string()]
}

fn default_llm_timeout_secs() -> u64 {
    120
}

fn default_registry_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_repo_id() -> String {
    "TheBloke/Mistral-7B-Instruct-v0.1-GGUF".to_string()
}

fn default_file_name() -> String {
    "mistral-7b-instruct-v0.1.Q4_0.gguf".to_string()
}

fn default_revision() -> String {
    "main".to_string()
}

fn default_cache_dir() -> String {
    "models".to_string()
}

fn default_registry_timeout_secs() -> u64 {
    30
}

fn default_translation_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_translation_timeout_secs() -> u64 {
    10
}
