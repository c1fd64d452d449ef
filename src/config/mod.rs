mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

/// Loads the configuration from `config_path`, falling back to built-in
/// defaults when the file does not exist, then applies environment overrides.
pub async fn load_from(config_path: &str) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        let config_str = tokio::fs::read_to_string(config_path).await?;
        parse(&config_str)?
    } else {
        debug!("No configuration file at {}, using defaults", config_path);
        Config::default()
    };

    apply_overrides(&mut config, |key| env::var(key).ok());
    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty file deserializes to `null`, which serde_yaml rejects for a struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Applies `LLM_BASE_URL`, `LLM_API_KEY` and `HF_TOKEN` from `lookup`.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(base_url) = lookup("LLM_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(api_key) = lookup("LLM_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(token) = lookup("HF_TOKEN").filter(|t| !t.is_empty()) {
        config.llm.registry.token = Some(token);
    }
}
