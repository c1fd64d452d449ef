use govinfohub::config::{self, EngineMode, LogFormat};
use pretty_assertions::assert_eq;

mod common;

use common::test_utils::{
    INVALID_CONFIG_YAML, SAMPLE_CONFIG_YAML, create_temp_dir, create_test_config_file,
};

#[tokio::test]
async fn test_load_sample_config() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML)
        .await
        .unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.frontend_path, "web/index.html");
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.server.logs.format, LogFormat::Pretty);
    assert_eq!(config.llm.mode, EngineMode::Primary);
    assert_eq!(
        config.llm.system_prompt,
        "You answer questions about public services."
    );
    assert_eq!(config.llm.max_tokens, 256);
    assert_eq!(config.llm.stop, vec!["[INST]", "</s>"]);
    assert!(!config.llm.streaming);
    assert_eq!(config.llm.timeout_secs, 30);
    assert_eq!(
        config.llm.registry.file_name,
        "mistral-7b-instruct-v0.1.Q5_K_M.gguf"
    );
    assert_eq!(config.llm.registry.cache_dir, "/var/cache/models");
    assert_eq!(config.llm.registry.revision, "main");
    assert_eq!(config.translation.timeout_secs, 3);
}

#[tokio::test]
async fn test_missing_file_uses_defaults() {
    let dir = create_temp_dir();
    let path = dir.path().join("absent.yaml");

    let config = config::load_from(&path.to_string_lossy()).await.unwrap();

    assert_eq!(config.server.port, 8000);
    assert_eq!(config.llm.max_tokens, 512);
    assert_eq!(
        config.llm.system_prompt,
        "You are a helpful AI assistant who answers questions in short sentences."
    );
}

#[tokio::test]
async fn test_invalid_config_is_rejected() {
    let dir = create_temp_dir();
    let path = create_test_config_file(&dir, INVALID_CONFIG_YAML)
        .await
        .unwrap();

    assert!(config::load_from(&path).await.is_err());
}
