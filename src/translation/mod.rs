//! Best-effort language detection and translation.

mod google;
mod language;

pub use google::GoogleTranslator;
pub use language::LanguageCode;

use crate::{Result, config::TranslationConfig, timeout};
use async_trait::async_trait;
use std::{sync::Arc, time::Duration};
use tracing::{debug, warn};

#[async_trait]
pub trait Translator: Send + Sync {
    async fn detect(&self, text: &str) -> Result<String>;
    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String>;
}

/// Wraps an optional `Translator` so that no call can fail.
#[derive(Clone)]
pub struct TranslationAdapter {
    backend: Option<Arc<dyn Translator>>,
    timeout: Duration,
}

impl TranslationAdapter {
    pub fn new(backend: Arc<dyn Translator>, timeout: Duration) -> Self {
        Self {
            backend: Some(backend),
            timeout,
        }
    }

    /// Adapter with no translation capability: detection yields English and
    /// translation passes text through.
    pub fn unavailable() -> Self {
        Self {
            backend: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TranslationConfig) -> Self {
        if !config.enabled {
            debug!("Translation disabled in configuration");
            return Self::unavailable();
        }

        match GoogleTranslator::new(config) {
            Ok(translator) => Self::new(
                Arc::new(translator),
                Duration::from_secs(config.timeout_secs),
            ),
            Err(e) => {
                warn!("Translation backend unavailable: {}", e);
                Self::unavailable()
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Detected language of `text`, or English on any failure.
    pub async fn detect(&self, text: &str) -> LanguageCode {
        let Some(ref backend) = self.backend else {
            return LanguageCode::english();
        };

        match self.bounded("Language detection", backend.detect(text)).await {
            Ok(raw) => {
                let code = LanguageCode::new(&raw);
                if code.is_known() {
                    code
                } else {
                    debug!("Detection returned unknown code '{}', assuming English", raw);
                    LanguageCode::english()
                }
            }
            Err(e) => {
                warn!("Language detection failed: {}", e);
                LanguageCode::english()
            }
        }
    }

    /// `text` translated from `src` to `dest`, or `text` itself when no
    /// translation is needed or possible.
    pub async fn translate(&self, text: &str, src: &LanguageCode, dest: &LanguageCode) -> String {
        let Some(ref backend) = self.backend else {
            return text.to_string();
        };
        if !src.is_known() || !dest.is_known() || src == dest {
            return text.to_string();
        }

        match self
            .bounded(
                "Translation",
                backend.translate(text, src.as_str(), dest.as_str()),
            )
            .await
        {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Translation {} -> {} failed: {}", src, dest, e);
                text.to_string()
            }
        }
    }

    async fn bounded<F>(&self, operation: &str, call: F) -> Result<String>
    where
        F: std::future::Future<Output = Result<String>>,
    {
        timeout::bounded(operation, self.timeout, call).await
    }
}
