use super::Translator;
use crate::{Error, Result, config::TranslationConfig};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Client for the public Google Translate web endpoint.
///
/// A single request serves both detection (source `auto`) and translation;
/// the response is a nested JSON array whose first element holds the
/// translated segments and whose third element is the source language.
pub struct GoogleTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    async fn request(&self, text: &str, src: &str, dest: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, TRANSLATE_PATH);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", src),
                ("tl", dest),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::translation(format!(
                "Translate endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body: Value = response.json().await?;
        Ok(body)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn detect(&self, text: &str) -> Result<String> {
        let body = self.request(text, "auto", "en").await?;
        let lang = parse_detected_language(&body)?;
        debug!("Detected language: {}", lang);
        Ok(lang)
    }

    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String> {
        let body = self.request(text, src, dest).await?;
        parse_translation(&body)
    }
}

fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::translation("Response has no translation segments"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        return Err(Error::translation("Response translation is empty"));
    }
    Ok(translated)
}

fn parse_detected_language(body: &Value) -> Result<String> {
    body.get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::translation("Response has no detected language"))
}
