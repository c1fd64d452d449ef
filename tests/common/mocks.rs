use async_trait::async_trait;
use govinfohub::{
    Error, Result,
    llm::{CompletionRequest, LlmClient},
    responder::{AnswerEngine, Construction, EngineBuilder},
    translation::Translator,
};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

/// Mock translation backend with scripted results and call recording
#[derive(Debug, Default)]
pub struct MockTranslator {
    detected: Option<String>,
    detect_error: Option<String>,
    translations: Mutex<HashMap<(String, String, String), String>>,
    translate_error: Option<String>,
    pub detect_calls: AtomicUsize,
    pub translate_calls: Mutex<Vec<(String, String, String)>>,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detecting(mut self, lang: &str) -> Self {
        self.detected = Some(lang.to_string());
        self
    }

    pub fn with_detect_error(mut self, error: &str) -> Self {
        self.detect_error = Some(error.to_string());
        self
    }

    pub fn with_translation(self, src: &str, dest: &str, text: &str, translated: &str) -> Self {
        self.translations.lock().unwrap().insert(
            (src.to_string(), dest.to_string(), text.to_string()),
            translated.to_string(),
        );
        self
    }

    pub fn with_translate_error(mut self, error: &str) -> Self {
        self.translate_error = Some(error.to_string());
        self
    }

    pub fn detect_count(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }

    pub fn translate_count(&self) -> usize {
        self.translate_calls.lock().unwrap().len()
    }

    pub fn get_translate_calls(&self) -> Vec<(String, String, String)> {
        self.translate_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn detect(&self, _text: &str) -> Result<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(ref error) = self.detect_error {
            return Err(Error::translation(error.clone()));
        }
        self.detected
            .clone()
            .ok_or_else(|| Error::translation("No mock detection configured"))
    }

    async fn translate(&self, text: &str, src: &str, dest: &str) -> Result<String> {
        let key = (src.to_string(), dest.to_string(), text.to_string());
        self.translate_calls.lock().unwrap().push(key.clone());

        if let Some(ref error) = self.translate_error {
            return Err(Error::translation(error.clone()));
        }
        self.translations
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .ok_or_else(|| Error::translation(format!("No mock translation for {:?}", key)))
    }
}

/// Mock answer engine recording every question it receives
pub struct MockEngine {
    answer: std::result::Result<String, String>,
    questions: Arc<Mutex<Vec<String>>>,
}

impl MockEngine {
    pub fn answering(answer: &str) -> Self {
        Self {
            answer: Ok(answer.to_string()),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            answer: Err(error.to_string()),
            questions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn questions(&self) -> Arc<Mutex<Vec<String>>> {
        self.questions.clone()
    }
}

#[async_trait]
impl AnswerEngine for MockEngine {
    async fn generate(&self, question: &str) -> Result<String> {
        self.questions.lock().unwrap().push(question.to_string());
        self.answer.clone().map_err(Error::llm)
    }
}

/// Engine builder counting how many constructions actually ran
pub struct CountingBuilder {
    engine: Option<Arc<dyn AnswerEngine>>,
    delay: Duration,
    builds: Arc<AtomicUsize>,
}

impl CountingBuilder {
    pub fn built(engine: Arc<dyn AnswerEngine>) -> Self {
        Self {
            engine: Some(engine),
            delay: Duration::ZERO,
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            engine: None,
            delay: Duration::ZERO,
            builds: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn builds(&self) -> Arc<AtomicUsize> {
        self.builds.clone()
    }
}

#[async_trait]
impl EngineBuilder for CountingBuilder {
    async fn build(&self) -> Construction {
        self.builds.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match self.engine {
            Some(ref engine) => Construction::Built(engine.clone()),
            None => Construction::unavailable("mock backend missing"),
        }
    }
}

/// Mock completion backend
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub response: Option<String>,
    pub error: Option<String>,
    pub delay: Option<Duration>,
    pub requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
            ..Self::default()
        }
    }

    pub fn with_error(error: &str) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }
        self.response
            .clone()
            .ok_or_else(|| Error::llm("No mock response available"))
    }

    async fn probe(&self) -> Result<()> {
        Ok(())
    }
}
