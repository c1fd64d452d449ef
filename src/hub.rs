use crate::{
    Error, Result,
    config::Config,
    responder::{Responder, select_builder},
    translation::{LanguageCode, TranslationAdapter},
};
use std::sync::Arc;
use tracing::{debug, info};

/// An answer together with the language it was delivered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub language: LanguageCode,
    pub text: String,
}

/// Single entry point for the question flow:
/// detect, translate to English, answer, translate back.
pub struct Hub {
    responder: Arc<Responder>,
    translator: TranslationAdapter,
}

impl Hub {
    pub fn new(responder: Arc<Responder>, translator: TranslationAdapter) -> Self {
        Self {
            responder,
            translator,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let responder = Responder::new(select_builder(&config.llm));
        let translator = TranslationAdapter::from_config(&config.translation);
        info!(
            "Hub configured: engine mode {:?}, translation {}",
            config.llm.mode,
            if translator.is_available() {
                "enabled"
            } else {
                "disabled"
            }
        );
        Self::new(Arc::new(responder), translator)
    }

    pub fn responder(&self) -> &Arc<Responder> {
        &self.responder
    }

    pub async fn ask(&self, question: &str) -> Result<String> {
        Ok(self.reply(question).await?.text)
    }

    pub async fn reply(&self, question: &str) -> Result<Reply> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::MissingQuestion);
        }

        let english = LanguageCode::english();
        let source = self.translator.detect(question).await;
        debug!("Question language: {}", source);

        let english_question = self.translator.translate(question, &source, &english).await;
        let english_answer = self.responder.answer(&english_question).await;
        let text = self
            .translator
            .translate(&english_answer, &english, &source)
            .await;

        Ok(Reply {
            language: source,
            text,
        })
    }
}
