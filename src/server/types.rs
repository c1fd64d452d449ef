use serde::{Deserialize, Serialize};

/// Question fields accepted from the query string or the JSON body.
/// `prompt` is the field name used by the chatbot route.
#[derive(Debug, Default, Deserialize)]
pub struct AskParams {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

impl AskParams {
    /// First non-blank of `question` and `prompt`.
    pub fn into_question(self) -> Option<String> {
        [self.question, self.prompt]
            .into_iter()
            .flatten()
            .find(|q| !q.trim().is_empty())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct FrontendStatus {
    pub status: String,
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
