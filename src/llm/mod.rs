pub mod client;
pub mod prompt;
pub mod registry;
pub mod types;

pub use client::{LlmClient, OpenAiClient};
pub use prompt::PromptTemplate;
pub use registry::{HuggingFaceRegistry, ModelRegistry};
pub use types::*;
