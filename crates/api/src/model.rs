use crate::error::ApiError;
use async_trait::async_trait;
use florastack_core::Assistant;

/// Backend that turns a prompt into an answer.
///
/// The generated site ships with `PlaceholderModel`; a real provider
/// implements this trait and is handed to `AppState::new`.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn answer(&self, prompt: &str) -> Result<String, ApiError>;
}

/// Echoes the prompt back inside a fixed sentence
pub struct PlaceholderModel {
    assistant: Assistant,
}

impl PlaceholderModel {
    pub fn new(assistant: Assistant) -> Self {
        Self { assistant }
    }
}

#[async_trait]
impl LanguageModel for PlaceholderModel {
    async fn answer(&self, prompt: &str) -> Result<String, ApiError> {
        Ok(self.assistant.placeholder_answer(prompt))
    }
}
