use async_trait::async_trait;

use crate::error::TutorError;

/// Trait for chat-completion backends used by the Q&A session.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name (e.g., "deepseek", "mock").
    fn name(&self) -> &str;

    /// Send a system/user prompt pair and return the reply.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TutorError>;
}

/// Trait for text recognition backends.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Recognize the text in an encoded image (JPEG/PNG bytes).
    async fn recognize(&self, image: &[u8]) -> Result<String, TutorError>;
}

/// Request to a chat provider.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response from a chat provider.
#[derive(Debug, Clone)]
pub struct ChatResponse {
    pub content: String,
    pub provider: String,
    pub model: String,
    pub tokens_used: u64,
    pub latency_ms: u64,
}
