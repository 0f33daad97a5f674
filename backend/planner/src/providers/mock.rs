use std::sync::Mutex;

use async_trait::async_trait;
use tutorforge_core::{ChatProvider, ChatRequest, ChatResponse, TutorError};

/// A mock chat provider that returns canned replies or a canned HTTP failure.
///
/// Every request is recorded so tests can inspect the prompts that were sent.
pub struct MockProvider {
    name: String,
    fixed_response: Option<String>,
    fail_status: Option<(u16, String)>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fixed_response: None,
            fail_status: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Fail every call as if the server answered with `status`.
    pub fn failing(mut self, status: u16, body: impl Into<String>) -> Self {
        self.fail_status = Some((status, body.into()));
        self
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, req: &ChatRequest) -> Result<ChatResponse, TutorError> {
        if let Ok(mut seen) = self.requests.lock() {
            seen.push(req.clone());
        }
        if let Some((status, body)) = &self.fail_status {
            return Err(TutorError::chat_status(*status, body.clone()));
        }
        Ok(ChatResponse {
            content: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Mock response".to_string()),
            provider: self.name.clone(),
            model: req.model.clone(),
            tokens_used: 0,
            latency_ms: 0,
        })
    }
}
