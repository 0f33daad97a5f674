use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tutorforge_core::{ChatProvider, ChatRequest, ChatResponse, TutorError};

/// DeepSeek chat-completions provider.
pub struct DeepSeekProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into().trim().to_string(),
            base_url: "https://api.deepseek.com".to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: Option<u64>,
}

/// Pull `choices[0].message.content` out of a completion body.
fn parse_completion(body: &str) -> Result<(String, u64), TutorError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| TutorError::chat(format!("malformed chat response: {}", e)))?;

    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| TutorError::chat("chat response has no choices[0].message.content"))?;

    let tokens_used = parsed.usage.and_then(|u| u.total_tokens).unwrap_or(0);
    Ok((content, tokens_used))
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, TutorError> {
        let start = Instant::now();

        let body = CompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system_prompt,
                },
                Message {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            model = %request.model,
            "Sending request to DeepSeek"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TutorError::chat(format!("DeepSeek HTTP request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TutorError::chat(format!("failed to read DeepSeek response: {}", e)))?;
        if !status.is_success() {
            return Err(TutorError::chat_status(status.as_u16(), text));
        }

        let (content, tokens_used) = parse_completion(&text)?;

        Ok(ChatResponse {
            content,
            provider: "deepseek".to_string(),
            model: request.model.clone(),
            tokens_used,
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
