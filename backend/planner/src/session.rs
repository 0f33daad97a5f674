use std::sync::Arc;

use tracing::{debug, info, warn};

use tutorforge_core::{
    resolve_teacher, ChatProvider, ChatRequest, QaRecord, Resolution, TeacherChoice, TutorError,
};
use tutorforge_logging::{preview, EventLogger, QaEvent};

use crate::prompt::build_user_prompt;

/// Model and sampling parameters for every question.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSettings {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            model: "deepseek-chat".to_string(),
            temperature: 0.8,
            max_tokens: 600,
        }
    }
}

/// Orchestrates one question/answer round: pick the teacher, frame the
/// prompt, call the chat provider, assemble the record.
///
/// Holds no UI state, so it runs the same from the CLI, a worker task or a test.
pub struct QaSession {
    provider: Arc<dyn ChatProvider>,
    settings: ChatSettings,
}

impl QaSession {
    pub fn new(provider: Arc<dyn ChatProvider>, settings: ChatSettings) -> Self {
        Self { provider, settings }
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Ask `question` with the given teacher choice. Errors propagate unchanged.
    pub async fn ask(&self, question: &str, choice: TeacherChoice) -> Result<QaRecord, TutorError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(TutorError::EmptyQuestion);
        }

        let (profile, resolution) = resolve_teacher(choice, question);
        let how = match resolution {
            Resolution::Explicit => "explicit",
            Resolution::Classified(_) => "classified",
            Resolution::Fallback => "fallback",
        };
        EventLogger::log_event(QaEvent::TeacherSelected {
            role: profile.display_role.to_string(),
            how: how.to_string(),
        });
        debug!(question = %preview(question, 40), role = profile.display_role, "Asking");

        let request = ChatRequest {
            model: self.settings.model.clone(),
            system_prompt: profile.system_prompt.to_string(),
            user_prompt: build_user_prompt(question),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let response = match self.provider.complete(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "Chat provider failed");
                EventLogger::log_event(QaEvent::Failed {
                    stage: "chat".to_string(),
                    error_msg: e.to_string(),
                });
                return Err(e);
            }
        };

        EventLogger::log_event(QaEvent::AnswerReceived {
            role: profile.display_role.to_string(),
            chars: response.content.chars().count(),
            tokens_used: response.tokens_used,
            latency_ms: response.latency_ms,
        });
        info!(
            provider = %response.provider,
            role = profile.display_role,
            "Answer received"
        );

        Ok(QaRecord::new(question, response.content, profile.display_role))
    }
}
