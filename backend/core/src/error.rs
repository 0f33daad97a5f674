use thiserror::Error;

/// Top-level error type for TutorForge operations.
///
/// Every variant is recoverable: the caller reports it and the user may retry.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("failed to read credential file {path}: {reason}")]
    CredentialRead { path: String, reason: String },

    #[error("OCR recognition failed: {0}")]
    Ocr(String),

    #[error("chat API call failed: {message}")]
    Chat { status: Option<u16>, message: String },

    #[error("malformed Q&A record: {0}")]
    RecordFormat(String),

    #[error("no question to ask; recognize or type a question first")]
    EmptyQuestion,

    #[error("no Q&A record is available")]
    NoRecord,

    #[error("unknown teacher: {0}")]
    UnknownTeacher(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TutorError {
    /// Chat failure carrying the HTTP status and raw response body.
    pub fn chat_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::Chat {
            status: Some(status),
            message: format!("{} - {}", status, body),
        }
    }

    /// Chat failure with no HTTP status (transport error, malformed reply).
    pub fn chat(message: impl Into<String>) -> Self {
        Self::Chat {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status of a failed chat call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Chat { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_status_keeps_code_and_body() {
        let err = TutorError::chat_status(500, "upstream exploded");
        assert_eq!(err.status(), Some(500));
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("upstream exploded"));
    }

    #[test]
    fn non_chat_errors_have_no_status() {
        assert_eq!(TutorError::Ocr("bad".into()).status(), None);
        assert_eq!(TutorError::chat("timeout").status(), None);
    }
}
