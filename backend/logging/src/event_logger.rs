//! Q&A Event Logger
//!
//! Structured events for each step of a question/answer round, emitted under
//! the `qa_events` tracing target so they land in the NDJSON log file.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::redact::redact_sensitive_data;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum QaEvent {
    TextRecognized {
        chars: usize,
        lines: usize,
    },
    TeacherSelected {
        role: String,
        /// "explicit", "classified" or "fallback"
        how: String,
    },
    AnswerReceived {
        role: String,
        chars: usize,
        tokens_used: u64,
        latency_ms: u64,
    },
    RecordSaved {
        path: String,
    },
    Failed {
        stage: String,
        error_msg: String,
    },
}

#[derive(Debug, Serialize)]
pub struct EventLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: QaEvent,
}

pub struct EventLogger;

impl EventLogger {
    /// Log a Q&A event, redacting free-text fields first.
    pub fn log_event(mut event: QaEvent) -> EventLogEntry {
        if let QaEvent::Failed { error_msg, .. } = &mut event {
            *error_msg = redact_sensitive_data(error_msg);
        }

        let entry = EventLogEntry {
            timestamp: Utc::now(),
            event,
        };

        let json = serde_json::to_string(&entry).unwrap_or_default();
        match entry.event {
            QaEvent::Failed { .. } => warn!(target: "qa_events", event = %json, "Q&A event"),
            _ => info!(target: "qa_events", event = %json, "Q&A event"),
        }
        entry
    }
}
