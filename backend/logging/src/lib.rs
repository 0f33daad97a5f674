//! Structured logging for TutorForge.
//!
//! Handles subscriber setup (console + rolling NDJSON file), log redaction,
//! and Q&A event logging.

pub mod event_logger;
pub mod logger;
pub mod redact;

pub use event_logger::{EventLogEntry, EventLogger, QaEvent};
pub use logger::{build_filter, init_logger};
pub use redact::{preview, redact_secrets, redact_sensitive_data};
