//! The single active session: recognized text, selected teacher and the
//! current Q&A record.
//!
//! Operations either succeed and replace state wholesale or fail and leave it
//! untouched.

use tutorforge_core::{suggest_teacher, QaRecord, TeacherChoice, TutorError};
use tutorforge_logging::{EventLogger, QaEvent};

use crate::session::QaSession;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionState {
    recognized: String,
    selected: TeacherChoice,
    current: Option<QaRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recognized(&self) -> &str {
        &self.recognized
    }

    pub fn selected(&self) -> TeacherChoice {
        self.selected
    }

    pub fn current(&self) -> Option<&QaRecord> {
        self.current.as_ref()
    }

    /// Store freshly recognized (or typed) text and preselect a teacher for it.
    pub fn set_recognized(&mut self, text: impl Into<String>) {
        self.recognized = text.into();
        self.selected = suggest_teacher(&self.recognized);
        EventLogger::log_event(QaEvent::TextRecognized {
            chars: self.recognized.chars().count(),
            lines: self.recognized.lines().count(),
        });
    }

    pub fn select_teacher(&mut self, choice: TeacherChoice) {
        self.selected = choice;
    }

    /// Ask the stored question with the selected teacher. The current record
    /// is replaced only on success.
    pub async fn ask(&mut self, session: &QaSession) -> Result<&QaRecord, TutorError> {
        let record = session.ask(&self.recognized, self.selected).await?;
        Ok(self.current.insert(record))
    }

    /// Replace the current record with one loaded from disk.
    pub fn load_record(&mut self, record: QaRecord) {
        self.recognized = record.question.clone();
        self.current = Some(record);
    }

    /// Reset to an empty session in auto mode.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
