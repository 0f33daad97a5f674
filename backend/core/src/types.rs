use std::fmt;
use std::str::FromStr;

use chrono::{Local, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::error::TutorError;
use crate::teachers;

/// School subjects, in the fixed order used for keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Math,
    Chinese,
    English,
    Science,
    History,
    Morality,
    PhysicalEducation,
}

impl Subject {
    /// Declaration order; classification scans subjects in this order.
    pub const ALL: [Subject; 7] = [
        Subject::Math,
        Subject::Chinese,
        Subject::English,
        Subject::Science,
        Subject::History,
        Subject::Morality,
        Subject::PhysicalEducation,
    ];

    /// Stable subject identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Subject::Math => "数学",
            Subject::Chinese => "语文",
            Subject::English => "英语",
            Subject::Science => "科学",
            Subject::History => "历史",
            Subject::Morality => "政治",
            Subject::PhysicalEducation => "体育",
        }
    }

    pub fn from_id(id: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A teacher persona: role label plus the system prompt steering the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeacherProfile {
    pub subject: Subject,
    pub display_role: &'static str,
    pub system_prompt: &'static str,
}

/// Result of keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Subject(Subject),
    /// No keyword matched; the default teacher answers.
    Auto,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Subject(s) => write!(f, "{}", s),
            Classification::Auto => write!(f, "auto"),
        }
    }
}

/// Which teacher should answer: picked by the user, or detected from the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeacherChoice {
    #[default]
    Auto,
    Subject(Subject),
}

impl fmt::Display for TeacherChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeacherChoice::Auto => write!(f, "自动匹配"),
            TeacherChoice::Subject(s) => match teachers::profile_for(*s) {
                Some(profile) => write!(f, "{}", profile.display_role),
                None => write!(f, "{}老师", s.id()),
            },
        }
    }
}

impl FromStr for TeacherChoice {
    type Err = TutorError;

    /// Accepts `auto`, `自动匹配`, a subject id (`数学`), a display role
    /// (`品德老师`) or `<subject id>老师` (`政治老师`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") || s == "自动匹配" {
            return Ok(TeacherChoice::Auto);
        }
        if let Some(subject) = Subject::from_id(s) {
            return Ok(TeacherChoice::Subject(subject));
        }
        if let Some(profile) = teachers::TEACHERS.iter().find(|p| p.display_role == s) {
            return Ok(TeacherChoice::Subject(profile.subject));
        }
        if let Some(subject) = s.strip_suffix("老师").and_then(Subject::from_id) {
            return Ok(TeacherChoice::Subject(subject));
        }
        Err(TutorError::UnknownTeacher(s.to_string()))
    }
}

/// OCR provider credentials (`appId:appSecret`).
#[derive(Clone, PartialEq, Eq)]
pub struct OcrCredentials {
    pub app_id: String,
    pub app_secret: String,
}

impl fmt::Debug for OcrCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OcrCredentials")
            .field("app_id", &self.app_id)
            .field("app_secret", &"***")
            .finish()
    }
}

/// One completed question/answer round.
///
/// `teacher_role` is a copy of the profile's display role at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    #[serde(rename = "teacher")]
    pub teacher_role: String,
    #[serde(rename = "timestamp")]
    pub timestamp_iso: String,
}

impl QaRecord {
    /// Build a record stamped with the current local time.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        teacher_role: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            teacher_role: teacher_role.into(),
            timestamp_iso: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_ids_round_trip() {
        for subject in Subject::ALL {
            assert_eq!(Subject::from_id(subject.id()), Some(subject));
        }
        assert_eq!(Subject::from_id("音乐"), None);
    }

    #[test]
    fn parses_teacher_choices() {
        assert_eq!("auto".parse::<TeacherChoice>().unwrap(), TeacherChoice::Auto);
        assert_eq!("自动匹配".parse::<TeacherChoice>().unwrap(), TeacherChoice::Auto);
        assert_eq!(
            "数学".parse::<TeacherChoice>().unwrap(),
            TeacherChoice::Subject(Subject::Math)
        );
        assert_eq!(
            "品德老师".parse::<TeacherChoice>().unwrap(),
            TeacherChoice::Subject(Subject::Morality)
        );
        assert_eq!(
            "政治老师".parse::<TeacherChoice>().unwrap(),
            TeacherChoice::Subject(Subject::Morality)
        );
        assert!(matches!(
            "音乐老师".parse::<TeacherChoice>(),
            Err(TutorError::UnknownTeacher(_))
        ));
    }

    #[test]
    fn choice_displays_role() {
        assert_eq!(TeacherChoice::Subject(Subject::Morality).to_string(), "品德老师");
        assert_eq!(TeacherChoice::Auto.to_string(), "自动匹配");
    }

    #[test]
    fn record_serializes_with_persisted_keys() {
        let record = QaRecord {
            question: "q".into(),
            answer: "a".into(),
            teacher_role: "语文老师".into(),
            timestamp_iso: "2026-10-15T09:30:00+08:00".into(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"question":"q","answer":"a","teacher":"语文老师","timestamp":"2026-10-15T09:30:00+08:00"}"#
        );
    }

    #[test]
    fn credentials_debug_hides_secret() {
        let creds = OcrCredentials {
            app_id: "app".into(),
            app_secret: "hunter2".into(),
        };
        let shown = format!("{:?}", creds);
        assert!(shown.contains("app"));
        assert!(!shown.contains("hunter2"));
    }

    #[test]
    fn new_record_is_timestamped() {
        let record = QaRecord::new("q", "a", "数学老师");
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp_iso).is_ok());
    }
}
