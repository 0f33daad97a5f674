//! Keyword-based subject classification and teacher resolution.
//!
//! Matching is case-insensitive substring containment over the fixed keyword
//! table. The first subject (in declaration order) with any matching keyword
//! wins; there is no scoring.

use crate::teachers::{default_profile, profile_for, SUBJECT_KEYWORDS};
use crate::types::{Classification, Subject, TeacherChoice, TeacherProfile};

/// How a teacher profile was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The user chose this teacher.
    Explicit,
    /// Auto mode matched a keyword of this subject.
    Classified(Subject),
    /// Nothing usable matched; the default teacher answers.
    Fallback,
}

/// Map question text to a subject, or [`Classification::Auto`] when no keyword matches.
pub fn classify(text: &str) -> Classification {
    let text = text.to_lowercase();
    if text.is_empty() {
        return Classification::Auto;
    }
    for (subject, keywords) in SUBJECT_KEYWORDS {
        if keywords
            .iter()
            .any(|keyword| text.contains(&keyword.to_lowercase()))
        {
            return Classification::Subject(*subject);
        }
    }
    Classification::Auto
}

/// Pick the profile that answers `question` under `choice`.
///
/// A subject without a registered profile resolves to the default profile,
/// whether it was chosen explicitly or classified.
pub fn resolve_teacher(
    choice: TeacherChoice,
    question: &str,
) -> (&'static TeacherProfile, Resolution) {
    match choice {
        TeacherChoice::Subject(subject) => match profile_for(subject) {
            Some(profile) => (profile, Resolution::Explicit),
            None => (default_profile(), Resolution::Fallback),
        },
        TeacherChoice::Auto => match classify(question) {
            Classification::Subject(subject) => match profile_for(subject) {
                Some(profile) => (profile, Resolution::Classified(subject)),
                None => (default_profile(), Resolution::Fallback),
            },
            Classification::Auto => (default_profile(), Resolution::Fallback),
        },
    }
}

/// Teacher to preselect after text recognition.
pub fn suggest_teacher(recognized: &str) -> TeacherChoice {
    match classify(recognized) {
        Classification::Subject(subject) if profile_for(subject).is_some() => {
            TeacherChoice::Subject(subject)
        }
        _ => TeacherChoice::Auto,
    }
}
