pub mod classifier;
pub mod error;
pub mod teachers;
pub mod traits;
pub mod types;

pub use classifier::{classify, resolve_teacher, suggest_teacher, Resolution};
pub use error::TutorError;
pub use teachers::{default_profile, profile_for, DEFAULT_SUBJECT, SUBJECT_KEYWORDS, TEACHERS};
pub use traits::{ChatProvider, ChatRequest, ChatResponse, OcrEngine};
pub use types::{Classification, OcrCredentials, QaRecord, Subject, TeacherChoice, TeacherProfile};
