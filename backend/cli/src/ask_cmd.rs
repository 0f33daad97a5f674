//! `ocr` and `ask`: the recognize-then-answer round.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use tracing::info;

use tutorforge_core::{suggest_teacher, TeacherChoice};
use tutorforge_logging::{preview, EventLogger, QaEvent};
use tutorforge_planner::SessionState;
use tutorforge_records::{display_text, print_current, save_current, SystemPrintHandler};

use crate::context::AppContext;
use crate::terminal_output::{dim, note_info, note_success};

pub struct AskArgs {
    pub image: Option<PathBuf>,
    pub question: Option<String>,
    pub teacher: Option<String>,
    pub save: Option<PathBuf>,
    pub print: bool,
}

async fn recognize(ctx: &AppContext, image: &Path) -> Result<String> {
    let client = ctx.ocr_client().await?;
    match client.recognize_file(image).await {
        Ok(text) => Ok(text),
        Err(e) => {
            EventLogger::log_event(QaEvent::Failed {
                stage: "ocr".to_string(),
                error_msg: e.to_string(),
            });
            Err(e.into())
        }
    }
}

pub async fn run_ocr(ctx: &AppContext, image: &Path) -> Result<()> {
    let text = recognize(ctx, image).await?;
    println!("{text}");
    println!();
    note_info(&format!("Suggested teacher: {}", suggest_teacher(&text)));
    Ok(())
}

pub async fn run_ask(ctx: &AppContext, args: AskArgs) -> Result<()> {
    let choice = args
        .teacher
        .as_deref()
        .map(str::parse::<TeacherChoice>)
        .transpose()?;

    let mut state = SessionState::new();
    let text = match (&args.image, args.question) {
        (Some(image), _) => recognize(ctx, image).await?,
        (None, Some(question)) => question,
        (None, None) => bail!("provide --image or --question"),
    };
    state.set_recognized(text);
    if args.image.is_some() {
        println!("{}", dim(state.recognized()));
        println!();
    }

    if let Some(choice) = choice {
        state.select_teacher(choice);
    }
    info!(
        question = %preview(state.recognized(), 40),
        teacher = %state.selected(),
        "Asking"
    );

    let session = ctx.qa_session().await?;
    let record = tokio::select! {
        result = state.ask(&session) => result?.clone(),
        _ = tokio::signal::ctrl_c() => bail!("cancelled"),
    };
    println!("{}", display_text(&record));

    if let Some(path) = &args.save {
        save_current(state.current(), path)?;
        println!();
        note_success(&format!("Saved to {}", path.display()));
    }
    if args.print {
        let printed = print_current(state.current(), &ctx.print_dir(), &SystemPrintHandler)?;
        note_success(&format!("Sent {} to the printer", printed.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorforge_config::{apply_all_defaults, TutorConfig};
    use tutorforge_core::TutorError;

    #[tokio::test]
    async fn unknown_teacher_fails_before_recognition() {
        let dir = tempfile::tempdir().unwrap();
        let config = apply_all_defaults(TutorConfig::default(), dir.path());
        let ctx = AppContext::new(dir.path().to_path_buf(), config);
        let args = AskArgs {
            image: Some(dir.path().join("question.jpg")),
            question: None,
            teacher: Some("音乐".into()),
            save: None,
            print: false,
        };

        let err = run_ask(&ctx, args).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TutorError>(),
            Some(TutorError::UnknownTeacher(name)) if name == "音乐"
        ));
    }
}
