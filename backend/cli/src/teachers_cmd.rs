//! `teachers` and `classify`: inspect the teacher table and keyword routing.

use anyhow::Result;

use tutorforge_core::{
    classify, resolve_teacher, Resolution, TeacherChoice, DEFAULT_SUBJECT, SUBJECT_KEYWORDS,
    TEACHERS,
};

use crate::terminal_output::{dim, heading, render_table, Column};

pub fn run_list() -> Result<()> {
    heading("Teachers");
    let columns = vec![
        Column::left("Subject"),
        Column::left("Role"),
        Column::right("Keywords"),
        Column::left(""),
    ];
    let rows: Vec<Vec<String>> = TEACHERS
        .iter()
        .map(|profile| {
            vec![
                profile.subject.id().to_string(),
                profile.display_role.to_string(),
                SUBJECT_KEYWORDS
                    .iter()
                    .find(|(subject, _)| *subject == profile.subject)
                    .map_or(0, |(_, keywords)| keywords.len())
                    .to_string(),
                if profile.subject == DEFAULT_SUBJECT {
                    dim("default")
                } else {
                    String::new()
                },
            ]
        })
        .collect();
    print!("{}", render_table(&columns, &rows));
    Ok(())
}

pub fn run_classify(text: &str) -> Result<()> {
    println!("{}", classify_summary(text));
    Ok(())
}

fn classify_summary(text: &str) -> String {
    let classification = classify(text);
    let (profile, resolution) = resolve_teacher(TeacherChoice::Auto, text);
    let note = match resolution {
        Resolution::Fallback => " (default)",
        _ => "",
    };
    format!(
        "subject: {}\nteacher: {}{}",
        classification, profile.display_role, note
    )
}
