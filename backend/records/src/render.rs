//! Text layouts for showing and printing a record.

use tutorforge_core::QaRecord;

/// Layout shown right after an answer arrives.
pub fn display_text(record: &QaRecord) -> String {
    format!(
        "【{}回答】\n\n问题：{}\n\n{}",
        record.teacher_role, record.question, record.answer
    )
}

/// Layout for a record loaded from disk; adds the recorded time.
pub fn display_loaded_text(record: &QaRecord) -> String {
    format!("{}\n\n记录时间：{}", display_text(record), record.timestamp_iso)
}

/// Plain-text layout handed to the printer.
pub fn print_text(record: &QaRecord) -> String {
    format!(
        "学生问题：{}\n\n{}回答：\n{}\n\n时间：{}",
        record.question, record.teacher_role, record.answer, record.timestamp_iso
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> QaRecord {
        QaRecord {
            question: "水为什么会结冰？".into(),
            answer: "温度降到0℃以下时，水分子排列成固定的结构。".into(),
            teacher_role: "科学老师".into(),
            timestamp_iso: "2026-10-15T09:30:00+08:00".into(),
        }
    }

    #[test]
    fn display_layout() {
        assert_eq!(
            display_text(&record()),
            "【科学老师回答】\n\n问题：水为什么会结冰？\n\n温度降到0℃以下时，水分子排列成固定的结构。"
        );
    }

    #[test]
    fn loaded_layout_appends_time() {
        let text = display_loaded_text(&record());
        assert!(text.starts_with("【科学老师回答】"));
        assert!(text.ends_with("\n\n记录时间：2026-10-15T09:30:00+08:00"));
    }

    #[test]
    fn print_layout() {
        assert_eq!(
            print_text(&record()),
            "学生问题：水为什么会结冰？\n\n科学老师回答：\n温度降到0℃以下时，水分子排列成固定的结构。\n\n时间：2026-10-15T09:30:00+08:00"
        );
    }
}
