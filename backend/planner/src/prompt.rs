/// User-prompt framing for a primary-school audience.
///
/// The framing is fixed: plain language a pupil understands, an analysis with
/// a clear answer, a 400-character cap, and permission to use simple examples.
pub fn build_user_prompt(question: &str) -> String {
    format!(
        "请回答以下小学生的问题，要求：\n\
         1. 用小学生能听懂的语言\n\
         2. 分析问题并给出清晰的解答\n\
         3. 字数控制在400字以内\n\
         4. 可以举简单的例子帮助理解\n\
         \n\
         学生问题：{}",
        question
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_question_after_framing() {
        let prompt = build_user_prompt("什么是分数？");
        assert!(prompt.starts_with("请回答以下小学生的问题，要求：\n1. 用小学生能听懂的语言\n"));
        assert!(prompt.contains("3. 字数控制在400字以内\n"));
        assert!(prompt.ends_with("\n\n学生问题：什么是分数？"));
    }
}
