//! Static teacher personas and the subject keyword table.
//!
//! Both tables are compile-time constants. The P.E. keyword group has no
//! matching profile; questions routed there fall back to [`DEFAULT_SUBJECT`].

use crate::types::{Subject, TeacherProfile};

/// Subject whose teacher answers when nothing else applies.
pub const DEFAULT_SUBJECT: Subject = Subject::Chinese;

pub const TEACHERS: &[TeacherProfile] = &[
    TeacherProfile {
        subject: Subject::Math,
        display_role: "数学老师",
        system_prompt: "你是一位经验丰富的小学数学老师，擅长用简单生动的语言解释数学概念，通过生活中的例子帮助小学生理解数学问题。不需要在回答中复述学生的问题。",
    },
    TeacherProfile {
        subject: Subject::Chinese,
        display_role: "语文老师",
        system_prompt: "你是一位温和耐心的小学语文老师，擅长用通俗易懂的语言解释语文知识，通过有趣的故事和例子帮助小学生理解文字和语言。也能够帮助小学生修改和润色作文片段。不需要在回答中复述学生的问题。",
    },
    TeacherProfile {
        subject: Subject::English,
        display_role: "英语老师",
        system_prompt: "你是一位活泼开朗的小学英语老师，擅长用游戏和歌曲的方式教授英语，用简单的中文解释英语单词和句子。不需要在回答中复述学生的问题。",
    },
    TeacherProfile {
        subject: Subject::Science,
        display_role: "科学老师",
        system_prompt: "你是一位充满好奇心的小学科学老师，擅长用实验和生活中的现象解释科学知识，让小学生感受科学的神奇和有趣。不需要在回答中复述学生的问题。",
    },
    TeacherProfile {
        subject: Subject::History,
        display_role: "历史老师",
        system_prompt: "你是一位博学有趣的小学历史老师，擅长用历史故事和人物传记让历史变得生动有趣，帮助小学生理解历史事件的意义。不需要在回答中复述学生的问题。",
    },
    TeacherProfile {
        subject: Subject::Morality,
        display_role: "品德老师",
        system_prompt: "你是一位和蔼可亲的小学品德老师，擅长用生活中的小故事和寓言讲道理，帮助小学生树立正确的价值观。不需要在回答中复述学生的问题。",
    },
];

/// Keyword groups in classification order. Earlier groups win ties.
pub const SUBJECT_KEYWORDS: &[(Subject, &[&str])] = &[
    (
        Subject::Math,
        &["数学", "计算", "加减", "乘除", "几何", "分数", "小数", "应用题", "算式", "数字"],
    ),
    (
        Subject::Chinese,
        &["语文", "作文", "阅读", "词语", "句子", "拼音", "汉字", "古诗", "课文", "造句"],
    ),
    (
        Subject::English,
        &["英语", "单词", "字母", "句子", "对话", "语法", "翻译", "英文", "英语课"],
    ),
    (
        Subject::Science,
        &["科学", "实验", "自然", "植物", "动物", "天气", "物理", "化学", "生物", "地球"],
    ),
    (
        Subject::History,
        &["历史", "古代", "现代", "朝代", "人物", "事件", "战争", "文化", "传统"],
    ),
    (
        Subject::Morality,
        &["品德", "道德", "规则", "礼貌", "诚实", "友善", "爱国", "法律", "公民"],
    ),
    (
        Subject::PhysicalEducation,
        &[
            "体育", "运动", "跑步", "跳远", "篮球", "足球", "跳绳", "游戏", "健康", "锻炼", "身体",
            "体能",
        ],
    ),
];

/// Registered profile for a subject, if any.
pub fn profile_for(subject: Subject) -> Option<&'static TeacherProfile> {
    TEACHERS.iter().find(|p| p.subject == subject)
}

pub fn default_profile() -> &'static TeacherProfile {
    // DEFAULT_SUBJECT is always registered.
    profile_for(DEFAULT_SUBJECT).unwrap_or(&TEACHERS[1])
}
