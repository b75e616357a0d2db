use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 题目（业务模型，含评分权重）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Question {
    pub id: i64,
    pub course_id: i64,
    pub question_text: String,
    // 题目分值，计入总分与满分
    pub grade_point: i64,
}

/// 选项（业务模型，含答案标记，仅存储层与评分器使用）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub is_correct: bool,
}

/// 考试提交记录（创建后不可变）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct Submission {
    pub id: i64,
    pub enrollment_id: i64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
