use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提交成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct SubmitExamResponse {
    pub submission_id: i64,
    pub course_id: i64,
    pub submitted_at: String,
}

/// 单题评分结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct QuestionResult {
    pub question_text: String,
    pub is_correct: bool,
    // 升序排列，保证同一提交重复评分输出完全一致
    pub correct_choice_ids: Vec<i64>,
    pub selected_choice_ids: Vec<i64>,
}

/// 考试评分报告
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamResultResponse {
    pub course_id: i64,
    pub submission_id: i64,
    pub question_results: Vec<QuestionResult>,
    pub total_score: i64,
    pub passing_score: i64,
    pub passed: bool,
}
