use serde::Serialize;
use ts_rs::TS;

use crate::models::PaginationInfo;
use crate::models::courses::entities::Course;

/// 课程列表项（附带当前用户是否已选课）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListItem {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub total_enrollment: i64,
    pub is_enrolled: bool,
}

/// 课程列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<CourseListItem>,
    pub pagination: PaginationInfo,
}

/// 考试页可见的选项（不泄露答案标记）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct ChoiceView {
    pub id: i64,
    pub choice_text: String,
}

/// 考试页可见的题目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct QuestionView {
    pub id: i64,
    pub question_text: String,
    pub grade_point: i64,
    pub choices: Vec<ChoiceView>,
}

/// 课程详情响应（含题目与选项，is_correct 永不下发）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseDetailResponse {
    pub course: Course,
    pub questions: Vec<QuestionView>,
}
