use serde::Serialize;
use ts_rs::TS;

use crate::models::enrollments::entities::Enrollment;

/// 选课成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollResponse {
    pub enrollment: Enrollment,
    // 选课后课程的最新选课人数
    pub total_enrollment: i64,
}
