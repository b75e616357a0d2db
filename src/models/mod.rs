pub mod auth;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod exams;

pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 业务错误代码（随 ApiResponse 返回给前端）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    InternalServerError = 1000,
    BadRequest = 1001,
    Unauthorized = 1002,
    NotFound = 1003,
    Forbidden = 1004,

    // 课程模块 2xxx
    CourseNotFound = 2001,

    // 选课模块 3xxx
    EnrollFailed = 3001,
    AlreadyEnrolled = 3002,
    NotEnrolled = 3003,

    // 考试模块 4xxx
    SubmissionNotFound = 4001,
    SubmissionCreateFailed = 4002,
    SubmissionCourseMismatch = 4003,
}

/// 程序启动时间（用于统计预处理耗时）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
