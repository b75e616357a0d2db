use std::sync::Arc;

use crate::models::{
    courses::{entities::Course, requests::CourseListQuery, responses::CourseListResponse},
    enrollments::entities::{Enrollment, EnrollmentMode},
    exams::entities::{Choice, Question, Submission},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 课程管理方法
    // 通过ID获取课程信息
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 列出课程（按选课人数倒序）
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;

    /// 选课管理方法
    // 创建选课记录并原子递增课程选课人数，返回选课记录与最新人数
    async fn create_enrollment(
        &self,
        user_id: i64,
        course_id: i64,
        mode: EnrollmentMode,
    ) -> Result<(Enrollment, i64)>;
    // 获取用户在某课程的选课记录
    async fn get_enrollment_by_user_and_course(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>>;
    // 通过ID获取选课记录
    async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>>;

    /// 考试内容方法
    // 列出课程的全部题目
    async fn list_questions_by_course(&self, course_id: i64) -> Result<Vec<Question>>;
    // 列出课程的全部选项（含答案标记，仅供评分器使用）
    async fn list_choices_by_course(&self, course_id: i64) -> Result<Vec<Choice>>;
    // 过滤出数据库中真实存在的选项ID
    async fn filter_existing_choice_ids(&self, choice_ids: Vec<i64>) -> Result<Vec<i64>>;

    /// 提交管理方法
    // 在单个事务内创建提交并关联全部选中选项
    async fn create_submission_with_choices(
        &self,
        enrollment_id: i64,
        choice_ids: Vec<i64>,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 获取提交选中的选项ID集合
    async fn get_submission_choice_ids(&self, submission_id: i64) -> Result<Vec<i64>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
