//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::errors::{OnlineCourseError, Result};
use crate::models::enrollments::entities::{Enrollment, EnrollmentMode};
use sea_orm::sea_query::{Expr, ExprTrait};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// 选课插入与 total_enrollment 递增在同一事务内完成；
    /// 递增使用 SQL 端表达式（total_enrollment = total_enrollment + 1），
    /// 避免读-改-写竞争导致的丢失更新。
    pub async fn create_enrollment_impl(
        &self,
        user_id: i64,
        course_id: i64,
        mode: EnrollmentMode,
    ) -> Result<(Enrollment, i64)> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(course_id),
            mode: Set(mode.to_string()),
            joined_at: Set(now),
            ..Default::default()
        };

        let enrollment = model
            .insert(&txn)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("创建选课记录失败: {e}")))?;

        Courses::update_many()
            .col_expr(
                CourseColumn::TotalEnrollment,
                Expr::col(CourseColumn::TotalEnrollment).add(1),
            )
            .filter(CourseColumn::Id.eq(course_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                OnlineCourseError::database_operation(format!("更新课程选课人数失败: {e}"))
            })?;

        let total_enrollment = Courses::find_by_id(course_id)
            .one(&txn)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询课程失败: {e}")))?
            .map(|c| c.total_enrollment)
            .unwrap_or_default();

        txn.commit()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("提交事务失败: {e}")))?;

        Ok((enrollment.into_enrollment(), total_enrollment))
    }

    /// 获取用户在某课程的选课记录
    pub async fn get_enrollment_by_user_and_course_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 通过 ID 获取选课记录
    pub async fn get_enrollment_by_id_impl(
        &self,
        enrollment_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find_by_id(enrollment_id)
            .one(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }
}
