//! 课程存储操作

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::entity::courses::{Column, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::errors::{OnlineCourseError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::Course,
        requests::CourseListQuery,
        responses::{CourseListItem, CourseListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出课程（分页，按选课人数倒序）
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        // 标题搜索
        if let Some(ref search) = query.search {
            select = select.filter(Column::Title.like(format!("%{}%", escape_like_pattern(search))));
        }

        // 热门课程优先
        select = select.order_by_desc(Column::TotalEnrollment);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询课程列表失败: {e}")))?;

        // 批量查询当前用户在本页课程中的选课记录
        let enrolled_course_ids: HashSet<i64> = if let Some(user_id) = query.user_id {
            let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();
            Enrollments::find()
                .filter(EnrollmentColumn::UserId.eq(user_id))
                .filter(EnrollmentColumn::CourseId.is_in(course_ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    OnlineCourseError::database_operation(format!("查询选课记录失败: {e}"))
                })?
                .into_iter()
                .map(|e| e.course_id)
                .collect()
        } else {
            HashSet::new()
        };

        let items = courses
            .into_iter()
            .map(|c| CourseListItem {
                id: c.id,
                title: c.title,
                description: c.description,
                total_enrollment: c.total_enrollment,
                is_enrolled: enrolled_course_ids.contains(&c.id),
            })
            .collect();

        Ok(CourseListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
