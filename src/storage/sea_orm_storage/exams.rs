//! 考试内容存储操作（题目与选项）

use super::SeaOrmStorage;
use crate::entity::choices::{Column as ChoiceColumn, Entity as Choices};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::errors::{OnlineCourseError, Result};
use crate::models::exams::entities::{Choice, Question};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出课程的全部题目
    pub async fn list_questions_by_course_impl(&self, course_id: i64) -> Result<Vec<Question>> {
        let results = Questions::find()
            .filter(QuestionColumn::CourseId.eq(course_id))
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_question()).collect())
    }

    /// 列出课程的全部选项
    pub async fn list_choices_by_course_impl(&self, course_id: i64) -> Result<Vec<Choice>> {
        let question_ids: Vec<i64> = Questions::find()
            .filter(QuestionColumn::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询题目失败: {e}")))?
            .into_iter()
            .map(|q| q.id)
            .collect();

        let results = Choices::find()
            .filter(ChoiceColumn::QuestionId.is_in(question_ids))
            .order_by_asc(ChoiceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询选项失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_choice()).collect())
    }

    /// 过滤出真实存在的选项 ID（提交时丢弃无效 ID）
    pub async fn filter_existing_choice_ids_impl(&self, choice_ids: Vec<i64>) -> Result<Vec<i64>> {
        if choice_ids.is_empty() {
            return Ok(vec![]);
        }

        let results = Choices::find()
            .filter(ChoiceColumn::Id.is_in(choice_ids))
            .all(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询选项失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.id).collect())
    }
}
