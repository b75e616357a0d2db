//! 提交存储操作

use std::collections::BTreeSet;

use super::SeaOrmStorage;
use crate::entity::submission_choices::{
    ActiveModel as SubmissionChoiceActiveModel, Column as SubmissionChoiceColumn,
    Entity as SubmissionChoices,
};
use crate::entity::submissions::{ActiveModel, Entity as Submissions};
use crate::errors::{OnlineCourseError, Result};
use crate::models::exams::entities::Submission;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建提交并关联选中的选项
    ///
    /// 提交行与 submission_choices 关联行在同一事务内写入，
    /// 并发的评分读取只会看到零条或全部选项，不会看到部分集合。
    pub async fn create_submission_with_choices_impl(
        &self,
        enrollment_id: i64,
        choice_ids: Vec<i64>,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        // 去重，关联表以 (submission_id, choice_id) 为联合主键
        let choice_ids: Vec<i64> = choice_ids
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ActiveModel {
            enrollment_id: Set(enrollment_id),
            submitted_at: Set(now),
            ..Default::default()
        };

        let submission = model
            .insert(&txn)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("创建提交失败: {e}")))?;

        if !choice_ids.is_empty() {
            let links = choice_ids.into_iter().map(|choice_id| {
                SubmissionChoiceActiveModel {
                    submission_id: Set(submission.id),
                    choice_id: Set(choice_id),
                }
            });

            SubmissionChoices::insert_many(links)
                .exec(&txn)
                .await
                .map_err(|e| {
                    OnlineCourseError::database_operation(format!("关联提交选项失败: {e}"))
                })?;
        }

        txn.commit()
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(submission.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取提交选中的选项 ID 集合（升序）
    pub async fn get_submission_choice_ids_impl(&self, submission_id: i64) -> Result<Vec<i64>> {
        let results = SubmissionChoices::find()
            .filter(SubmissionChoiceColumn::SubmissionId.eq(submission_id))
            .order_by_asc(SubmissionChoiceColumn::ChoiceId)
            .all(&self.db)
            .await
            .map_err(|e| OnlineCourseError::database_operation(format!("查询提交选项失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.choice_id).collect())
    }
}
