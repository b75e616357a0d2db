//! 选项实体
//!
//! 一个选项只属于一个题目。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub question_id: i64,
    #[sea_orm(column_type = "Text")]
    pub choice_text: String,
    pub is_correct: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
    #[sea_orm(has_many = "super::submission_choices::Entity")]
    SubmissionChoices,
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<super::submission_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubmissionChoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_choice(self) -> crate::models::exams::entities::Choice {
        crate::models::exams::entities::Choice {
            id: self.id,
            question_id: self.question_id,
            choice_text: self.choice_text,
            is_correct: self.is_correct,
        }
    }
}
