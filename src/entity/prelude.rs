//! 预导入模块，方便使用

pub use super::choices::{ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::submission_choices::{
    ActiveModel as SubmissionChoiceActiveModel, Entity as SubmissionChoices,
    Model as SubmissionChoiceModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
