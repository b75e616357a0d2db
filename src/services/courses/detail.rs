use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashMap;
use tracing::error;

use super::CourseService;
use crate::models::courses::responses::{ChoiceView, CourseDetailResponse, QuestionView};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_course(
    service: &CourseService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let course = match storage.get_course_by_id(course_id).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Error getting course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get course",
                )),
            );
        }
    };

    let questions = match storage.list_questions_by_course(course_id).await {
        Ok(questions) => questions,
        Err(e) => {
            error!("Error listing questions for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list questions",
                )),
            );
        }
    };

    let choices = match storage.list_choices_by_course(course_id).await {
        Ok(choices) => choices,
        Err(e) => {
            error!("Error listing choices for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list choices",
                )),
            );
        }
    };

    // 按题目分组选项，is_correct 不下发到考试页
    let mut choices_by_question: HashMap<i64, Vec<ChoiceView>> = HashMap::new();
    for choice in choices {
        choices_by_question
            .entry(choice.question_id)
            .or_default()
            .push(ChoiceView {
                id: choice.id,
                choice_text: choice.choice_text,
            });
    }

    let questions = questions
        .into_iter()
        .map(|q| QuestionView {
            id: q.id,
            question_text: q.question_text,
            grade_point: q.grade_point,
            choices: choices_by_question.remove(&q.id).unwrap_or_default(),
        })
        .collect();

    let response = CourseDetailResponse { course, questions };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
