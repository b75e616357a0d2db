use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ExamService, grading};
use crate::middlewares::RequireJWT;
use crate::models::exams::responses::ExamResultResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_exam_result(
    service: &ExamService,
    request: &HttpRequest,
    course_id: i64,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let auth_user = match RequireJWT::extract_auth_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
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
    }

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            error!("Error getting submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get submission",
                )),
            );
        }
    };

    let enrollment = match storage.get_enrollment_by_id(submission.enrollment_id).await {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "提交不存在",
            )));
        }
        Err(e) => {
            error!("Error getting enrollment {}: {}", submission.enrollment_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get enrollment",
                )),
            );
        }
    };

    // 提交不属于URL中的课程：立即404，不做跨课程评分
    if enrollment.course_id != course_id {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionCourseMismatch,
            "提交不属于该课程",
        )));
    }

    // 只有提交者本人或管理员能查看成绩
    if enrollment.user_id != auth_user.id && auth_user.role != "admin" {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Permission denied",
        )));
    }

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

    let selected_choice_ids = match storage.get_submission_choice_ids(submission_id).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Error getting choices for submission {}: {}", submission_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to get submission choices",
                )),
            );
        }
    };

    let graded = grading::grade_submission(&questions, &choices, &selected_choice_ids);

    let response = ExamResultResponse {
        course_id,
        submission_id,
        question_results: graded.question_results,
        total_score: graded.total_score,
        passing_score: graded.passing_score,
        passed: graded.passed,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
