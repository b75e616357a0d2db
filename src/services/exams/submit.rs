use std::collections::{BTreeSet, HashMap};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ExamService;
use crate::middlewares::RequireJWT;
use crate::models::exams::responses::SubmitExamResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 从考试页表单中提取选中的选项ID。
///
/// 表单字段形如 `choice_<id>=on`，每个勾选的选项一个字段。
/// 前缀不匹配、ID解析失败或值不为 `on` 的字段一律跳过，
/// 返回值去重并升序排列。
pub fn extract_selected_choice_ids(form: &HashMap<String, String>) -> Vec<i64> {
    let mut ids = BTreeSet::new();
    for (key, value) in form {
        if value != "on" {
            continue;
        }
        if let Some(suffix) = key.strip_prefix("choice_") {
            if let Ok(id) = suffix.parse::<i64>() {
                ids.insert(id);
            }
        }
    }
    ids.into_iter().collect()
}

pub async fn submit_exam(
    service: &ExamService,
    request: &HttpRequest,
    course_id: i64,
    form: HashMap<String, String>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
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
                    ErrorCode::SubmissionCreateFailed,
                    "Failed to get course",
                )),
            );
        }
    }

    // 未选课不能交卷
    let enrollment = match storage
        .get_enrollment_by_user_and_course(user_id, course_id)
        .await
    {
        Ok(Some(enrollment)) => enrollment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "User is not enrolled in the course",
            )));
        }
        Err(e) => {
            error!("Error checking enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionCreateFailed,
                    "Failed to check enrollment",
                )),
            );
        }
    };

    let selected = extract_selected_choice_ids(&form);

    // 只保留数据库中真实存在的选项，防止伪造ID入库
    let choice_ids = match storage.filter_existing_choice_ids(selected).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Error filtering choice ids: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionCreateFailed,
                    "Failed to validate choices",
                )),
            );
        }
    };

    match storage
        .create_submission_with_choices(enrollment.id, choice_ids)
        .await
    {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmitExamResponse {
                submission_id: submission.id,
                course_id,
                submitted_at: submission.submitted_at.to_rfc3339(),
            },
            "Submitted successfully",
        ))),
        Err(e) => {
            error!("Error creating submission for user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionCreateFailed,
                    "Failed to create submission",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_extract_choice_ids_basic() {
        let form = form(&[
            ("choice_3", "on"),
            ("choice_1", "on"),
            ("csrfmiddlewaretoken", "abc123"),
        ]);

        assert_eq!(extract_selected_choice_ids(&form), vec![1, 3]);
    }

    #[test]
    fn test_extract_skips_malformed_suffix() {
        let form = form(&[
            ("choice_5", "on"),
            ("choice_abc", "on"),
            ("choice_", "on"),
            ("other_7", "on"),
        ]);

        assert_eq!(extract_selected_choice_ids(&form), vec![5]);
    }

    #[test]
    fn test_extract_requires_on_value() {
        let form = form(&[("choice_1", "on"), ("choice_2", "off"), ("choice_3", "")]);

        assert_eq!(extract_selected_choice_ids(&form), vec![1]);
    }

    #[test]
    fn test_extract_empty_form() {
        let form = HashMap::new();

        assert!(extract_selected_choice_ids(&form).is_empty());
    }
}
