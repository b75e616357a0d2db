use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::{
    middlewares::RequireJWT,
    models::{
        ApiResponse, ErrorCode,
        enrollments::{entities::EnrollmentMode, responses::EnrollResponse},
    },
};

pub async fn enroll(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
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
                    ErrorCode::EnrollFailed,
                    "Failed to get course",
                )),
            );
        }
    };

    // 已选过课则直接返回冲突，不重复递增人数
    match storage
        .get_enrollment_by_user_and_course(user_id, course_id)
        .await
    {
        Ok(Some(enrollment)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::AlreadyEnrolled,
                enrollment,
                "User has already enrolled in the course",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error checking enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "Failed to check enrollment",
                )),
            );
        }
    }

    match storage
        .create_enrollment(user_id, course.id, EnrollmentMode::Honor)
        .await
    {
        Ok((enrollment, total_enrollment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnrollResponse {
                enrollment,
                total_enrollment,
            },
            "Enrolled successfully",
        ))),
        Err(e) => {
            error!("Error enrolling user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "Failed to enroll",
                )),
            )
        }
    }
}
