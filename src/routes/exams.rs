use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::ExamService;
use crate::utils::{SafeCourseIdI64, SafeSubmissionIdI64};

// 懒加载的全局 ExamService 实例
static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);

// 提交考试答卷（表单字段 choice_<id>=on）
pub async fn submit_exam(
    req: HttpRequest,
    path: SafeCourseIdI64,
    form: web::Form<HashMap<String, String>>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .submit_exam(&req, path.0, form.into_inner())
        .await
}

// 查询评分报告
pub async fn get_exam_result(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    submission_id: SafeSubmissionIdI64,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .get_exam_result(&req, course_id.0, submission_id.0)
        .await
}

// 配置路由
pub fn configure_exams_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses/{course_id}/submissions")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::post().to(submit_exam)))
            .service(
                web::resource("/{submission_id}/result").route(web::get().to(get_exam_result)),
            ),
    );
}
