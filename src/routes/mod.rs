pub mod courses;

pub mod enrollments;

pub mod exams;

pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use exams::configure_exams_routes;

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test, web};

    use super::*;

    // 与 main.rs 相同的注册顺序：嵌套 scope 先于父级 /api/v1/courses
    fn configure_all(cfg: &mut web::ServiceConfig) {
        configure_exams_routes(cfg);
        configure_enrollments_routes(cfg);
        configure_courses_routes(cfg);
    }

    /// 选课、交卷、成绩路由不能被父级课程 scope 吞掉：
    /// 缺少令牌时应由 RequireJWT 返回 401，而不是 scope 内部匹配失败的 404
    #[actix_web::test]
    async fn test_nested_routes_reachable_under_courses_prefix() {
        let app = test::init_service(App::new().configure(configure_all)).await;

        let enroll = test::TestRequest::post()
            .uri("/api/v1/courses/1/enroll")
            .to_request();
        let resp = test::call_service(&app, enroll).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let submit = test::TestRequest::post()
            .uri("/api/v1/courses/1/submissions")
            .to_request();
        let resp = test::call_service(&app, submit).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let result = test::TestRequest::get()
            .uri("/api/v1/courses/1/submissions/2/result")
            .to_request();
        let resp = test::call_service(&app, result).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    /// 课程 scope 本身仍然可达：非法 ID 由路径提取器返回 400
    #[actix_web::test]
    async fn test_course_detail_rejects_invalid_id() {
        let app = test::init_service(App::new().configure(configure_all)).await;

        let req = test::TestRequest::get()
            .uri("/api/v1/courses/abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
