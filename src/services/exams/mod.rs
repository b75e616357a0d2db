pub mod grading;
pub mod result;
pub mod submit;

use std::collections::HashMap;
use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::storage::Storage;

pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 提交考试答卷
    pub async fn submit_exam(
        &self,
        req: &HttpRequest,
        course_id: i64,
        form: HashMap<String, String>,
    ) -> ActixResult<HttpResponse> {
        submit::submit_exam(self, req, course_id, form).await
    }

    // 查询评分报告
    pub async fn get_exam_result(
        &self,
        req: &HttpRequest,
        course_id: i64,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        result::get_exam_result(self, req, course_id, submission_id).await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use actix_web::{HttpMessage, body::to_bytes, http::StatusCode, test, web};
    use async_trait::async_trait;

    use super::*;
    use crate::errors::Result;
    use crate::models::auth::entities::AuthUser;
    use crate::models::courses::{
        entities::Course, requests::CourseListQuery, responses::CourseListResponse,
    };
    use crate::models::enrollments::entities::{Enrollment, EnrollmentMode};
    use crate::models::exams::entities::{Choice, Question, Submission};
    use crate::models::{ErrorCode, PaginationInfo};

    /// 内存桩存储，记录提交创建调用
    #[derive(Default)]
    struct StubStorage {
        courses: Vec<Course>,
        enrollments: Vec<Enrollment>,
        submissions: Vec<Submission>,
        questions: Vec<Question>,
        choices: Vec<Choice>,
        submission_choice_ids: Vec<i64>,
        created_submissions: Mutex<Vec<(i64, Vec<i64>)>>,
    }

    #[async_trait]
    impl Storage for StubStorage {
        async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
            Ok(self.courses.iter().find(|c| c.id == course_id).cloned())
        }

        async fn list_courses_with_pagination(
            &self,
            _query: CourseListQuery,
        ) -> Result<CourseListResponse> {
            Ok(CourseListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page: 1,
                    page_size: 10,
                    total: 0,
                    total_pages: 0,
                },
            })
        }

        async fn create_enrollment(
            &self,
            _user_id: i64,
            _course_id: i64,
            _mode: EnrollmentMode,
        ) -> Result<(Enrollment, i64)> {
            unimplemented!("考试服务测试不走选课创建")
        }

        async fn get_enrollment_by_user_and_course(
            &self,
            user_id: i64,
            course_id: i64,
        ) -> Result<Option<Enrollment>> {
            Ok(self
                .enrollments
                .iter()
                .find(|e| e.user_id == user_id && e.course_id == course_id)
                .cloned())
        }

        async fn get_enrollment_by_id(&self, enrollment_id: i64) -> Result<Option<Enrollment>> {
            Ok(self
                .enrollments
                .iter()
                .find(|e| e.id == enrollment_id)
                .cloned())
        }

        async fn list_questions_by_course(&self, course_id: i64) -> Result<Vec<Question>> {
            Ok(self
                .questions
                .iter()
                .filter(|q| q.course_id == course_id)
                .cloned()
                .collect())
        }

        async fn list_choices_by_course(&self, course_id: i64) -> Result<Vec<Choice>> {
            let question_ids: Vec<i64> = self
                .questions
                .iter()
                .filter(|q| q.course_id == course_id)
                .map(|q| q.id)
                .collect();
            Ok(self
                .choices
                .iter()
                .filter(|c| question_ids.contains(&c.question_id))
                .cloned()
                .collect())
        }

        async fn filter_existing_choice_ids(&self, choice_ids: Vec<i64>) -> Result<Vec<i64>> {
            Ok(choice_ids
                .into_iter()
                .filter(|id| self.choices.iter().any(|c| c.id == *id))
                .collect())
        }

        async fn create_submission_with_choices(
            &self,
            enrollment_id: i64,
            choice_ids: Vec<i64>,
        ) -> Result<Submission> {
            self.created_submissions
                .lock()
                .unwrap()
                .push((enrollment_id, choice_ids));
            Ok(Submission {
                id: 99,
                enrollment_id,
                submitted_at: chrono::Utc::now(),
            })
        }

        async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
            Ok(self
                .submissions
                .iter()
                .find(|s| s.id == submission_id)
                .cloned())
        }

        async fn get_submission_choice_ids(&self, _submission_id: i64) -> Result<Vec<i64>> {
            Ok(self.submission_choice_ids.clone())
        }
    }

    fn course(id: i64) -> Course {
        Course {
            id,
            title: format!("Course {id}"),
            description: None,
            total_enrollment: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    fn enrollment(id: i64, user_id: i64, course_id: i64) -> Enrollment {
        Enrollment {
            id,
            user_id,
            course_id,
            mode: EnrollmentMode::Honor,
            joined_at: chrono::Utc::now(),
        }
    }

    fn request_with_storage(
        storage: Arc<dyn Storage>,
        user: Option<AuthUser>,
    ) -> actix_web::HttpRequest {
        let req = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();
        if let Some(user) = user {
            req.extensions_mut().insert(user);
        }
        req
    }

    fn student(id: i64) -> Option<AuthUser> {
        Some(AuthUser {
            id,
            role: "student".to_string(),
        })
    }

    async fn status_and_code(resp: HttpResponse) -> (StatusCode, i64) {
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json["code"].as_i64().unwrap())
    }

    /// 未选课的用户交卷：404 NotEnrolled，且不创建任何提交记录
    #[actix_web::test]
    async fn test_submit_without_enrollment_creates_nothing() {
        let stub = Arc::new(StubStorage {
            courses: vec![course(1)],
            ..Default::default()
        });
        let req = request_with_storage(stub.clone(), student(7));
        let service = ExamService::new_lazy();

        let form = HashMap::from([("choice_1".to_string(), "on".to_string())]);
        let resp = service.submit_exam(&req, 1, form).await.unwrap();

        let (status, code) = status_and_code(resp).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NotEnrolled as i64);
        assert!(stub.created_submissions.lock().unwrap().is_empty());
    }

    /// 提交存在但不属于 URL 中的课程：直接 404，不做跨课程评分
    #[actix_web::test]
    async fn test_result_course_mismatch_fails_fast() {
        let stub = Arc::new(StubStorage {
            courses: vec![course(1), course(2)],
            enrollments: vec![enrollment(10, 7, 2)],
            submissions: vec![Submission {
                id: 5,
                enrollment_id: 10,
                submitted_at: chrono::Utc::now(),
            }],
            ..Default::default()
        });
        let req = request_with_storage(stub, student(7));
        let service = ExamService::new_lazy();

        let resp = service.get_exam_result(&req, 1, 5).await.unwrap();

        let (status, code) = status_and_code(resp).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::SubmissionCourseMismatch as i64);
    }

    /// 正常交卷：只有真实存在的选项 ID 被持久化
    #[actix_web::test]
    async fn test_submit_persists_only_existing_choices() {
        let stub = Arc::new(StubStorage {
            courses: vec![course(1)],
            enrollments: vec![enrollment(10, 7, 1)],
            questions: vec![Question {
                id: 1,
                course_id: 1,
                question_text: "Q1".to_string(),
                grade_point: 5,
            }],
            choices: vec![Choice {
                id: 10,
                question_id: 1,
                choice_text: "A".to_string(),
                is_correct: true,
            }],
            ..Default::default()
        });
        let req = request_with_storage(stub.clone(), student(7));
        let service = ExamService::new_lazy();

        let form = HashMap::from([
            ("choice_10".to_string(), "on".to_string()),
            ("choice_999".to_string(), "on".to_string()),
        ]);
        let resp = service.submit_exam(&req, 1, form).await.unwrap();

        let (status, code) = status_and_code(resp).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(code, ErrorCode::Success as i64);
        assert_eq!(
            *stub.created_submissions.lock().unwrap(),
            vec![(10, vec![10])]
        );
    }
}
