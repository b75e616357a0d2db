//! 路径参数安全提取器
//!
//! 将路径中的数字 ID 解析为 i64，非法值直接返回统一格式的 400 响应。

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, HttpResponse, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_id_extractor {
    ($(
        $name:ident($param:literal)
    ),* $(,)?) => {
        $(
            pub struct $name(pub i64);

            impl FromRequest for $name {
                type Error = actix_web::Error;
                type Future = Ready<Result<Self, Self::Error>>;

                fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                    let parsed = req
                        .match_info()
                        .get($param)
                        .and_then(|v| v.parse::<i64>().ok())
                        .filter(|id| *id > 0);

                    let result = match parsed {
                        Some(id) => Ok($name(id)),
                        None => {
                            let response = HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::BadRequest,
                                    concat!("Invalid path parameter: ", $param),
                                ),
                            );
                            Err(InternalError::from_response(
                                concat!("Invalid path parameter: ", $param),
                                response,
                            )
                            .into())
                        }
                    };

                    ready(result)
                }
            }
        )*
    };
}

define_safe_id_extractor! {
    SafeCourseIdI64("course_id"),
    SafeSubmissionIdI64("submission_id"),
}
