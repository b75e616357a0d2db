/*!
 * 可选 JWT 认证中间件
 *
 * 与 RequireJWT 不同，令牌缺失或无效时不拦截请求，仅在令牌
 * 有效时把 AuthUser 写入请求扩展。用于匿名可访问、但登录后
 * 内容有差异的路由（如课程列表的已选标记）。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::debug;

use super::require_jwt::extract_and_validate_jwt;

#[derive(Clone)]
pub struct OptionalJWT;

impl<S, B> Transform<S, ServiceRequest> for OptionalJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = OptionalJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(OptionalJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct OptionalJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for OptionalJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            if let Ok(user) = extract_and_validate_jwt(&req) {
                debug!("Optional JWT authentication successful for ID: {}", user.id);
                req.extensions_mut().insert(user);
            }
            srv.call(req).await
        })
    }
}
