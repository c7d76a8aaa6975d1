//! JWT 인증 미들웨어 (Auth Guard)
//!
//! ActixWeb 요청 파이프라인에서 세션 토큰을 검증하고 사용자 레코드를 요청에 부착합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 보호된 라우트에 `wrap = "AuthMiddleware"`로 적용합니다.
/// 검증에 실패하면 핸들러를 호출하지 않고 401을 응답합니다.
///
/// ```rust,ignore
/// #[patch("/toggle-status", wrap = "AuthMiddleware")]
/// async fn toggle_status(state: web::Data<AppState>) -> Result<HttpResponse, AppError> { ... }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
