//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::{AppError, AppState};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TokenService;

const TOKEN_MISSING: &str = "Token missing";
const INVALID_TOKEN: &str = "Invalid token";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req).await {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 토큰을 추출해 검증하고 토큰 주인의 현재 레코드를 조회합니다.
///
/// 토큰이 유효해도 사용자가 더 이상 존재하지 않으면 거부합니다.
async fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("Server error", "application state is not configured"))?;

    let token = req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(TokenService::extract_bearer_token)
        .ok_or_else(|| AppError::AuthenticationError(TOKEN_MISSING.to_string()))?;

    let claims = state.tokens.verify_token(token)?;

    match state.users.resolve_user(&claims.user_id).await {
        Ok(Some(user)) => Ok(AuthenticatedUser::new(claims.user_id, user)),
        Ok(None) => Err(AppError::AuthenticationError(INVALID_TOKEN.to_string())),
        Err(e) => {
            log::error!("인증 사용자 조회 실패: {}", e);
            Err(AppError::AuthenticationError(INVALID_TOKEN.to_string()))
        }
    }
}
