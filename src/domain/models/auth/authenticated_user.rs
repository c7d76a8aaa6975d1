use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;

/// Auth Guard가 검증 후 요청에 부착하는 사용자 정보
///
/// 토큰의 `userId`로 조회한 사용자 레코드 전체를 담습니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 저장소에서 조회한 사용자 레코드
    pub user: User,
}

impl AuthenticatedUser {
    pub fn new(user_id: String, user: User) -> Self {
        Self { user_id, user }
    }

    /// 사용자의 저장된 좌표 `(위도, 경도)`
    pub fn coordinates(&self) -> (f64, f64) {
        (self.user.latitude, self.user.longitude)
    }
}

/// ActixWeb FromRequest trait 구현
///
/// `AuthMiddleware`가 적용되지 않은 라우트에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(
                AppError::AuthenticationError("Token missing".to_string()).into()
            )),
        }
    }
}
