//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명한 액세스 토큰을 발급하고 검증합니다.
//! 리프레시 토큰은 발급하지 않으며, 만료 후에는 다시 가입 절차를 거쳐야 합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use crate::config::{ConfigError, JwtConfig};
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::token::TokenClaims;

const INVALID_TOKEN: &str = "Invalid token";

/// JWT 토큰 관리 서비스
///
/// 서명 비밀값과 만료 기간은 기동 시 한 번 정해지고 이후 변하지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    expiration: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, expiration_days: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration: Duration::days(expiration_days),
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_DAYS` 환경 변수로 생성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 운영 환경에서 비밀값이 없는 경우
    pub fn from_config() -> Result<Self, ConfigError> {
        Ok(Self::new(JwtConfig::secret()?, JwtConfig::expiration_days()))
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// 클레임은 `userId`, `iat`, `exp`만 포함합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 사용자 ID 없음 또는 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue_token(&created_user)?;
    /// ```
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + self.expiration;

        let claims = TokenClaims {
            user_id: user.id_string().ok_or_else(|| {
                AppError::internal("Token issue failed", "user has no id")
            })?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::internal("Token issue failed", e))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명 불일치, 형식 오류, 만료를 구분하지 않고 모두 같은 에러로 응답합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - `"Invalid token"`
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());

        decode::<TokenClaims>(token, &decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                AppError::AuthenticationError(INVALID_TOKEN.to_string())
            })
    }

    /// Authorization 헤더 값에서 토큰 부분 추출
    ///
    /// `"Bearer "` 접두사가 있으면 제거하고, 없으면 값 전체를 토큰으로 봅니다.
    /// 남은 토큰이 비어 있으면 `None`을 반환합니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(TokenService::extract_bearer_token("Bearer abc"), Some("abc"));
    /// assert_eq!(TokenService::extract_bearer_token("abc"), Some("abc"));
    /// assert_eq!(TokenService::extract_bearer_token("Bearer "), None);
    /// ```
    pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header).trim();

        (!token.is_empty()).then_some(token)
    }
}
