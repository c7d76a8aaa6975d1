//! 인증 관련 설정 관리 모듈
//!
//! 세션 토큰(JWT) 서명 비밀키와 만료 기간을 관리합니다.

use std::env;
use thiserror::Error;
use crate::config::Environment;

/// 개발 환경에서만 사용하는 기본 서명 키
const DEV_JWT_SECRET: &str = "dev-only-jwt-secret";

/// 설정 로딩 에러
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} must be set in production")]
    Missing(&'static str),
}

/// JSON Web Token (JWT) 관련 설정
///
/// 토큰은 HMAC-SHA256으로 서명되며, 서버의 공유 비밀키 하나로
/// 발급과 검증을 모두 수행합니다.
///
/// ## 환경 변수
///
/// ```bash
/// export JWT_SECRET="$(openssl rand -base64 32)"
/// export JWT_EXPIRATION_DAYS="1"
/// ```
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 프로덕션에서 `JWT_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고 로그와 함께 개발용 기본값을 사용합니다.
    pub fn secret() -> Result<String, ConfigError> {
        Self::secret_for(&Environment::current(), env::var("JWT_SECRET").ok())
    }

    /// 주어진 환경과 설정값으로 비밀키를 결정합니다.
    pub fn secret_for(environment: &Environment, configured: Option<String>) -> Result<String, ConfigError> {
        match configured.filter(|secret| !secret.is_empty()) {
            Some(secret) => Ok(secret),
            None if *environment == Environment::Production => Err(ConfigError::Missing("JWT_SECRET")),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok(DEV_JWT_SECRET.to_string())
            }
        }
    }

    /// 세션 토큰의 만료 기간(일). 기본값: 1일
    pub fn expiration_days() -> i64 {
        env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|days| days.parse().ok())
            .filter(|days: &i64| *days > 0)
            .unwrap_or(1)
    }
}
