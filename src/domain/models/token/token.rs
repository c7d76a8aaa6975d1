//! 세션 토큰 클레임
//!
//! 토큰 페이로드는 `{ "userId": ..., "iat": ..., "exp": ... }` 형태이며,
//! 기존 클라이언트가 발급받은 토큰과 호환되도록 `userId` 키 이름을 유지합니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `userId`: 사용자 ID (MongoDB ObjectId 16진수 문자열)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub iat: i64,
    pub exp: i64,
}
