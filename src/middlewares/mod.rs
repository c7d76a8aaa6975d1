//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization` 헤더에서 토큰 추출 (`Bearer ` 접두사 선택)
//! - 토큰 서명/만료 검증
//! - 토큰 주인의 현재 사용자 레코드를 request extension에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use geo_user_service::middlewares::AuthMiddleware;
//!
//! #[get("/distance", wrap = "AuthMiddleware")]
//! async fn distance(user: AuthenticatedUser, /* ... */) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! 인증 실패 응답:
//!
//! | 상황 | 메시지 |
//! |------|--------|
//! | 헤더 없음, 빈 토큰 | `Token missing` |
//! | 서명 불일치, 만료, 형식 오류 | `Invalid token` |
//! | 토큰 주인 없음, 조회 실패 | `Invalid token` |

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
