//! 인증 서비스 모듈
//!
//! 세션 토큰(JWT) 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리 (기본 1일)
//!
//! # Examples
//!
//! ```rust,ignore
//! use geo_user_service::services::auth::TokenService;
//!
//! let token_service = TokenService::from_config()?;
//! let token = token_service.issue_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
