//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 기동 시 한 번 생성되어 [`AppState`](crate::core::state::AppState)를 통해
//! 핸들러와 인증 미들웨어에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geo_user_service::services::{auth::TokenService, users::UserService};
//!
//! let tokens = Arc::new(TokenService::from_config()?);
//! let users = UserService::new(store, tokens.clone(), PasswordConfig::bcrypt_cost());
//! ```

pub mod users;
pub mod auth;
