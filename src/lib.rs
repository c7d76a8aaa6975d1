//! 위치 기반 사용자 서비스 백엔드
//!
//! 사용자 가입, 전체 상태 토글, 저장 좌표 기준 거리 계산,
//! 가입 요일별 사용자 목록을 제공하는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **가입**: bcrypt 비밀번호 해싱, 이메일 중복 방지, 가입 즉시 토큰 발급
//! - **JWT 인증**: `Authorization: Bearer <token>` 헤더 기반 상태 없는 인증
//! - **거리 계산**: 하버사인 공식 (지구 반지름 6371km)
//! - **요일별 목록**: MongoDB `$dayOfWeek` 집계
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 토큰 검증, 사용자 부착
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use geo_user_service::core::AppState;
//! use geo_user_service::repositories::users::InMemoryUserRepository;
//! use geo_user_service::routes::configure_all_routes;
//! use geo_user_service::services::auth::TokenService;
//!
//! let state = AppState::new(Arc::new(InMemoryUserRepository::new()), TokenService::new("secret", 1), 4);
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
