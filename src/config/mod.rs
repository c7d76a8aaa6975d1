//! # Configuration Module
//!
//! 서비스 설정을 환경 변수 기반으로 중앙집중 관리하는 모듈입니다.
//! 설정값은 기동 시점에 `.env` 프로필 파일에서 로드됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, bcrypt, CORS 설정
//! - [`auth_config`] - JWT 서명 키와 만료 기간 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # MongoDB
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="geo_users"
//!
//! # JWT 설정 (프로덕션 필수)
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="1"
//!
//! # 선택 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="10"          # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="https://app.example.com"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
