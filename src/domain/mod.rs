//! # Domain Layer
//!
//! 서비스의 도메인 타입을 계층별로 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/   ← 영속성 엔티티 (MongoDB 문서)
//! ├── dto/        ← 요청/응답 데이터 전송 객체
//! └── models/     ← 인증 컨텍스트, 토큰 클레임, 요일 그룹 등 값 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::{User, UserStatus};
pub use dto::users::request::*;
pub use dto::users::response::*;
pub use models::auth::AuthenticatedUser;
pub use models::token::TokenClaims;
