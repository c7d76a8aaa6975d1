//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소 구현체는 기동 시 한 번 생성되어 `Arc<dyn UserStore>`로 서비스에 주입됩니다.
//!
//! # Features
//!
//! - MongoDB 영구 저장소와 메모리 저장소가 같은 계약을 공유
//! - 저장소 오류는 `AppError::DatabaseError`로 통일
//!
//! # Examples
//!
//! ```rust,ignore
//! use geo_user_service::repositories::users::{MongoUserRepository, UserStore};
//!
//! let user_repo = MongoUserRepository::new(&database);
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod users;
