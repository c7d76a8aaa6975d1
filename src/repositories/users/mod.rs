//! 사용자 데이터 액세스 계층 (User Store)
//!
//! [`UserStore`] trait이 저장소 계약을 정의하고, 두 구현체를 제공합니다.
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB `users` 컬렉션
//! - [`InMemoryUserRepository`](memory_repo::InMemoryUserRepository) - 프로세스 메모리 (테스트용)
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use geo_user_service::repositories::users::{UserStore, MongoUserRepository};
//!
//! let store: Arc<dyn UserStore> = Arc::new(MongoUserRepository::new(&database));
//! let user = store.find_by_email("user@example.com").await?;
//! ```

pub mod user_repo;
pub mod memory_repo;

pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;

use async_trait::async_trait;
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::listing::{store_weekdays, WeekNumber, WeekdayGroups, WeekdayUser};

/// 사용자 레코드 저장소 계약
///
/// 모든 메서드는 비동기 I/O이며 해당 요청의 처리만 일시 중단합니다.
/// 구현체는 단일 연산의 원자성만 보장하면 됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 이메일로 사용자 조회 (대소문자 구분)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// ID(ObjectId 16진수 문자열)로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - ObjectId 형식이 아닌 경우
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 할당된 레코드를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 사용 중인 이메일
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 모든 사용자의 상태를 한 번의 연산으로 뒤집고 변경된 레코드 수를 반환합니다.
    async fn toggle_all_statuses(&self) -> Result<u64, AppError>;

    /// 가입 요일이 주어진 저장소 요일 번호(1=일요일 .. 7=토요일)에 속하는 사용자 조회
    async fn find_by_register_weekdays(&self, weekdays: &[i32]) -> Result<Vec<WeekdayUser>, AppError>;

    /// 요청 요일 번호(0=일요일 .. 6=토요일)별로 사용자를 묶어 반환합니다.
    ///
    /// 요청된 모든 키가 결과에 존재하며, 범위를 벗어난 번호는 빈 그룹이 됩니다.
    async fn list_by_weekdays(&self, requested: &[WeekNumber]) -> Result<WeekdayGroups, AppError> {
        let weekdays = store_weekdays(requested);
        let rows = if weekdays.is_empty() {
            Vec::new()
        } else {
            self.find_by_register_weekdays(&weekdays).await?
        };

        Ok(WeekdayGroups::collect(requested, rows))
    }
}
