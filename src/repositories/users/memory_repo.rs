//! 메모리 기반 사용자 리포지토리
//!
//! MongoDB 없이 [`UserStore`] 계약을 그대로 재현합니다.
//! HTTP 통합 테스트와 서비스 단위 테스트에서 사용됩니다.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::core::errors::AppError;
use crate::domain::entities::users::User;
use crate::domain::models::listing::WeekdayUser;
use super::UserStore;

/// 삽입 순서를 유지하는 메모리 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.read().map(|users| users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 모든 사용자의 스냅샷
    pub fn snapshot(&self) -> Vec<User> {
        self.read().map(|users| users.clone()).unwrap_or_default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::DatabaseError("user store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.read()?.iter().find(|user| user.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id".to_string()))?;

        Ok(self.read()?.iter().find(|user| user.id == Some(object_id)).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.write()?;

        if users.iter().any(|existing| existing.email == user.email) {
            return Err(AppError::ConflictError("Email already used".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());

        Ok(user)
    }

    async fn toggle_all_statuses(&self) -> Result<u64, AppError> {
        let mut users = self.write()?;

        for user in users.iter_mut() {
            user.status = user.status.toggled();
        }

        Ok(users.len() as u64)
    }

    async fn find_by_register_weekdays(&self, weekdays: &[i32]) -> Result<Vec<WeekdayUser>, AppError> {
        let users = self.read()?;

        Ok(users
            .iter()
            .filter_map(|user| {
                let week_day = user.register_weekday();
                weekdays.contains(&week_day).then(|| WeekdayUser {
                    name: user.name.clone(),
                    email: user.email.clone(),
                    week_day,
                })
            })
            .collect())
    }
}
