//! # MongoDB 사용자 리포지토리
//!
//! `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `email` 유니크 인덱스로 중복 가입을 저장소 수준에서 차단
//! - **단일 연산 토글**: 집계 파이프라인 업데이트 하나로 전체 상태 반전
//! - **서버 측 요일 계산**: `$dayOfWeek`(UTC)로 가입 요일 필터링

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, from_document, oid::ObjectId, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::core::errors::AppError;
use crate::db::Database;
use crate::domain::entities::users::{User, UserStatus};
use crate::domain::models::listing::WeekdayUser;
use super::UserStore;

/// 사용자 컬렉션 이름
pub const USERS_COLLECTION: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 기반 사용자 리포지토리
///
/// 기동 시 주입받은 [`Database`] 핸들에서 컬렉션을 얻어 사용합니다.
///
/// ## 인덱스
///
/// - `email_unique`: `email` 오름차순, UNIQUE
/// - `register_at_asc`: `register_at` 오름차순
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(database: &Database) -> Self {
        log::debug!("컬렉션 준비: {}.{}", database.database_name(), USERS_COLLECTION);

        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 컬렉션 인덱스를 생성합니다.
    ///
    /// 애플리케이션 기동 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    ///
    /// # 주의사항
    ///
    /// 기존 데이터에 중복 이메일이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let register_at_index = IndexModel::builder()
            .keys(doc! { "register_at": 1 })
            .options(IndexOptions::builder()
                .name("register_at_asc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, register_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid user id".to_string()))?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 저장
    ///
    /// 중복 여부는 유니크 인덱스가 최종 판단하며, 중복 키 에러는
    /// `ConflictError`로 변환됩니다.
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection
            .insert_one(&user)
            .await
            .map_err(|e| insert_error(write_error_code(&e), e))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("inserted id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    /// `updateMany` + 파이프라인 `$cond`로 모든 문서의 상태를 한 번에 반전합니다.
    async fn toggle_all_statuses(&self) -> Result<u64, AppError> {
        let result = self.collection
            .update_many(doc! {}, toggle_status_pipeline())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count)
    }

    async fn find_by_register_weekdays(&self, weekdays: &[i32]) -> Result<Vec<WeekdayUser>, AppError> {
        let documents: Vec<Document> = self.collection
            .aggregate(register_weekday_pipeline(weekdays))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documents.into_iter().map(decode_weekday_user).collect()
    }
}

/// 전체 상태 반전용 업데이트 파이프라인
///
/// `active`는 `inactive`로, 그 외 값은 모두 `active`가 됩니다.
fn toggle_status_pipeline() -> Vec<Document> {
    let active = UserStatus::Active.as_str();
    let inactive = UserStatus::Inactive.as_str();

    vec![doc! {
        "$set": {
            "status": {
                "$cond": [{ "$eq": ["$status", active] }, inactive, active]
            }
        }
    }]
}

/// 가입 요일(1=일요일, UTC) 필터 집계 파이프라인
///
/// 결과 행은 `_id` 없이 `name`, `email`, `week_day`만 포함합니다.
fn register_weekday_pipeline(weekdays: &[i32]) -> Vec<Document> {
    vec![
        doc! { "$addFields": { "week_day": { "$dayOfWeek": "$register_at" } } },
        doc! { "$match": { "week_day": { "$in": weekdays.to_vec() } } },
        doc! { "$project": { "_id": 0, "name": 1, "email": 1, "week_day": 1 } },
    ]
}

fn decode_weekday_user(document: Document) -> Result<WeekdayUser, AppError> {
    from_document::<WeekdayUser>(document).map_err(|e| AppError::DatabaseError(e.to_string()))
}

fn write_error_code(error: &mongodb::error::Error) -> Option<i32> {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => Some(write_error.code),
        _ => None,
    }
}

/// 삽입 실패를 `AppError`로 변환합니다. 중복 키(11000)는 `ConflictError`입니다.
fn insert_error(code: Option<i32>, error: impl std::fmt::Display) -> AppError {
    match code {
        Some(DUPLICATE_KEY_CODE) => AppError::ConflictError("Email already used".to_string()),
        _ => AppError::DatabaseError(error.to_string()),
    }
}
