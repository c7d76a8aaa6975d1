//! User Entity Implementation
//!
//! 서비스의 유일한 영속 엔티티인 사용자 문서를 정의합니다.
//! MongoDB `users` 컬렉션의 문서 형태와 1:1로 대응합니다.

use chrono::{DateTime as ChronoDateTime, Datelike, Utc};
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 계정 상태
///
/// 저장 시 소문자 문자열(`"active"`, `"inactive"`)로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    /// 반대 상태를 반환합니다.
    pub fn toggled(self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

/// 사용자 엔티티
///
/// `password`에는 bcrypt 해시만 저장되며 응답으로 노출되지 않습니다.
/// `register_at`은 생성 이후 변경되지 않고 요일별 목록 조회의 기준이 됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    /// 사용자 이메일 (unique, 입력된 대소문자 그대로)
    pub email: String,
    /// 해시된 비밀번호
    pub password: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub status: UserStatus,
    /// 가입 시각 (UTC)
    pub register_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 상태는 `active`, 가입 시각은 현재 시각으로 설정됩니다.
    /// ID는 저장 시점에 할당됩니다.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        address: String,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id: None,
            name,
            email,
            password: password_hash,
            address,
            latitude,
            longitude,
            status: UserStatus::Active,
            register_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 가입 시각을 chrono 타입으로 변환
    pub fn registered_at(&self) -> ChronoDateTime<Utc> {
        ChronoDateTime::<Utc>::from_timestamp_millis(self.register_at.timestamp_millis())
            .unwrap_or_default()
    }

    /// MongoDB `$dayOfWeek`와 같은 규칙의 가입 요일 번호 (1=일요일 .. 7=토요일, UTC)
    pub fn register_weekday(&self) -> i32 {
        self.registered_at().weekday().number_from_sunday() as i32
    }
}
